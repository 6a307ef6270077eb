// Domain-specific error types
pub mod errors;

// Car listings as loaded from the dataset
pub mod listing;

// Port interfaces (artifacts, transforms, models)
pub mod ports;

// Prediction request and its column registry
pub mod prediction;
