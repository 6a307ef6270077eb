// Dataset loading, cleaning, caching and aggregation
pub mod data;

// Price estimation over trained artifacts
pub mod ml;
