mod file_source;
mod preprocessor;
mod smartcore_model;

pub use file_source::FileArtifactSource;
pub use preprocessor::{CategoricalEncoder, ColumnPreprocessor, NumericScaler};
pub use smartcore_model::{ForestRegressor, PriceModelArtifact, SmartCorePriceModel};
