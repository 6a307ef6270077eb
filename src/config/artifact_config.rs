use std::path::PathBuf;

/// Locations of the externally trained artifacts
#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    pub preprocessor_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            preprocessor_path: PathBuf::from("preprocessor.json"),
            model_path: PathBuf::from("car_price_model.json"),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            preprocessor_path: lookup("PREPROCESSOR_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preprocessor_path),
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
        }
    }
}
