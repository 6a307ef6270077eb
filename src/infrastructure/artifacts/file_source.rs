use super::preprocessor::ColumnPreprocessor;
use super::smartcore_model::{PriceModelArtifact, SmartCorePriceModel};
use crate::config::ArtifactEnvConfig;
use crate::domain::errors::{ArtifactKind, DashboardError};
use crate::domain::ports::{ArtifactSource, FeatureTransform, PriceModel};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Reads the preprocessor and model JSON artifacts from disk on every call.
#[derive(Debug, Clone)]
pub struct FileArtifactSource {
    preprocessor_path: PathBuf,
    model_path: PathBuf,
}

impl FileArtifactSource {
    pub fn new(preprocessor_path: PathBuf, model_path: PathBuf) -> Self {
        Self {
            preprocessor_path,
            model_path,
        }
    }

    pub fn from_config(config: &ArtifactEnvConfig) -> Self {
        Self::new(config.preprocessor_path.clone(), config.model_path.clone())
    }

    pub fn preprocessor_path(&self) -> &Path {
        &self.preprocessor_path
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

fn read_json<T: DeserializeOwned>(kind: ArtifactKind, path: &Path) -> Result<T, DashboardError> {
    let load_error = |reason: String| {
        error!("Failed to load {} artifact {:?}: {}", kind, path, reason);
        DashboardError::ArtifactLoad {
            kind,
            path: path.to_path_buf(),
            reason,
        }
    };

    let buffer = fs::read(path).map_err(|e| load_error(e.to_string()))?;
    let artifact = serde_json::from_slice(&buffer).map_err(|e| load_error(e.to_string()))?;

    info!("Successfully loaded {} artifact from {:?}", kind, path);
    Ok(artifact)
}

impl ArtifactSource for FileArtifactSource {
    fn load_preprocessor(&self) -> Result<Box<dyn FeatureTransform>, DashboardError> {
        let preprocessor: ColumnPreprocessor =
            read_json(ArtifactKind::Preprocessor, &self.preprocessor_path)?;
        Ok(Box::new(preprocessor))
    }

    fn load_model(&self) -> Result<Box<dyn PriceModel>, DashboardError> {
        let artifact: PriceModelArtifact = read_json(ArtifactKind::Model, &self.model_path)?;
        Ok(Box::new(SmartCorePriceModel::new(artifact)))
    }
}
