use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which externally trained artifact an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Preprocessor,
    Model,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Preprocessor => write!(f, "preprocessor"),
            ArtifactKind::Model => write!(f, "model"),
        }
    }
}

/// Errors surfaced by the loader and the prediction adapter.
///
/// Every variant is fatal for the operation that raised it; callers render
/// the message instead of substituting a default value.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Malformed listing at line {line}, column '{column}': {reason} (value: {value:?})")]
    DataFormat {
        line: u64,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Dataset unavailable at {path}: {source}")]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {kind} artifact from {path}: {reason}")]
    ArtifactLoad {
        kind: ArtifactKind,
        path: PathBuf,
        reason: String,
    },

    #[error("Schema mismatch on '{column}': {reason}")]
    SchemaMismatch { column: String, reason: String },

    #[error("Prediction failed: {reason}")]
    Prediction { reason: String },
}

impl DashboardError {
    pub fn data_format(
        line: u64,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DashboardError::DataFormat {
            line,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn schema_mismatch(column: impl Into<String>, reason: impl Into<String>) -> Self {
        DashboardError::SchemaMismatch {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Short label for the error family, used by the UI headline
    pub fn kind_label(&self) -> &'static str {
        match self {
            DashboardError::DataFormat { .. } => "Data format error",
            DashboardError::DatasetUnavailable { .. } => "Dataset unavailable",
            DashboardError::ArtifactLoad { .. } => "Artifact load error",
            DashboardError::SchemaMismatch { .. } => "Schema mismatch",
            DashboardError::Prediction { .. } => "Prediction error",
        }
    }
}
