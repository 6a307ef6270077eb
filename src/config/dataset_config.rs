//! Dataset configuration parsing from environment variables.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use std::path::PathBuf;
use tracing::warn;

/// Year `Car Age` is measured against when `REFERENCE_YEAR` is unset.
/// This is the year the dataset was collected; bump it with the dataset.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

#[derive(Debug, Clone)]
pub struct DatasetEnvConfig {
    pub path: PathBuf,
    pub reference_year: i32,
}

impl Default for DatasetEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Alpha_Motors.csv"),
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

impl DatasetEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let path = lookup("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.path);

        let reference_year = match lookup("REFERENCE_YEAR") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid REFERENCE_YEAR: {}", raw))?,
            None => defaults.reference_year,
        };

        let current_year = Utc::now().year();
        if reference_year < current_year {
            warn!(
                "REFERENCE_YEAR {} is behind the current year {}; car ages are measured against {}",
                reference_year, current_year, reference_year
            );
        }

        Ok(Self {
            path,
            reference_year,
        })
    }
}
