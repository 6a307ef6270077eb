//! Configuration module for the Alpha Motors dashboard.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Dataset, Artifacts, and Display.

mod artifact_config;
mod dataset_config;
mod display_config;

pub use artifact_config::ArtifactEnvConfig;
pub use dataset_config::{DEFAULT_REFERENCE_YEAR, DatasetEnvConfig};
pub use display_config::DisplayEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset: DatasetEnvConfig,
    pub artifacts: ArtifactEnvConfig,
    pub display: DisplayEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset =
            DatasetEnvConfig::from_lookup(&lookup).context("Failed to load dataset config")?;
        let artifacts = ArtifactEnvConfig::from_lookup(&lookup);
        let display =
            DisplayEnvConfig::from_lookup(&lookup).context("Failed to load display config")?;

        Ok(Self {
            dataset,
            artifacts,
            display,
        })
    }
}
