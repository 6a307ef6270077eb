use crate::domain::errors::DashboardError;
use crate::domain::ports::PriceModel;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// On-disk model envelope: the fitted forest plus the feature names it was
/// trained on, so a preprocessor/model pair from different fits is caught.
#[derive(Serialize, Deserialize)]
pub struct PriceModelArtifact {
    pub feature_names: Vec<String>,
    pub estimator: ForestRegressor,
}

pub struct SmartCorePriceModel {
    artifact: PriceModelArtifact,
}

impl SmartCorePriceModel {
    pub fn new(artifact: PriceModelArtifact) -> Self {
        Self { artifact }
    }
}

impl PriceModel for SmartCorePriceModel {
    fn predict(&self, features: &[f64]) -> Result<f64, DashboardError> {
        let expected = self.artifact.feature_names.len();
        if features.len() != expected {
            return Err(DashboardError::schema_mismatch(
                "*",
                format!(
                    "model expects {} features, transform produced {}",
                    expected,
                    features.len()
                ),
            ));
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()]).map_err(|e| {
            DashboardError::Prediction {
                reason: format!("Matrix creation failed: {}", e),
            }
        })?;

        let predictions = self
            .artifact
            .estimator
            .predict(&input_matrix)
            .map_err(|e| DashboardError::Prediction {
                reason: e.to_string(),
            })?;

        match predictions.first() {
            Some(price) if price.is_finite() => Ok(*price),
            Some(price) => Err(DashboardError::Prediction {
                reason: format!("model returned a non-finite estimate ({})", price),
            }),
            None => Err(DashboardError::Prediction {
                reason: "No prediction returned".to_string(),
            }),
        }
    }

    fn expected_features(&self) -> Option<&[String]> {
        Some(&self.artifact.feature_names)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
