use crate::domain::errors::DashboardError;
use crate::domain::prediction::PredictionRequest;

/// A fitted preprocessing transform: request in, feature vector out.
pub trait FeatureTransform: Send + Sync {
    /// Encodes the request. Unknown categories and column disagreements are
    /// `SchemaMismatch`, never a fallback encoding.
    fn transform(&self, request: &PredictionRequest) -> Result<Vec<f64>, DashboardError>;

    /// Names of the produced features, in output order
    fn feature_names_out(&self) -> Vec<String>;
}

/// A fitted regression model producing a single price estimate.
pub trait PriceModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<f64, DashboardError>;

    /// Feature names the model was trained on, when the artifact records them
    fn expected_features(&self) -> Option<&[String]> {
        None
    }

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Where trained artifacts come from. Each call loads a fresh copy.
pub trait ArtifactSource: Send + Sync {
    fn load_preprocessor(&self) -> Result<Box<dyn FeatureTransform>, DashboardError>;
    fn load_model(&self) -> Result<Box<dyn PriceModel>, DashboardError>;
}
