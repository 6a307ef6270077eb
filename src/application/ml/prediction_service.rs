use crate::domain::errors::DashboardError;
use crate::domain::ports::ArtifactSource;
use crate::domain::prediction::PredictionRequest;
use std::sync::Arc;
use tracing::{info, warn};

/// Feeds a request through the trained preprocessor and regression model.
///
/// Artifacts are loaded fresh on every call and nothing is retained between
/// calls, so identical requests against unchanged artifacts give identical
/// estimates.
pub struct PredictionService {
    artifacts: Arc<dyn ArtifactSource>,
}

impl PredictionService {
    pub fn new(artifacts: Arc<dyn ArtifactSource>) -> Self {
        Self { artifacts }
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<f64, DashboardError> {
        let preprocessor = self.artifacts.load_preprocessor()?;
        let features = preprocessor.transform(request).inspect_err(|e| {
            warn!("Request rejected by preprocessor: {}", e);
        })?;

        let model = self.artifacts.load_model()?;
        if let Some(expected) = model.expected_features() {
            let produced = preprocessor.feature_names_out();
            check_feature_alignment(expected, &produced)?;
        }

        let estimate = model.predict(&features)?;
        info!(
            "{} estimated {:.0} for {} {} ({} km)",
            model.name(),
            estimate,
            request.year_of_manufacture,
            request.make,
            request.mileage
        );
        Ok(estimate)
    }
}

/// The model must see exactly the features the preprocessor emits, in order.
fn check_feature_alignment(expected: &[String], produced: &[String]) -> Result<(), DashboardError> {
    if let Some((position, (want, got))) = expected
        .iter()
        .zip(produced.iter())
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        return Err(DashboardError::schema_mismatch(
            got.as_str(),
            format!("feature {} is {:?} but the model was trained on {:?}", position, got, want),
        ));
    }

    if expected.len() != produced.len() {
        let column = if produced.len() > expected.len() {
            produced[expected.len()].clone()
        } else {
            expected[produced.len()].clone()
        };
        return Err(DashboardError::schema_mismatch(
            column,
            format!(
                "preprocessor emits {} features but the model was trained on {}",
                produced.len(),
                expected.len()
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ArtifactKind;
    use crate::domain::ports::{FeatureTransform, PriceModel};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct IdentityTransform;

    impl FeatureTransform for IdentityTransform {
        fn transform(&self, request: &PredictionRequest) -> Result<Vec<f64>, DashboardError> {
            Ok(vec![request.mileage, request.engine_size])
        }

        fn feature_names_out(&self) -> Vec<String> {
            vec!["num__Mileage".to_string(), "num__Engine Size".to_string()]
        }
    }

    struct ConstantModel {
        value: f64,
        features: Option<Vec<String>>,
    }

    impl PriceModel for ConstantModel {
        fn predict(&self, _features: &[f64]) -> Result<f64, DashboardError> {
            Ok(self.value)
        }

        fn expected_features(&self) -> Option<&[String]> {
            self.features.as_deref()
        }

        fn name(&self) -> &str {
            "constant"
        }
    }

    struct StubArtifacts {
        value: f64,
        features: Option<Vec<String>>,
        missing_model: bool,
        loads: AtomicUsize,
    }

    impl StubArtifacts {
        fn constant(value: f64) -> Self {
            Self {
                value,
                features: None,
                missing_model: false,
                loads: AtomicUsize::new(0),
            }
        }
    }

    impl ArtifactSource for StubArtifacts {
        fn load_preprocessor(&self) -> Result<Box<dyn FeatureTransform>, DashboardError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(IdentityTransform))
        }

        fn load_model(&self) -> Result<Box<dyn PriceModel>, DashboardError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.missing_model {
                return Err(DashboardError::ArtifactLoad {
                    kind: ArtifactKind::Model,
                    path: PathBuf::from("car_price_model.json"),
                    reason: "not found".to_string(),
                });
            }
            Ok(Box::new(ConstantModel {
                value: self.value,
                features: self.features.clone(),
            }))
        }
    }

    fn toyota() -> PredictionRequest {
        PredictionRequest {
            make: "Toyota".to_string(),
            year_of_manufacture: 2018,
            condition: "Used".to_string(),
            mileage: 45_000.0,
            engine_size: 1_800.0,
            fuel: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
        }
    }

    #[test]
    fn test_constant_model_passes_through() {
        let service = PredictionService::new(Arc::new(StubArtifacts::constant(5_000_000.0)));

        assert_eq!(service.predict(&toyota()).unwrap(), 5_000_000.0);
    }

    #[test]
    fn test_artifacts_reloaded_per_call() {
        let artifacts = Arc::new(StubArtifacts::constant(1.0));
        let service = PredictionService::new(artifacts.clone());

        service.predict(&toyota()).unwrap();
        service.predict(&toyota()).unwrap();

        assert_eq!(artifacts.loads.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_missing_model_surfaces_artifact_error() {
        let mut artifacts = StubArtifacts::constant(1.0);
        artifacts.missing_model = true;
        let service = PredictionService::new(Arc::new(artifacts));

        assert!(matches!(
            service.predict(&toyota()),
            Err(DashboardError::ArtifactLoad { .. })
        ));
    }

    #[test]
    fn test_reordered_model_features_are_schema_mismatch() {
        let mut artifacts = StubArtifacts::constant(1.0);
        artifacts.features = Some(vec![
            "num__Engine Size".to_string(),
            "num__Mileage".to_string(),
        ]);
        let service = PredictionService::new(Arc::new(artifacts));

        match service.predict(&toyota()) {
            Err(DashboardError::SchemaMismatch { column, .. }) => assert_eq!(column, "num__Mileage"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_extra_model_feature_is_schema_mismatch() {
        let mut artifacts = StubArtifacts::constant(1.0);
        artifacts.features = Some(vec![
            "num__Mileage".to_string(),
            "num__Engine Size".to_string(),
            "cat__Make_Lada".to_string(),
        ]);
        let service = PredictionService::new(Arc::new(artifacts));

        match service.predict(&toyota()) {
            Err(DashboardError::SchemaMismatch { column, .. }) => {
                assert_eq!(column, "cat__Make_Lada")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
