use alpha_motors::application::ml::PredictionService;
use alpha_motors::domain::errors::{ArtifactKind, DashboardError};
use alpha_motors::domain::ports::FeatureTransform;
use alpha_motors::domain::prediction::{INPUT_COLUMNS, PredictionRequest};
use alpha_motors::infrastructure::FileArtifactSource;
use alpha_motors::infrastructure::artifacts::{
    CategoricalEncoder, ColumnPreprocessor, NumericScaler, PriceModelArtifact,
};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn preprocessor() -> ColumnPreprocessor {
    ColumnPreprocessor {
        input_columns: strings(INPUT_COLUMNS),
        numeric: vec![
            NumericScaler {
                column: "Year of manufacture".to_string(),
                mean: 2015.0,
                scale: 4.0,
            },
            NumericScaler {
                column: "Mileage".to_string(),
                mean: 80_000.0,
                scale: 40_000.0,
            },
            NumericScaler {
                column: "Engine Size".to_string(),
                mean: 2_400.0,
                scale: 800.0,
            },
        ],
        categorical: vec![
            CategoricalEncoder {
                column: "Make".to_string(),
                categories: strings(&["Honda", "Lexus", "Toyota"]),
            },
            CategoricalEncoder {
                column: "Condition".to_string(),
                categories: strings(&["Brand New", "Foreign Used", "Nigerian Used"]),
            },
            CategoricalEncoder {
                column: "Fuel".to_string(),
                categories: strings(&["Diesel", "Petrol"]),
            },
            CategoricalEncoder {
                column: "Transmission".to_string(),
                categories: strings(&["Automatic", "Manual"]),
            },
        ],
    }
}

fn request(make: &str, year: i32, condition: &str, mileage: f64) -> PredictionRequest {
    PredictionRequest {
        make: make.to_string(),
        year_of_manufacture: year,
        condition: condition.to_string(),
        mileage,
        engine_size: 1_800.0,
        fuel: "Petrol".to_string(),
        transmission: "Automatic".to_string(),
    }
}

fn training_requests() -> Vec<PredictionRequest> {
    vec![
        request("Toyota", 2018, "Foreign Used", 50_000.0),
        request("Toyota", 2016, "Nigerian Used", 100_000.0),
        request("Honda", 2014, "Nigerian Used", 80_000.0),
        request("Lexus", 2020, "Brand New", 0.0),
        request("Honda", 2010, "Foreign Used", 150_000.0),
        request("Lexus", 2017, "Foreign Used", 60_000.0),
    ]
}

/// Fits a small forest on preprocessed requests and writes both artifacts.
fn write_artifacts(dir: &TempDir, prices: &[f64]) -> FileArtifactSource {
    let preprocessor = preprocessor();
    let rows: Vec<Vec<f64>> = training_requests()
        .iter()
        .map(|r| preprocessor.transform(r).unwrap())
        .collect();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(10)
        .with_max_depth(4)
        .with_min_samples_split(2);
    let estimator =
        RandomForestRegressor::fit(&DenseMatrix::from_2d_vec(&rows).unwrap(), &prices.to_vec(), params)
            .unwrap();

    let artifact = PriceModelArtifact {
        feature_names: preprocessor.feature_names_out(),
        estimator,
    };

    let preprocessor_path = dir.path().join("preprocessor.json");
    let model_path = dir.path().join("car_price_model.json");
    fs::write(&preprocessor_path, serde_json::to_vec(&preprocessor).unwrap()).unwrap();
    fs::write(&model_path, serde_json::to_vec(&artifact).unwrap()).unwrap();

    FileArtifactSource::new(preprocessor_path, model_path)
}

#[test]
fn test_constant_model_estimates_toyota_at_five_million() {
    let dir = TempDir::new().unwrap();
    let service = PredictionService::new(Arc::new(write_artifacts(&dir, &[5_000_000.0; 6])));

    let price = service
        .predict(&request("Toyota", 2018, "Foreign Used", 45_000.0))
        .unwrap();

    assert_eq!(price, 5_000_000.0);
}

#[test]
fn test_prediction_is_deterministic_across_reloads() {
    let dir = TempDir::new().unwrap();
    let prices = [5_000_000.0, 3_000_000.0, 2_400_000.0, 12_000_000.0, 1_500_000.0, 8_000_000.0];
    let service = PredictionService::new(Arc::new(write_artifacts(&dir, &prices)));
    let req = request("Honda", 2014, "Nigerian Used", 80_000.0);

    let first = service.predict(&req).unwrap();
    let second = service.predict(&req).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
    assert!((1_500_000.0..=12_000_000.0).contains(&first));
}

#[test]
fn test_unseen_make_is_schema_mismatch() {
    let dir = TempDir::new().unwrap();
    let service = PredictionService::new(Arc::new(write_artifacts(&dir, &[5_000_000.0; 6])));

    let err = service
        .predict(&request("Peugeot", 2012, "Nigerian Used", 90_000.0))
        .unwrap_err();

    match err {
        DashboardError::SchemaMismatch { column, .. } => assert_eq!(column, "Make"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_model_is_artifact_load_error() {
    let dir = TempDir::new().unwrap();
    let source = write_artifacts(&dir, &[5_000_000.0; 6]);
    fs::remove_file(source.model_path()).unwrap();
    let service = PredictionService::new(Arc::new(source));

    let err = service
        .predict(&request("Toyota", 2018, "Foreign Used", 45_000.0))
        .unwrap_err();

    assert!(matches!(
        err,
        DashboardError::ArtifactLoad {
            kind: ArtifactKind::Model,
            ..
        }
    ));
}

#[test]
fn test_corrupt_preprocessor_is_artifact_load_error() {
    let dir = TempDir::new().unwrap();
    let source = write_artifacts(&dir, &[5_000_000.0; 6]);
    fs::write(source.preprocessor_path(), b"{ not json").unwrap();
    let service = PredictionService::new(Arc::new(source));

    let err = service
        .predict(&request("Toyota", 2018, "Foreign Used", 45_000.0))
        .unwrap_err();

    assert!(matches!(
        err,
        DashboardError::ArtifactLoad {
            kind: ArtifactKind::Preprocessor,
            ..
        }
    ));
}

#[test]
fn test_model_from_another_fit_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = write_artifacts(&dir, &[5_000_000.0; 6]);

    let mut narrower = preprocessor();
    narrower.categorical[0].categories = strings(&["Honda", "Toyota"]);
    fs::write(source.preprocessor_path(), serde_json::to_vec(&narrower).unwrap()).unwrap();
    let service = PredictionService::new(Arc::new(source));

    let err = service
        .predict(&request("Toyota", 2018, "Foreign Used", 45_000.0))
        .unwrap_err();

    assert!(matches!(err, DashboardError::SchemaMismatch { .. }));
}
