//! Fitted column transformer: standardised numeric columns followed by
//! one-hot encoded categorical columns.

use crate::domain::errors::DashboardError;
use crate::domain::ports::FeatureTransform;
use crate::domain::prediction::{FeatureValue, INPUT_COLUMNS, InputColumn, PredictionRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericScaler {
    pub column: String,
    pub mean: f64,
    pub scale: f64,
}

impl NumericScaler {
    fn apply(&self, value: f64) -> f64 {
        // A constant column was fitted with zero variance
        let scale = if self.scale == 0.0 { 1.0 } else { self.scale };
        (value - self.mean) / scale
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoder {
    pub column: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPreprocessor {
    pub input_columns: Vec<String>,
    #[serde(default)]
    pub numeric: Vec<NumericScaler>,
    #[serde(default)]
    pub categorical: Vec<CategoricalEncoder>,
}

impl ColumnPreprocessor {
    /// Checks that the fitted schema covers the request columns exactly once,
    /// in the fitted order, with the right kind of encoder for each.
    pub fn check_schema(&self) -> Result<(), DashboardError> {
        if self.input_columns != INPUT_COLUMNS {
            let column = self
                .input_columns
                .iter()
                .zip(INPUT_COLUMNS.iter())
                .find(|(fitted, expected)| fitted != expected)
                .map(|(fitted, _)| fitted.clone())
                .unwrap_or_else(|| "*".to_string());
            return Err(DashboardError::schema_mismatch(
                column,
                format!(
                    "fitted input columns {:?} differ from request columns {:?}",
                    self.input_columns, INPUT_COLUMNS
                ),
            ));
        }

        for column in InputColumn::ALL {
            let name = column.as_str();
            let numeric = self.numeric.iter().filter(|s| s.column == name).count();
            let categorical = self.categorical.iter().filter(|e| e.column == name).count();

            match (numeric, categorical) {
                (1, 0) if !column.is_categorical() => {}
                (0, 1) if column.is_categorical() => {}
                (0, 0) => {
                    return Err(DashboardError::schema_mismatch(
                        name,
                        "column has no fitted encoder",
                    ));
                }
                (1, 0) | (0, 1) => {
                    return Err(DashboardError::schema_mismatch(
                        name,
                        "fitted encoder kind does not match the column type",
                    ));
                }
                _ => {
                    return Err(DashboardError::schema_mismatch(
                        name,
                        "column is encoded more than once",
                    ));
                }
            }
        }

        let known = |column: &str| InputColumn::from_name(column).is_some();
        if let Some(stray) = self
            .numeric
            .iter()
            .map(|s| s.column.as_str())
            .chain(self.categorical.iter().map(|e| e.column.as_str()))
            .find(|c| !known(*c))
        {
            return Err(DashboardError::schema_mismatch(
                stray,
                "encoder refers to a column the request does not carry",
            ));
        }

        Ok(())
    }

    fn output_width(&self) -> usize {
        self.numeric.len() + self.categorical.iter().map(|e| e.categories.len()).sum::<usize>()
    }
}

impl FeatureTransform for ColumnPreprocessor {
    fn transform(&self, request: &PredictionRequest) -> Result<Vec<f64>, DashboardError> {
        self.check_schema()?;

        let mut features = Vec::with_capacity(self.output_width());

        for scaler in &self.numeric {
            let column = InputColumn::from_name(&scaler.column)
                .ok_or_else(|| DashboardError::schema_mismatch(&scaler.column, "unknown column"))?;
            match request.value(column) {
                FeatureValue::Numeric(value) => features.push(scaler.apply(value)),
                FeatureValue::Categorical(_) => {
                    return Err(DashboardError::schema_mismatch(
                        &scaler.column,
                        "numeric scaler applied to a categorical value",
                    ));
                }
            }
        }

        for encoder in &self.categorical {
            let column = InputColumn::from_name(&encoder.column)
                .ok_or_else(|| DashboardError::schema_mismatch(&encoder.column, "unknown column"))?;
            let value = match request.value(column) {
                FeatureValue::Categorical(value) => value,
                FeatureValue::Numeric(_) => {
                    return Err(DashboardError::schema_mismatch(
                        &encoder.column,
                        "one-hot encoder applied to a numeric value",
                    ));
                }
            };

            let hot = encoder
                .categories
                .iter()
                .position(|c| c == value)
                .ok_or_else(|| {
                    DashboardError::schema_mismatch(
                        &encoder.column,
                        format!("category {value:?} was not seen when the preprocessor was fitted"),
                    )
                })?;
            features.extend((0..encoder.categories.len()).map(|i| if i == hot { 1.0 } else { 0.0 }));
        }

        Ok(features)
    }

    fn feature_names_out(&self) -> Vec<String> {
        let numeric = self.numeric.iter().map(|s| format!("num__{}", s.column));
        let categorical = self.categorical.iter().flat_map(|e| {
            e.categories
                .iter()
                .map(move |c| format!("cat__{}_{}", e.column, c))
        });
        numeric.chain(categorical).collect()
    }
}
