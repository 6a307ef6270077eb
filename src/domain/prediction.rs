use serde::{Deserialize, Serialize};

/// The seven request columns, in the order the preprocessor was fitted on.
/// Any change here is a breaking change for trained artifacts.
pub const INPUT_COLUMNS: &[&str] = &[
    "Make",
    "Year of manufacture",
    "Condition",
    "Mileage",
    "Engine Size",
    "Fuel",
    "Transmission",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputColumn {
    Make,
    YearOfManufacture,
    Condition,
    Mileage,
    EngineSize,
    Fuel,
    Transmission,
}

impl InputColumn {
    pub const ALL: [InputColumn; 7] = [
        InputColumn::Make,
        InputColumn::YearOfManufacture,
        InputColumn::Condition,
        InputColumn::Mileage,
        InputColumn::EngineSize,
        InputColumn::Fuel,
        InputColumn::Transmission,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputColumn::Make => "Make",
            InputColumn::YearOfManufacture => "Year of manufacture",
            InputColumn::Condition => "Condition",
            InputColumn::Mileage => "Mileage",
            InputColumn::EngineSize => "Engine Size",
            InputColumn::Fuel => "Fuel",
            InputColumn::Transmission => "Transmission",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn is_categorical(&self) -> bool {
        matches!(
            self,
            InputColumn::Make | InputColumn::Condition | InputColumn::Fuel | InputColumn::Transmission
        )
    }
}

/// A single request cell, as seen by a feature transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

/// User-supplied car attributes for one price estimate.
///
/// Built on form submission and consumed immediately; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub make: String,
    pub year_of_manufacture: i32,
    pub condition: String,
    pub mileage: f64,
    pub engine_size: f64,
    pub fuel: String,
    pub transmission: String,
}

impl PredictionRequest {
    pub fn value(&self, column: InputColumn) -> FeatureValue<'_> {
        match column {
            InputColumn::Make => FeatureValue::Categorical(&self.make),
            InputColumn::YearOfManufacture => FeatureValue::Numeric(self.year_of_manufacture as f64),
            InputColumn::Condition => FeatureValue::Categorical(&self.condition),
            InputColumn::Mileage => FeatureValue::Numeric(self.mileage),
            InputColumn::EngineSize => FeatureValue::Numeric(self.engine_size),
            InputColumn::Fuel => FeatureValue::Categorical(&self.fuel),
            InputColumn::Transmission => FeatureValue::Categorical(&self.transmission),
        }
    }
}
