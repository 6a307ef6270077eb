use crate::application::data::ListingTable;
use crate::domain::errors::DashboardError;
use crate::domain::prediction::PredictionRequest;
use crate::interfaces::formatting::format_currency;
use std::ops::RangeInclusive;

pub const DEFAULT_YEAR: i32 = 2015;
pub const DEFAULT_MILEAGE: f64 = 20_000.0;
pub const DEFAULT_ENGINE_SIZE: f64 = 2_000.0;
pub const ENGINE_SIZE_RANGE: RangeInclusive<f64> = 500.0..=6_000.0;

/// Choices and bounds offered by the prediction form, taken from the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionFormOptions {
    pub makes: Vec<String>,
    pub conditions: Vec<String>,
    pub fuels: Vec<String>,
    pub transmissions: Vec<String>,
    pub min_year: i32,
    pub max_year: i32,
    pub max_mileage: f64,
}

impl PredictionFormOptions {
    pub fn from_table(table: &ListingTable) -> Self {
        let owned = |values: Vec<&str>| -> Vec<String> {
            values.into_iter().map(str::to_string).collect()
        };
        let max_year = table.reference_year();
        let min_year = table
            .year_range()
            .map(|(min, _)| min.min(max_year))
            .unwrap_or(max_year);

        Self {
            makes: owned(table.unique_makes()),
            conditions: owned(table.unique_conditions()),
            fuels: owned(table.unique_fuels()),
            transmissions: owned(table.unique_transmissions()),
            min_year,
            max_year,
            max_mileage: table.max_mileage().unwrap_or(0.0),
        }
    }

    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    pub fn mileage_range(&self) -> RangeInclusive<f64> {
        0.0..=self.max_mileage
    }

    fn has_vocabulary(&self) -> bool {
        !self.makes.is_empty()
            && !self.conditions.is_empty()
            && !self.fuels.is_empty()
            && !self.transmissions.is_empty()
    }
}

/// Current state of the Predict Price form
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub make: String,
    pub year: i32,
    pub condition: String,
    pub mileage: f64,
    pub engine_size: f64,
    pub fuel: String,
    pub transmission: String,
}

fn first_or_empty(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}

impl PredictionForm {
    pub fn with_defaults(options: &PredictionFormOptions) -> Self {
        let mut form = Self {
            make: first_or_empty(&options.makes),
            year: DEFAULT_YEAR,
            condition: first_or_empty(&options.conditions),
            mileage: DEFAULT_MILEAGE,
            engine_size: DEFAULT_ENGINE_SIZE,
            fuel: first_or_empty(&options.fuels),
            transmission: first_or_empty(&options.transmissions),
        };
        form.clamp_to(options);
        form
    }

    /// Keeps every numeric input inside the bounds the widgets allow
    pub fn clamp_to(&mut self, options: &PredictionFormOptions) {
        self.year = self.year.clamp(options.min_year, options.max_year);
        self.mileage = self.mileage.clamp(0.0, options.max_mileage.max(0.0));
        self.engine_size = self
            .engine_size
            .clamp(*ENGINE_SIZE_RANGE.start(), *ENGINE_SIZE_RANGE.end());
    }

    /// The form can only be submitted when every categorical field has a choice
    pub fn is_submittable(&self, options: &PredictionFormOptions) -> bool {
        options.has_vocabulary()
            && !self.make.is_empty()
            && !self.condition.is_empty()
            && !self.fuel.is_empty()
            && !self.transmission.is_empty()
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            make: self.make.clone(),
            year_of_manufacture: self.year,
            condition: self.condition.clone(),
            mileage: self.mileage,
            engine_size: self.engine_size,
            fuel: self.fuel.clone(),
            transmission: self.transmission.clone(),
        }
    }
}

/// What the Predict Price view shows after the button is pressed
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Estimate(String),
    Failure { headline: String, detail: String },
}

impl PredictionOutcome {
    pub fn from_result(result: Result<f64, DashboardError>, currency_symbol: &str) -> Self {
        match result {
            Ok(price) => {
                PredictionOutcome::Estimate(format!(
                    "Estimated Price: {}",
                    format_currency(price, currency_symbol)
                ))
            }
            Err(e) => PredictionOutcome::Failure {
                headline: e.kind_label().to_string(),
                detail: e.to_string(),
            },
        }
    }
}
