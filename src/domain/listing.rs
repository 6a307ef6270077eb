use serde::Serialize;

/// Header names the dataset must carry. Renaming any of them breaks loading.
pub const LISTING_COLUMNS: &[&str] = &[
    "Make",
    "Year of manufacture",
    "Mileage",
    "Price",
    "Condition",
    "Fuel",
    "Transmission",
    "Engine Size",
];

/// One cleaned row of the car-sales dataset, with its derived columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub make: String,
    pub year_of_manufacture: i32,
    pub mileage: f64,
    /// Sanitised price, always finite and non-negative
    pub price: f64,
    pub condition: String,
    pub fuel: String,
    pub transmission: String,
    pub engine_size: f64,
    /// `reference_year - year_of_manufacture`
    pub car_age: i32,
    /// `None` when mileage is zero
    pub price_per_km: Option<f64>,
}

impl Listing {
    /// Computes `Car Age`. Newer cars never get an older age for the same reference year.
    pub fn car_age_for(year_of_manufacture: i32, reference_year: i32) -> i32 {
        reference_year - year_of_manufacture
    }

    /// Computes `Price per KM`, undefined for a zero odometer.
    pub fn price_per_km_for(price: f64, mileage: f64) -> Option<f64> {
        if mileage == 0.0 {
            None
        } else {
            Some(price / mileage)
        }
    }
}
