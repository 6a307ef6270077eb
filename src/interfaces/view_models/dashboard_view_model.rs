use crate::application::data::{BrandStat, ListingTable};
use crate::domain::listing::Listing;
use crate::interfaces::formatting::{format_currency, group_thousands};

/// The four navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    PricingAnalysis,
    DepreciationTrends,
    PredictPrice,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Overview,
        Page::PricingAnalysis,
        Page::DepreciationTrends,
        Page::PredictPrice,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::PricingAnalysis => "Pricing Analysis",
            Page::DepreciationTrends => "Depreciation Trends",
            Page::PredictPrice => "Predict Price",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Page::Overview => "📌 Overview of Car Listings",
            Page::PricingAnalysis => "📊 Pricing Analysis",
            Page::DepreciationTrends => "📉 Depreciation & Mileage Impact",
            Page::PredictPrice => "🔮 Predict Car Price",
        }
    }
}

pub const LISTING_HEADERS: [&str; 10] = [
    "Make",
    "Year of manufacture",
    "Condition",
    "Mileage",
    "Engine Size",
    "Fuel",
    "Transmission",
    "Price",
    "Car Age",
    "Price per KM",
];

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewMetrics {
    pub total_cars: String,
    pub avg_price: String,
    pub most_common_make: String,
    pub avg_car_age: String,
}

pub struct DashboardViewModel;

impl DashboardViewModel {
    pub fn overview(table: &ListingTable, currency_symbol: &str) -> OverviewMetrics {
        OverviewMetrics {
            total_cars: group_thousands(table.len() as u64),
            avg_price: table
                .mean_price()
                .map(|p| format_currency(p, currency_symbol))
                .unwrap_or_else(|| "n/a".to_string()),
            most_common_make: table.most_common_make().unwrap_or("n/a").to_string(),
            avg_car_age: table
                .mean_car_age()
                .map(|age| format!("{:.1} years", age))
                .unwrap_or_else(|| "n/a".to_string()),
        }
    }

    /// One display row per listing, in `LISTING_HEADERS` order
    pub fn listing_cells(listing: &Listing, currency_symbol: &str) -> [String; 10] {
        [
            listing.make.clone(),
            listing.year_of_manufacture.to_string(),
            listing.condition.clone(),
            group_thousands(listing.mileage.max(0.0).round() as u64),
            format!("{:.0}", listing.engine_size),
            listing.fuel.clone(),
            listing.transmission.clone(),
            format_currency(listing.price, currency_symbol),
            listing.car_age.to_string(),
            listing
                .price_per_km
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "n/a".to_string()),
        ]
    }

    /// Bar labels and heights for a per-make chart
    pub fn brand_bars(stats: &[BrandStat]) -> (Vec<String>, Vec<f64>) {
        stats.iter().map(|s| (s.make.clone(), s.value)).unzip()
    }
}
