pub mod dashboard_view_model;
pub mod prediction_form;

pub use dashboard_view_model::{DashboardViewModel, LISTING_HEADERS, OverviewMetrics, Page};
pub use prediction_form::{PredictionForm, PredictionFormOptions, PredictionOutcome};
