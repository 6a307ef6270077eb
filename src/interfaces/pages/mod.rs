pub mod depreciation;
pub mod overview;
pub mod predict;
pub mod pricing;
