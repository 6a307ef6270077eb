pub mod cache;
pub mod cleaning;
pub mod loader;
pub mod table;

pub use cache::{CacheKey, DatasetCache};
pub use cleaning::{PriceParseError, clean_listing, sanitize_price};
pub use loader::ListingLoader;
pub use table::{BrandStat, DatasetVersion, HistogramBin, ListingTable};
