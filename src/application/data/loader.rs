use super::cache::{CacheKey, DatasetCache};
use super::cleaning::clean_listing;
use super::table::{DatasetVersion, ListingTable};
use crate::config::DatasetEnvConfig;
use crate::domain::errors::DashboardError;
use crate::domain::listing::Listing;
use crate::infrastructure::dataset::{RawRecord, read_listings_file};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Loads the listings CSV, cleans it, and derives `Car Age` and
/// `Price per KM`. Results are shared through the injected cache.
pub struct ListingLoader {
    dataset_path: PathBuf,
    reference_year: i32,
    cache: Arc<DatasetCache>,
}

impl ListingLoader {
    pub fn new(dataset_path: PathBuf, reference_year: i32, cache: Arc<DatasetCache>) -> Self {
        Self {
            dataset_path,
            reference_year,
            cache,
        }
    }

    pub fn from_config(config: &DatasetEnvConfig, cache: Arc<DatasetCache>) -> Self {
        Self::new(config.path.clone(), config.reference_year, cache)
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Returns the table for the current version of the file, parsing it
    /// only when the (path, mtime, reference year) combination is new.
    pub fn load_data(&self) -> Result<Arc<ListingTable>, DashboardError> {
        let modified = self.modified_time()?;
        let key = CacheKey {
            path: self.dataset_path.clone(),
            modified,
            reference_year: self.reference_year,
        };

        if let Some(table) = self.cache.get(&key) {
            debug!("Dataset cache hit for {:?}", self.dataset_path);
            return Ok(table);
        }

        let table = Arc::new(self.parse(modified)?);
        self.cache.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Parses the file regardless of what is cached
    pub fn load_uncached(&self) -> Result<ListingTable, DashboardError> {
        let modified = self.modified_time()?;
        self.parse(modified)
    }

    fn modified_time(&self) -> Result<SystemTime, DashboardError> {
        fs::metadata(&self.dataset_path)
            .and_then(|m| m.modified())
            .map_err(|source| DashboardError::DatasetUnavailable {
                path: self.dataset_path.clone(),
                source,
            })
    }

    fn parse(&self, modified: SystemTime) -> Result<ListingTable, DashboardError> {
        let records = read_listings_file(&self.dataset_path)?;
        let rows = clean_records(records, self.reference_year)?;

        let undefined_price_per_km = rows.iter().filter(|l| l.price_per_km.is_none()).count();
        info!(
            "Loaded {} listings from {:?} ({} with zero mileage)",
            rows.len(),
            self.dataset_path,
            undefined_price_per_km
        );

        Ok(ListingTable::new(
            rows,
            DatasetVersion {
                path: self.dataset_path.clone(),
                modified,
            },
            self.reference_year,
        ))
    }
}

/// Cleans every record, failing on the first malformed row.
pub fn clean_records(
    records: Vec<RawRecord>,
    reference_year: i32,
) -> Result<Vec<Listing>, DashboardError> {
    records
        .into_iter()
        .map(|record| clean_listing(record, reference_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const CSV: &str = "Make,Year of manufacture,Condition,Mileage,Engine Size,Fuel,Transmission,Price\n\
        Toyota,2018,Foreign Used,45000,1800,Petrol,Automatic,\"₦5,000,000\"\n\
        Lexus,2020,Brand New,0,3500,Petrol,Automatic,\"₦21,500,000.50\"\n\
        Honda,2012,Nigerian Used,120000,2400,Petrol,Manual,\"₦2,100,000\"\n";

    fn write_dataset(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("Alpha_Motors.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_cleans_and_derives() {
        let dir = TempDir::new().unwrap();
        let loader = ListingLoader::new(write_dataset(&dir, CSV), 2024, Arc::default());

        let table = loader.load_data().unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].price, 5_000_000.0);
        assert_eq!(table.rows()[1].price, 21_500_000.50);
        assert_eq!(table.rows()[1].price_per_km, None);
        assert_eq!(table.rows()[2].car_age, 12);
    }

    #[test]
    fn test_second_load_hits_cache() {
        let dir = TempDir::new().unwrap();
        let cache = Arc::new(DatasetCache::new());
        let loader = ListingLoader::new(write_dataset(&dir, CSV), 2024, Arc::clone(&cache));

        let first = loader.load_data().unwrap();
        let second = loader.load_data().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reparse_is_identical() {
        let dir = TempDir::new().unwrap();
        let loader = ListingLoader::new(write_dataset(&dir, CSV), 2024, Arc::default());

        let cached = loader.load_data().unwrap();
        let fresh = loader.load_uncached().unwrap();

        assert_eq!(cached.rows(), fresh.rows());
        assert_eq!(cached.version(), fresh.version());
    }

    #[test]
    fn test_na_price_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        let csv = format!("{CSV}Kia,2015,Nigerian Used,90000,1600,Petrol,Manual,N/A\n");
        let cache = Arc::new(DatasetCache::new());
        let loader = ListingLoader::new(write_dataset(&dir, &csv), 2024, Arc::clone(&cache));

        let err = loader.load_data().unwrap_err();

        match err {
            DashboardError::DataFormat { line, column, .. } => {
                assert_eq!(line, 5);
                assert_eq!(column, "Price");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_dataset() {
        let dir = TempDir::new().unwrap();
        let loader = ListingLoader::new(dir.path().join("nope.csv"), 2024, Arc::default());

        assert!(matches!(
            loader.load_data(),
            Err(DashboardError::DatasetUnavailable { .. })
        ));
    }
}
