use crate::domain::errors::DashboardError;
use crate::domain::listing::LISTING_COLUMNS;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A dataset row exactly as it appears in the CSV, before price cleaning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Year of manufacture")]
    pub year_of_manufacture: i32,
    #[serde(rename = "Mileage")]
    pub mileage: f64,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Transmission")]
    pub transmission: String,
    #[serde(rename = "Engine Size")]
    pub engine_size: f64,
}

/// A raw row together with the CSV line it came from (header is line 1)
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub line: u64,
    pub listing: RawListing,
}

pub fn read_listings_file(path: &Path) -> Result<Vec<RawRecord>, DashboardError> {
    let file = File::open(path).map_err(|source| DashboardError::DatasetUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_raw_listings(BufReader::new(file))?;
    debug!("Read {} raw listings from {:?}", records.len(), path);
    Ok(records)
}

/// Parses listings from any CSV source. Extra columns are ignored; missing
/// required columns and undecodable cells fail with the offending line.
pub fn read_raw_listings<R: Read>(reader: R) -> Result<Vec<RawRecord>, DashboardError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| to_data_format(&e, 1, None, None))?
        .clone();

    for column in LISTING_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DashboardError::data_format(
                1,
                *column,
                "",
                "required column missing from header",
            ));
        }
    }

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) => return Err(to_data_format(&e, 0, None, Some(&headers))),
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let listing: RawListing = record
            .deserialize(Some(&headers))
            .map_err(|e| to_data_format(&e, line, Some(&record), Some(&headers)))?;
        records.push(RawRecord { line, listing });
    }

    Ok(records)
}

fn to_data_format(
    err: &csv::Error,
    line: u64,
    record: Option<&csv::StringRecord>,
    headers: Option<&csv::StringRecord>,
) -> DashboardError {
    let line = err.position().map(|p| p.line()).unwrap_or(line);

    match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => {
            let index = de.field().map(|f| f as usize);
            let column = index
                .and_then(|i| headers.and_then(|h| h.get(i)))
                .unwrap_or("*");
            let value = index
                .and_then(|i| record.and_then(|r| r.get(i)))
                .unwrap_or("");
            DashboardError::data_format(line, column, value, de.kind().to_string())
        }
        _ => DashboardError::data_format(line, "*", "", err.to_string()),
    }
}
