use crate::domain::errors::DashboardError;
use crate::domain::listing::Listing;
use crate::infrastructure::dataset::RawRecord;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceParseError {
    #[error("no digits left after stripping currency formatting")]
    Empty,

    #[error("{0:?} is not a number after stripping currency formatting")]
    NotNumeric(String),
}

/// Strips everything but ASCII digits and decimal points, then parses.
///
/// `"₦1,234,500"` becomes `1234500.0`. The result is always finite and
/// non-negative; an unparseable remainder is an error, never zero or NaN.
pub fn sanitize_price(raw: &str) -> Result<f64, PriceParseError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return Err(PriceParseError::Empty);
    }

    match cleaned.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(PriceParseError::NotNumeric(cleaned)),
    }
}

/// Turns a raw CSV row into a `Listing` with its derived columns.
pub fn clean_listing(record: RawRecord, reference_year: i32) -> Result<Listing, DashboardError> {
    let RawRecord { line, listing: raw } = record;

    let price = sanitize_price(&raw.price)
        .map_err(|e| DashboardError::data_format(line, "Price", raw.price.as_str(), e.to_string()))?;

    if !raw.mileage.is_finite() || raw.mileage < 0.0 {
        return Err(DashboardError::data_format(
            line,
            "Mileage",
            raw.mileage.to_string(),
            "mileage must be a non-negative number",
        ));
    }

    if !raw.engine_size.is_finite() {
        return Err(DashboardError::data_format(
            line,
            "Engine Size",
            raw.engine_size.to_string(),
            "engine size must be a finite number",
        ));
    }

    if raw.year_of_manufacture > reference_year {
        warn!(
            "Line {}: year of manufacture {} is after reference year {}",
            line, raw.year_of_manufacture, reference_year
        );
    }

    Ok(Listing {
        car_age: Listing::car_age_for(raw.year_of_manufacture, reference_year),
        price_per_km: Listing::price_per_km_for(price, raw.mileage),
        make: raw.make,
        year_of_manufacture: raw.year_of_manufacture,
        mileage: raw.mileage,
        price,
        condition: raw.condition,
        fuel: raw.fuel,
        transmission: raw.transmission,
        engine_size: raw.engine_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dataset::RawListing;
    use proptest::prelude::*;

    fn raw(price: &str, mileage: f64) -> RawRecord {
        RawRecord {
            line: 4,
            listing: RawListing {
                make: "Toyota".to_string(),
                year_of_manufacture: 2018,
                mileage,
                price: price.to_string(),
                condition: "Foreign Used".to_string(),
                fuel: "Petrol".to_string(),
                transmission: "Automatic".to_string(),
                engine_size: 1800.0,
            },
        }
    }

    #[test]
    fn test_sanitize_currency_strings() {
        assert_eq!(sanitize_price("₦1,234,500"), Ok(1_234_500.0));
        assert_eq!(sanitize_price("$12,000.50"), Ok(12_000.50));
        assert_eq!(sanitize_price(" 7500000 "), Ok(7_500_000.0));
    }

    #[test]
    fn test_sanitize_rejects_non_numeric() {
        assert_eq!(sanitize_price("N/A"), Err(PriceParseError::Empty));
        assert_eq!(sanitize_price(""), Err(PriceParseError::Empty));
        assert_eq!(
            sanitize_price("1.2.3"),
            Err(PriceParseError::NotNumeric("1.2.3".to_string()))
        );
        assert!(sanitize_price(".").is_err());
    }

    #[test]
    fn test_clean_listing_derives_columns() {
        let listing = clean_listing(raw("₦5,000,000", 50_000.0), 2024).unwrap();

        assert_eq!(listing.price, 5_000_000.0);
        assert_eq!(listing.car_age, 6);
        assert_eq!(listing.price_per_km, Some(100.0));
    }

    #[test]
    fn test_zero_mileage_has_undefined_price_per_km() {
        let listing = clean_listing(raw("₦5,000,000", 0.0), 2024).unwrap();

        assert_eq!(listing.price_per_km, None);
    }

    #[test]
    fn test_unparseable_price_names_the_row() {
        let err = clean_listing(raw("N/A", 10.0), 2024).unwrap_err();

        match err {
            DashboardError::DataFormat {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 4);
                assert_eq!(column, "Price");
                assert_eq!(value, "N/A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_mileage_rejected() {
        let err = clean_listing(raw("1000", -5.0), 2024).unwrap_err();
        assert!(matches!(err, DashboardError::DataFormat { ref column, .. } if column == "Mileage"));
    }

    proptest! {
        #[test]
        fn sanitize_ignores_currency_punctuation(
            amount in 0u64..10_000_000_000u64,
            symbol in prop::sample::select(vec!["₦", "$", "€", "NGN ", ""]),
        ) {
            let grouped = amount
                .to_string()
                .as_bytes()
                .rchunks(3)
                .rev()
                .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(",");
            let formatted = format!("{symbol}{grouped}");

            prop_assert_eq!(sanitize_price(&formatted), Ok(amount as f64));
        }

        #[test]
        fn sanitize_never_yields_negative_or_nan(raw in ".*") {
            if let Ok(price) = sanitize_price(&raw) {
                prop_assert!(price.is_finite());
                prop_assert!(price >= 0.0);
            }
        }
    }
}
