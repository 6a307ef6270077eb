use crate::domain::listing::Listing;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// Where and when a table was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetVersion {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Per-make aggregate used by the bar charts
#[derive(Debug, Clone, PartialEq)]
pub struct BrandStat {
    pub make: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// The cleaned dataset plus derived columns. Read-only after construction.
#[derive(Debug, Clone)]
pub struct ListingTable {
    rows: Vec<Listing>,
    version: DatasetVersion,
    reference_year: i32,
    loaded_at: DateTime<Utc>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Distinct values in first-appearance order
fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>, version: DatasetVersion, reference_year: i32) -> Self {
        Self {
            rows,
            version,
            reference_year,
            loaded_at: Utc::now(),
        }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn head(&self, n: usize) -> &[Listing] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn version(&self) -> &DatasetVersion {
        &self.version
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn mean_price(&self) -> Option<f64> {
        mean(self.rows.iter().map(|l| l.price))
    }

    pub fn mean_car_age(&self) -> Option<f64> {
        mean(self.rows.iter().map(|l| l.car_age as f64))
    }

    /// Most frequent make; ties go to the alphabetically first make.
    pub fn most_common_make(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for listing in &self.rows {
            *counts.entry(listing.make.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .max_by(|(make_a, count_a), (make_b, count_b)| {
                count_a.cmp(count_b).then_with(|| make_b.cmp(make_a))
            })
            .map(|(make, _)| make)
    }

    /// Equal-width price histogram between the minimum and maximum price.
    /// The last bin is closed so the maximum is counted.
    pub fn price_histogram(&self, bins: usize) -> Vec<HistogramBin> {
        let (Some(min), Some(max)) = (
            self.rows.iter().map(|l| l.price).reduce(f64::min),
            self.rows.iter().map(|l| l.price).reduce(f64::max),
        ) else {
            return Vec::new();
        };
        if bins == 0 {
            return Vec::new();
        }

        if max == min {
            return vec![HistogramBin {
                start: min,
                end: max,
                count: self.rows.len(),
            }];
        }

        let width = (max - min) / bins as f64;
        let mut histogram: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                start: min + width * i as f64,
                end: if i + 1 == bins {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for listing in &self.rows {
            let index = (((listing.price - min) / width) as usize).min(bins - 1);
            histogram[index].count += 1;
        }

        histogram
    }

    fn mean_by_make<F>(&self, value: F) -> Vec<BrandStat>
    where
        F: Fn(&Listing) -> Option<f64>,
    {
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for listing in &self.rows {
            if let Some(v) = value(listing) {
                let entry = sums.entry(listing.make.as_str()).or_insert((0.0, 0));
                entry.0 += v;
                entry.1 += 1;
            }
        }
        sums.into_iter()
            .map(|(make, (sum, count))| BrandStat {
                make: make.to_string(),
                value: sum / count as f64,
            })
            .collect()
    }

    /// Mean price per make, most expensive first
    pub fn mean_price_by_make(&self) -> Vec<BrandStat> {
        let mut stats = self.mean_by_make(|l| Some(l.price));
        stats.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.make.cmp(&b.make))
        });
        stats
    }

    /// The `n` makes with the lowest mean price per km. Zero-mileage rows
    /// carry no price per km and are skipped, not counted as zero.
    pub fn best_value_retention(&self, n: usize) -> Vec<BrandStat> {
        let mut stats = self.mean_by_make(|l| l.price_per_km);
        stats.sort_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.make.cmp(&b.make))
        });
        stats.truncate(n);
        stats
    }

    /// `[mileage, price]` pairs for the scatter plot
    pub fn price_mileage_points(&self) -> Vec<[f64; 2]> {
        self.rows.iter().map(|l| [l.mileage, l.price]).collect()
    }

    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|l| l.year_of_manufacture).min()?;
        let max = self.rows.iter().map(|l| l.year_of_manufacture).max()?;
        Some((min, max))
    }

    pub fn max_mileage(&self) -> Option<f64> {
        self.rows.iter().map(|l| l.mileage).reduce(f64::max)
    }

    pub fn unique_makes(&self) -> Vec<&str> {
        unique(self.rows.iter().map(|l| l.make.as_str()))
    }

    pub fn unique_conditions(&self) -> Vec<&str> {
        unique(self.rows.iter().map(|l| l.condition.as_str()))
    }

    pub fn unique_fuels(&self) -> Vec<&str> {
        unique(self.rows.iter().map(|l| l.fuel.as_str()))
    }

    pub fn unique_transmissions(&self) -> Vec<&str> {
        unique(self.rows.iter().map(|l| l.transmission.as_str()))
    }
}
