use anyhow::Result;

#[derive(Debug, Clone)]
pub struct DisplayEnvConfig {
    pub currency_symbol: String,
    pub histogram_bins: usize,
    pub top_brands: usize,
}

impl Default for DisplayEnvConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₦".to_string(),
            histogram_bins: 50,
            top_brands: 5,
        }
    }
}

impl DisplayEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency_symbol = lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        let histogram_bins = parse_count(&lookup, "HISTOGRAM_BINS", defaults.histogram_bins)?;
        let top_brands = parse_count(&lookup, "TOP_BRANDS", defaults.top_brands)?;

        Ok(Self {
            currency_symbol,
            histogram_bins,
            top_brands,
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => anyhow::bail!("Invalid {}: must be at least 1", key),
        Ok(n) => Ok(n),
        Err(_) => anyhow::bail!("Invalid {}: {}. Must be a positive integer", key, raw),
    }
}
