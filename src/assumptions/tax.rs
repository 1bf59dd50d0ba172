//! Flat illustrative income tax rates by country
//!
//! These are simplifications for a rough estimate, not tax law.

use std::collections::HashMap;

/// Rate applied to countries missing from the table
pub const DEFAULT_TAX_RATE: f64 = 0.20;

/// Country to flat tax rate lookup (rates as decimals)
#[derive(Debug, Clone)]
pub struct TaxRateTable {
    rates: HashMap<String, f64>,
    fallback: f64,
}

impl Default for TaxRateTable {
    fn default() -> Self {
        let rates = [
            ("ukraine", 0.195), // 18% personal income tax + 1.5% military levy
            ("poland", 0.12),
            ("germany", 0.30),
            ("netherlands", 0.37),
        ]
        .into_iter()
        .map(|(country, rate)| (country.to_string(), rate))
        .collect();

        Self {
            rates,
            fallback: DEFAULT_TAX_RATE,
        }
    }
}

impl TaxRateTable {
    /// Create from loaded CSV rows, layered on top of the built-in rates
    pub fn from_loaded(rows: &[(String, f64)]) -> Self {
        rows.iter()
            .fold(Self::default(), |table, (country, rate)| table.with_rate(country, *rate))
    }

    /// Add or replace a country rate
    pub fn with_rate(mut self, country: &str, rate: f64) -> Self {
        self.rates.insert(normalize(country), rate);
        self
    }

    /// Replace the fallback rate
    pub fn with_fallback(mut self, rate: f64) -> Self {
        self.fallback = rate;
        self
    }

    /// Case-insensitive lookup, falling back to the default rate
    pub fn rate_for(&self, country: &str) -> f64 {
        match self.rates.get(&normalize(country)) {
            Some(rate) => *rate,
            None => {
                log::debug!("no tax rate for {:?}, using {}", country, self.fallback);
                self.fallback
            }
        }
    }

    /// All (country, rate) pairs sorted by country
    pub fn entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self
            .rates
            .iter()
            .map(|(country, rate)| (country.as_str(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }
}

fn normalize(country: &str) -> String {
    country.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rates() {
        let table = TaxRateTable::default();
        assert_eq!(table.rate_for("ukraine"), 0.195);
        assert_eq!(table.rate_for("poland"), 0.12);
        assert_eq!(table.rate_for("germany"), 0.30);
        assert_eq!(table.rate_for("netherlands"), 0.37);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = TaxRateTable::default();
        assert_eq!(table.rate_for("Germany"), 0.30);
        assert_eq!(table.rate_for("  POLAND "), 0.12);
    }

    #[test]
    fn test_unknown_country_uses_default() {
        let table = TaxRateTable::default();
        assert_eq!(table.rate_for("atlantis"), DEFAULT_TAX_RATE);

        let table = table.with_fallback(0.25);
        assert_eq!(table.rate_for("atlantis"), 0.25);
    }
}
