//! CSV-based assumption loader
//!
//! Loads table overrides from CSV files in data/assumptions/. Every file is
//! optional; a missing file leaves the built-in defaults in place.

use crate::error::AssumptionError;
use std::fs::File;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const CURRENCY_FILE: &str = "currency_symbols.csv";
pub const TAX_RATE_FILE: &str = "tax_rates.csv";
pub const PLANNING_FILE: &str = "planning_constants.csv";

fn open_reader(path: &Path) -> Result<Option<csv::Reader<File>>, AssumptionError> {
    if !path.exists() {
        log::debug!("{} not found, keeping defaults", path.display());
        return Ok(None);
    }

    let file = File::open(path).map_err(|source| AssumptionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(csv::Reader::from_reader(file)))
}

/// Load currency symbols from CSV
/// Returns Vec<(code, symbol)>
pub fn load_currency_symbols(path: &Path) -> Result<Vec<(String, String)>, AssumptionError> {
    let Some(mut reader) = open_reader(&path.join(CURRENCY_FILE))? else {
        return Ok(Vec::new());
    };

    let mut symbols = Vec::new();
    for result in reader.deserialize() {
        let (code, symbol): (String, String) = result?;
        symbols.push((code, symbol));
    }

    Ok(symbols)
}

/// Load flat tax rates from CSV
/// Returns Vec<(country, rate)> with rates as decimals
pub fn load_tax_rates(path: &Path) -> Result<Vec<(String, f64)>, AssumptionError> {
    let Some(mut reader) = open_reader(&path.join(TAX_RATE_FILE))? else {
        return Ok(Vec::new());
    };

    let mut rates = Vec::new();
    for result in reader.deserialize() {
        let (country, rate): (String, f64) = result?;
        if !(0.0..=1.0).contains(&rate) {
            return Err(AssumptionError::InvalidValue { name: country, value: rate });
        }
        rates.push((country, rate));
    }

    Ok(rates)
}

/// Load named planning constants from CSV
/// Returns Vec<(name, value)>
pub fn load_planning_constants(path: &Path) -> Result<Vec<(String, f64)>, AssumptionError> {
    let Some(mut reader) = open_reader(&path.join(PLANNING_FILE))? else {
        return Ok(Vec::new());
    };

    let mut constants = Vec::new();
    for result in reader.deserialize() {
        let (name, value): (String, f64) = result?;
        if !value.is_finite() || value <= 0.0 {
            return Err(AssumptionError::InvalidValue { name, value });
        }
        constants.push((name, value));
    }

    Ok(constants)
}

/// Raw rows read from an assumptions directory
#[derive(Debug, Default)]
pub struct LoadedAssumptions {
    pub currency_symbols: Vec<(String, String)>,
    pub tax_rates: Vec<(String, f64)>,
    pub planning_constants: Vec<(String, f64)>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self, AssumptionError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self, AssumptionError> {
        Ok(Self {
            currency_symbols: load_currency_symbols(path)?,
            tax_rates: load_tax_rates(path)?,
            planning_constants: load_planning_constants(path)?,
        })
    }
}
