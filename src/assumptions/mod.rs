//! Static lookup tables and planning constants injected into the calculators

mod currency;
mod planning;
mod tax;
pub mod loader;

pub use currency::{CurrencyTable, DEFAULT_SYMBOL};
pub use loader::LoadedAssumptions;
pub use planning::PlanningConstants;
pub use tax::{TaxRateTable, DEFAULT_TAX_RATE};

use crate::error::AssumptionError;
use std::path::Path;

/// Container for all read-only calculator assumptions
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub currencies: CurrencyTable,
    pub tax_rates: TaxRateTable,
    pub planning: PlanningConstants,
}

impl Assumptions {
    /// Built-in tables
    pub fn default_tables() -> Self {
        Self::default()
    }

    /// Load overrides from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load overrides from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionError> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    /// Layer loaded rows on top of the built-in tables
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self, AssumptionError> {
        let mut planning = PlanningConstants::default();
        for (name, value) in &loaded.planning_constants {
            if !planning.set(name, *value) {
                return Err(AssumptionError::UnknownConstant(name.clone()));
            }
        }

        Ok(Self {
            currencies: CurrencyTable::from_loaded(&loaded.currency_symbols),
            tax_rates: TaxRateTable::from_loaded(&loaded.tax_rates),
            planning,
        })
    }

    /// Resolve a currency code to its display symbol
    pub fn currency_symbol(&self, code: &str) -> String {
        self.currencies.symbol(code).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_matches_builtin_tables() {
        let from_disk = Assumptions::from_csv().expect("shipped CSVs should load");
        let builtin = Assumptions::default_tables();

        assert_eq!(from_disk.planning, builtin.planning);
        assert_eq!(from_disk.currencies.entries(), builtin.currencies.entries());
        assert_eq!(from_disk.tax_rates.entries(), builtin.tax_rates.entries());
    }

    #[test]
    fn test_unknown_constant_rejected() {
        let loaded = LoadedAssumptions {
            planning_constants: vec![("discount_rate".to_string(), 0.05)],
            ..Default::default()
        };
        let err = Assumptions::from_loaded(&loaded).unwrap_err();
        assert!(matches!(err, AssumptionError::UnknownConstant(name) if name == "discount_rate"));
    }

    #[test]
    fn test_loaded_overrides_apply() {
        let loaded = LoadedAssumptions {
            currency_symbols: vec![("GBP".to_string(), "£".to_string())],
            tax_rates: vec![("France".to_string(), 0.3)],
            planning_constants: vec![("alternative_return".to_string(), 0.05)],
        };
        let assumptions = Assumptions::from_loaded(&loaded).unwrap();

        assert_eq!(assumptions.currency_symbol("GBP"), "£");
        assert_eq!(assumptions.currency_symbol("EUR"), "€");
        assert_eq!(assumptions.tax_rates.rate_for("france"), 0.3);
        assert_eq!(assumptions.planning.alternative_return, 0.05);
    }
}
