//! Currency code to display symbol mapping

use std::collections::HashMap;

/// Symbol used when a currency code is not in the table
pub const DEFAULT_SYMBOL: &str = "€";

/// Currency symbol lookup keyed by ISO-style code
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    symbols: HashMap<String, String>,
    fallback: String,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        let symbols = [("EUR", "€"), ("USD", "$"), ("UAH", "₴"), ("BTC", "₿")]
            .into_iter()
            .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
            .collect();

        Self {
            symbols,
            fallback: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl CurrencyTable {
    /// Create from loaded CSV rows, layered on top of the built-in symbols
    pub fn from_loaded(rows: &[(String, String)]) -> Self {
        rows.iter().fold(Self::default(), |table, (code, symbol)| {
            table.with_symbol(code, symbol)
        })
    }

    /// Add or replace a symbol
    pub fn with_symbol(mut self, code: &str, symbol: &str) -> Self {
        self.symbols
            .insert(code.trim().to_ascii_uppercase(), symbol.to_string());
        self
    }

    /// Resolve a code to its symbol, falling back to the euro sign
    pub fn symbol(&self, code: &str) -> &str {
        match self.symbols.get(&code.trim().to_ascii_uppercase()) {
            Some(symbol) => symbol,
            None => {
                log::debug!("unknown currency code {:?}, using {}", code, self.fallback);
                &self.fallback
            }
        }
    }

    /// All (code, symbol) pairs sorted by code
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .symbols
            .iter()
            .map(|(code, symbol)| (code.as_str(), symbol.as_str()))
            .collect();
        entries.sort();
        entries
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
