//! Fixed planning assumptions shared by the calculators

use serde::{Deserialize, Serialize};

/// Simplified modelling constants.
///
/// The withdrawal rule and the alternative return are rough rules of thumb
/// kept as named values so callers can override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConstants {
    /// Sustainable annual drawdown from a retirement portfolio (4% rule)
    pub safe_withdrawal_rate: f64,

    /// Annual return earned on an unspent down payment when renting
    pub alternative_return: f64,

    /// Annual upkeep cost as a share of the property price
    pub maintenance_rate: f64,

    /// Working hours in a day, week and month for time value scaling
    pub hours_per_day: f64,
    pub hours_per_week: f64,
    pub hours_per_month: f64,
}

impl Default for PlanningConstants {
    fn default() -> Self {
        Self {
            safe_withdrawal_rate: 0.04,
            alternative_return: 0.07,
            maintenance_rate: 0.01,
            hours_per_day: 8.0,
            hours_per_week: 40.0,
            hours_per_month: 160.0,
        }
    }
}

impl PlanningConstants {
    /// Set a constant by its snake_case name. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name.trim() {
            "safe_withdrawal_rate" => &mut self.safe_withdrawal_rate,
            "alternative_return" => &mut self.alternative_return,
            "maintenance_rate" => &mut self.maintenance_rate,
            "hours_per_day" => &mut self.hours_per_day,
            "hours_per_week" => &mut self.hours_per_week,
            "hours_per_month" => &mut self.hours_per_month,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// (name, value) pairs in declaration order
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("safe_withdrawal_rate", self.safe_withdrawal_rate),
            ("alternative_return", self.alternative_return),
            ("maintenance_rate", self.maintenance_rate),
            ("hours_per_day", self.hours_per_day),
            ("hours_per_week", self.hours_per_week),
            ("hours_per_month", self.hours_per_month),
        ]
    }
}
