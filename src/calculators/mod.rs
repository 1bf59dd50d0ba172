//! The nine stateless calculators
//!
//! Every calculator exposes `calculate(&Request, &Assumptions)` which
//! validates its inputs, evaluates the formulas and returns a rounded result
//! with chart data. Nothing is shared between calculators except the
//! read-only `Assumptions`.

pub mod hourly;
pub mod time_value;
pub mod investment;
pub mod credit;
pub mod buy_rent;
pub mod retirement;
pub mod debt_payoff;
pub mod emergency_fund;
pub mod tax;

pub use hourly::{HourlyIncomeRequest, HourlyIncomeResult};
pub use time_value::{TimeValueRequest, TimeValueResult};
pub use investment::{InvestmentRequest, InvestmentResult};
pub use credit::{CreditRequest, CreditResult};
pub use buy_rent::{BuyRentRequest, BuyRentResult, Recommendation};
pub use retirement::{RetirementRequest, RetirementResult};
pub use debt_payoff::{DebtPayoffRequest, DebtPayoffResult};
pub use emergency_fund::{EmergencyFundRequest, EmergencyFundResult, TargetHorizon};
pub use tax::{TaxRequest, TaxResult};

pub(crate) fn default_currency() -> String {
    "EUR".to_string()
}
