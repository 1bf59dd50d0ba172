//! Personal Finance Engine - stateless calculators for everyday money decisions
//!
//! This library provides:
//! - Hourly income and time value analysis
//! - Compound growth, loan amortization and debt payoff projections
//! - Buy-vs-rent and retirement shortfall comparisons
//! - Emergency fund and flat-rate tax estimates
//! - Renderer-neutral chart series and report summaries

pub mod assumptions;
pub mod calculators;
pub mod chart;
pub mod engine;
pub mod error;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use assumptions::{Assumptions, CurrencyTable, PlanningConstants, TaxRateTable};
pub use chart::{Chart, ChartKind};
pub use engine::{CalculationRequest, CalculationResult, FinanceEngine};
pub use error::{AssumptionError, CalcError, CalcResult, ReportError};
pub use projection::{Series, SeriesPoint};
pub use report::{Report, ReportFormat, Summarize};
