//! Fixed-rate loan amortization

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcResult};
use crate::projection::{
    amortized_payment, balance_after, checked_monthly_rate, last_period, round_money, PeriodUnit,
    Series,
};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

pub const BALANCE_SERIES: &str = "remaining_balance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    pub amount: f64,
    /// Annual interest rate, percent
    pub rate: f64,
    /// Loan term, years
    pub term: f64,
    /// Expected inflation, percent (comparison only)
    #[serde(default)]
    pub inflation: f64,
    /// Return available on an alternative investment, percent (comparison only)
    #[serde(default)]
    pub alternative_return: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub overpayment: f64,
    pub currency_symbol: String,
    pub chart: Chart,
    /// Loan rate vs inflation vs alternative return, percent
    pub rate_comparison: Chart,
}

pub fn calculate(req: &CreditRequest, assumptions: &Assumptions) -> CalcResult<CreditResult> {
    let amount = ensure_finite("amount", req.amount)?;
    let annual_rate = ensure_finite("rate", req.rate)?;
    let term = ensure_finite("term", req.term)?;
    let inflation = ensure_finite("inflation", req.inflation)?;
    let alternative_return = ensure_finite("alternative_return", req.alternative_return)?;

    let rate = checked_monthly_rate("rate", annual_rate)?;
    let last_year = last_period(term.ceil())?;
    let months = term * 12.0;
    let payment = amortized_payment(amount, rate, months)?;
    let payment = ensure_finite_output("monthly_payment", payment)?;
    let total = ensure_finite_output("total_payment", payment * months)?;
    let overpayment = ensure_finite_output("overpayment", total - amount)?;

    let balance = Series::build(BALANCE_SERIES, PeriodUnit::Year, 0..=last_year, |year| {
        let elapsed = (f64::from(year) * 12.0).min(months);
        round_money(balance_after(amount, rate, payment, elapsed).max(0.0))
    })
    .ensure_finite(BALANCE_SERIES)?;

    Ok(CreditResult {
        monthly_payment: round_money(payment),
        total_payment: round_money(total),
        overpayment: round_money(overpayment),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::pie("Loan structure", &[("Principal", amount), ("Interest", overpayment)])
            .and_series(balance),
        rate_comparison: Chart::bar(
            "Rate comparison (%)",
            &[
                ("Loan rate", annual_rate),
                ("Inflation", inflation),
                ("Alternative", alternative_return),
            ],
        ),
    })
}

impl CreditResult {
    pub fn principal(&self) -> f64 {
        round_money(self.total_payment - self.overpayment)
    }
}

impl Summarize for CreditResult {
    const FILE_STEM: &'static str = "credit";

    fn report_title(&self) -> String {
        "Credit report".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Loan: {}", format_money(s, self.principal())),
            format!("Monthly payment: {}", format_money(s, self.monthly_payment)),
            format!("Total overpayment: {}", format_money(s, self.overpayment)),
            format!("Total paid: {}", format_money(s, self.total_payment)),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
