//! Retirement savings projection against the capital a withdrawal rule requires

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcError, CalcResult};
use crate::projection::{
    checked_monthly_rate, future_value, last_period, round_money, PeriodUnit, Series,
};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

pub const SAVINGS_SERIES: &str = "projected_savings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementRequest {
    pub current_age: f64,
    pub retirement_age: f64,
    /// Desired monthly income in retirement
    pub desired_income: f64,
    pub current_savings: f64,
    #[serde(default)]
    pub monthly_savings: f64,
    /// Expected annual return, percent
    pub expected_return: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub future_value: f64,
    pub required_capital: f64,
    /// Shortfall, never negative
    pub gap: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &RetirementRequest, assumptions: &Assumptions) -> CalcResult<RetirementResult> {
    let current_age = ensure_finite("current_age", req.current_age)?;
    let retirement_age = ensure_finite("retirement_age", req.retirement_age)?;
    let desired_income = ensure_finite("desired_income", req.desired_income)?;
    let current_savings = ensure_finite("current_savings", req.current_savings)?;
    let monthly_savings = ensure_finite("monthly_savings", req.monthly_savings)?;
    let expected_return = ensure_finite("expected_return", req.expected_return)?;

    if retirement_age <= current_age {
        return Err(CalcError::RetirementHorizon { current_age, retirement_age });
    }

    let years_to_save = retirement_age - current_age;
    let last_year = last_period(years_to_save.ceil())?;
    let months = (years_to_save * 12.0).floor();
    let rate = checked_monthly_rate("expected_return", expected_return)?;

    let value_at = |month: f64| future_value(current_savings, monthly_savings, rate, month);

    let total_fv = ensure_finite_output("future_value", value_at(months))?;
    let required_capital = ensure_finite_output(
        "required_capital",
        desired_income * 12.0 / assumptions.planning.safe_withdrawal_rate,
    )?;
    let gap = ensure_finite_output("gap", (required_capital - total_fv).max(0.0))?;

    let savings = Series::build(SAVINGS_SERIES, PeriodUnit::Year, 0..=last_year, |year| {
        round_money(value_at((f64::from(year) * 12.0).min(months)))
    })
    .ensure_finite(SAVINGS_SERIES)?;

    Ok(RetirementResult {
        future_value: round_money(total_fv),
        required_capital: round_money(required_capital),
        gap: round_money(gap),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::bar(
            "Retirement provision",
            &[("Projected", total_fv), ("Required", required_capital)],
        )
        .and_series(savings),
    })
}

impl Summarize for RetirementResult {
    const FILE_STEM: &'static str = "retirement";

    fn report_title(&self) -> String {
        "Retirement report".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Projected savings: {}", format_money(s, self.future_value)),
            format!("Required capital: {}", format_money(s, self.required_capital)),
            format!("Shortfall: {}", format_money(s, self.gap)),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
