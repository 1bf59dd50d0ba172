//! Real hourly income after taxes, work expenses and commuting time

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcError, CalcResult};
use crate::projection::{round_money, round_pct};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyIncomeRequest {
    pub monthly_income: f64,
    /// Income tax, percent
    pub taxes: f64,
    /// Paid working hours per month
    pub work_hours: f64,
    /// Unpaid commuting hours per month
    pub commute_time: f64,
    /// Monthly out-of-pocket work costs
    pub work_expenses: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyIncomeResult {
    pub real_hourly_income: f64,
    pub nominal_hourly_income: f64,
    pub net_income: f64,
    /// Real rate as a percentage of the nominal rate
    pub efficiency: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &HourlyIncomeRequest, assumptions: &Assumptions) -> CalcResult<HourlyIncomeResult> {
    let monthly_income = ensure_finite("monthly_income", req.monthly_income)?;
    let taxes = ensure_finite("taxes", req.taxes)?;
    let work_hours = ensure_finite("work_hours", req.work_hours)?;
    let commute_time = ensure_finite("commute_time", req.commute_time)?;
    let work_expenses = ensure_finite("work_expenses", req.work_expenses)?;

    if work_hours == 0.0 {
        return Err(CalcError::ZeroWorkHours);
    }
    let total_hours = work_hours + commute_time;
    if total_hours == 0.0 {
        return Err(CalcError::ZeroTotalHours);
    }
    if monthly_income == 0.0 {
        return Err(CalcError::ZeroIncome);
    }

    let net_monthly = ensure_finite_output(
        "net_income",
        monthly_income * (1.0 - taxes / 100.0) - work_expenses,
    )?;
    let real_hourly = ensure_finite_output("real_hourly_income", net_monthly / total_hours)?;
    let nominal_hourly = ensure_finite_output("nominal_hourly_income", monthly_income / work_hours)?;
    let efficiency = ensure_finite_output("efficiency", real_hourly / nominal_hourly * 100.0)?;

    Ok(HourlyIncomeResult {
        real_hourly_income: round_money(real_hourly),
        nominal_hourly_income: round_money(nominal_hourly),
        net_income: round_money(net_monthly),
        efficiency: round_pct(efficiency),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::bar(
            "Nominal vs real hourly rate",
            &[("Nominal", nominal_hourly), ("Real", real_hourly)],
        ),
    })
}

impl Summarize for HourlyIncomeResult {
    const FILE_STEM: &'static str = "hourly";

    fn report_title(&self) -> String {
        "Hourly income analysis".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Net income: {}", format_money(s, self.net_income)),
            format!("Real hourly rate: {}/h", format_money(s, self.real_hourly_income)),
            format!("Efficiency: {}%", self.efficiency),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
