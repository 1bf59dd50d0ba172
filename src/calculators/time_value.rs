//! Monetary value of one hour, day, week and month of working time

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcError, CalcResult};
use crate::projection::round_money;
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValueRequest {
    pub annual_income: f64,
    pub annual_hours: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValueResult {
    /// Value of one hour
    pub time_value: f64,
    pub day_value: f64,
    pub week_value: f64,
    pub month_value: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &TimeValueRequest, assumptions: &Assumptions) -> CalcResult<TimeValueResult> {
    let annual_income = ensure_finite("annual_income", req.annual_income)?;
    let annual_hours = ensure_finite("annual_hours", req.annual_hours)?;
    if annual_hours == 0.0 {
        return Err(CalcError::ZeroAnnualHours);
    }

    let planning = &assumptions.planning;
    let hourly = ensure_finite_output("time_value", annual_income / annual_hours)?;
    let daily = ensure_finite_output("day_value", hourly * planning.hours_per_day)?;
    let weekly = ensure_finite_output("week_value", hourly * planning.hours_per_week)?;
    let monthly = ensure_finite_output("month_value", hourly * planning.hours_per_month)?;

    Ok(TimeValueResult {
        time_value: round_money(hourly),
        day_value: round_money(daily),
        week_value: round_money(weekly),
        month_value: round_money(monthly),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::bar(
            "Monetary value of your time",
            &[("Hour", hourly), ("Day", daily), ("Week", weekly), ("Month", monthly)],
        ),
    })
}

impl Summarize for TimeValueResult {
    const FILE_STEM: &'static str = "time";

    fn report_title(&self) -> String {
        "Time value analysis".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Value of an hour: {}", format_money(s, self.time_value)),
            format!("Value of a day: {}", format_money(s, self.day_value)),
            format!("Value of a week: {}", format_money(s, self.week_value)),
            format!("Value of a month: {}", format_money(s, self.month_value)),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
