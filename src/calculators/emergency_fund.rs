//! Emergency fund target and time to reach it

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcResult};
use crate::projection::{round_money, round_pct};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundRequest {
    pub monthly_expenses: f64,
    /// Months of expenses the fund should cover
    pub months_coverage: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// How long until the target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "months", rename_all = "snake_case")]
pub enum TargetHorizon {
    Months(f64),
    /// Nothing is being contributed
    Unreachable,
}

impl TargetHorizon {
    /// Legacy numeric form: `-1` for an unreachable target
    pub fn reported(&self) -> f64 {
        match self {
            TargetHorizon::Months(months) => *months,
            TargetHorizon::Unreachable => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub target_amount: f64,
    pub remaining_amount: f64,
    pub months_to_target: TargetHorizon,
    pub is_funded: bool,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &EmergencyFundRequest, assumptions: &Assumptions) -> CalcResult<EmergencyFundResult> {
    let expenses = ensure_finite("monthly_expenses", req.monthly_expenses)?;
    let coverage = ensure_finite("months_coverage", req.months_coverage)?;
    let savings = ensure_finite("current_savings", req.current_savings)?;
    let contribution = ensure_finite("monthly_contribution", req.monthly_contribution)?;

    let target = ensure_finite_output("target_amount", expenses * coverage)?;
    let remaining = ensure_finite_output("remaining_amount", (target - savings).max(0.0))?;

    let horizon = if contribution > 0.0 {
        let months = ensure_finite_output("months_to_target", remaining / contribution)?;
        TargetHorizon::Months(round_pct(months))
    } else {
        TargetHorizon::Unreachable
    };

    Ok(EmergencyFundResult {
        target_amount: round_money(target),
        remaining_amount: round_money(remaining),
        months_to_target: horizon,
        is_funded: remaining == 0.0,
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::pie("Emergency fund progress", &[("Saved", savings), ("Remaining", remaining)]),
    })
}

impl Summarize for EmergencyFundResult {
    const FILE_STEM: &'static str = "emergency";

    fn report_title(&self) -> String {
        "Emergency fund report".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        let horizon = match self.months_to_target {
            TargetHorizon::Months(months) => format!("{} months", months),
            TargetHorizon::Unreachable => "unreachable without contributions".to_string(),
        };
        vec![
            format!("Target amount: {}", format_money(s, self.target_amount)),
            format!("Still to save: {}", format_money(s, self.remaining_amount)),
            format!("Time to target: {}", horizon),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
