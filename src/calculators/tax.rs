//! Flat-rate income tax estimate

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcResult};
use crate::projection::{round_money, round_pct};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRequest {
    pub income: f64,
    pub country: String,
    /// Free-form filing status, shown in reports only
    #[serde(default)]
    pub status: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    pub country: String,
    pub gross_income: f64,
    pub tax_amount: f64,
    pub net_income: f64,
    /// Percent
    pub effective_rate: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &TaxRequest, assumptions: &Assumptions) -> CalcResult<TaxResult> {
    let income = ensure_finite("income", req.income)?;

    let rate = assumptions.tax_rates.rate_for(&req.country);
    let tax = ensure_finite_output("tax_amount", income * rate)?;
    let net = ensure_finite_output("net_income", income - tax)?;

    Ok(TaxResult {
        country: req.country.clone(),
        gross_income: round_money(income),
        tax_amount: round_money(tax),
        net_income: round_money(net),
        effective_rate: round_pct(rate * 100.0),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::pie(
            &format!("Tax breakdown ({})", req.country),
            &[("Net income", net), ("Taxes", tax)],
        ),
    })
}

impl Summarize for TaxResult {
    const FILE_STEM: &'static str = "tax";

    fn report_title(&self) -> String {
        format!("Tax report: {}", self.country)
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Gross income: {}", format_money(s, self.gross_income)),
            format!("Taxes: {}", format_money(s, self.tax_amount)),
            format!("Net income: {}", format_money(s, self.net_income)),
            format!("Effective rate: {}%", self.effective_rate),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}
