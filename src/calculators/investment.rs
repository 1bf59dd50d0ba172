//! Compound growth of a lump sum plus monthly contributions

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcError, CalcResult};
use crate::projection::{
    checked_monthly_rate, future_value, last_period, round_money, round_pct, PeriodUnit, Series,
};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

pub const GROWTH_SERIES: &str = "portfolio_value";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Expected annual return, percent
    pub annual_return: f64,
    /// Investment period, years
    pub period: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub future_value: f64,
    pub total_contributions: f64,
    pub total_gain: f64,
    /// Gain over contributions, percent
    pub roi: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &InvestmentRequest, assumptions: &Assumptions) -> CalcResult<InvestmentResult> {
    let initial = ensure_finite("initial_amount", req.initial_amount)?;
    let contribution = ensure_finite("monthly_contribution", req.monthly_contribution)?;
    let annual_return = ensure_finite("annual_return", req.annual_return)?;
    let period = ensure_finite("period", req.period)?;
    if period < 0.0 {
        return Err(CalcError::NegativePeriod { years: period });
    }

    let last_year = last_period(period.floor())?;
    let rate = checked_monthly_rate("annual_return", annual_return)?;
    let months = (period * 12.0).floor();
    let total_contributed =
        ensure_finite_output("total_contributions", initial + contribution * months)?;
    if total_contributed == 0.0 {
        return Err(CalcError::ZeroContributions);
    }

    let value_at = |month: f64| future_value(initial, contribution, rate, month);

    let fv = ensure_finite_output("future_value", value_at(months))?;
    let gain = ensure_finite_output("total_gain", fv - total_contributed)?;
    let roi = ensure_finite_output("roi", gain / total_contributed * 100.0)?;

    let growth = Series::build(GROWTH_SERIES, PeriodUnit::Year, 0..=last_year, |year| {
        round_money(value_at(f64::from(year) * 12.0))
    })
    .ensure_finite(GROWTH_SERIES)?;

    Ok(InvestmentResult {
        future_value: round_money(fv),
        total_contributions: round_money(total_contributed),
        total_gain: round_money(gain),
        roi: round_pct(roi),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::line("Capital growth forecast", vec![growth])
            .and_bars(&[("Contributions", total_contributed), ("Gain", gain)]),
    })
}

impl Summarize for InvestmentResult {
    const FILE_STEM: &'static str = "investment";

    fn report_title(&self) -> String {
        "Investment report".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Final amount: {}", format_money(s, self.future_value)),
            format!("Total invested: {}", format_money(s, self.total_contributions)),
            format!("Net gain: {}", format_money(s, self.total_gain)),
            format!("Total ROI: {}%", self.roi),
        ]
    }

    fn chart(&self) -> &Chart {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::assert_bits_eq;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn request(annual_return: f64) -> InvestmentRequest {
        InvestmentRequest {
            initial_amount: 10_000.0,
            monthly_contribution: 500.0,
            annual_return,
            period: 10.0,
            currency: "EUR".to_string(),
        }
    }

    #[test]
    fn test_investment_growth() {
        let result = calculate(&request(7.0), &Assumptions::default()).unwrap();

        // 10k * 1.005833^120 + 500 * annuity(120) ≈ 106639.02
        assert_abs_diff_eq!(result.future_value, 106_639.02, epsilon = 0.01);
        assert_eq!(result.total_contributions, 70_000.0);
        assert_abs_diff_eq!(result.total_gain, result.future_value - 70_000.0, epsilon = 0.01);
        assert!(result.roi > 50.0);
    }

    #[test]
    fn test_series_matches_headline() {
        let result = calculate(&request(7.0), &Assumptions::default()).unwrap();
        let growth = result.chart.series_named(GROWTH_SERIES).unwrap();

        assert_eq!(growth.len(), 11);
        assert_eq!(growth.points[0].value, 10_000.0);
        assert_eq!(growth.last_value(), Some(result.future_value));
    }

    #[test]
    fn test_fractional_period_floors_months() {
        let req = InvestmentRequest { period: 1.5, annual_return: 0.0, ..request(0.0) };
        let result = calculate(&req, &Assumptions::default()).unwrap();
        assert_eq!(result.future_value, 10_000.0 + 500.0 * 18.0);
        assert_eq!(result.chart.series[0].len(), 2);
    }

    #[test]
    fn test_zero_contributions_rejected() {
        let req = InvestmentRequest {
            initial_amount: 0.0,
            monthly_contribution: 0.0,
            ..request(5.0)
        };
        assert_eq!(calculate(&req, &Assumptions::default()), Err(CalcError::ZeroContributions));
    }

    #[test]
    fn test_negative_period_rejected() {
        let req = InvestmentRequest { period: -1.0, ..request(5.0) };
        assert!(matches!(
            calculate(&req, &Assumptions::default()),
            Err(CalcError::NegativePeriod { .. })
        ));
    }

    #[test]
    fn test_overflowing_growth_rejected() {
        let req = InvestmentRequest {
            initial_amount: 1000.0,
            monthly_contribution: 100.0,
            annual_return: 100.0,
            period: 1000.0,
            currency: "EUR".to_string(),
        };
        assert_eq!(
            calculate(&req, &Assumptions::default()),
            Err(CalcError::NonFiniteResult { field: "future_value" })
        );
    }

    #[test]
    fn test_total_loss_rate_rejected() {
        let req = InvestmentRequest { annual_return: -1200.0, ..request(0.0) };
        assert!(matches!(
            calculate(&req, &Assumptions::default()),
            Err(CalcError::RateOutOfRange { field: "annual_return", .. })
        ));
    }

    #[test]
    fn test_unbounded_period_rejected() {
        let req = InvestmentRequest { period: 1e10, ..request(5.0) };
        assert!(matches!(
            calculate(&req, &Assumptions::default()),
            Err(CalcError::HorizonTooLong { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let assumptions = Assumptions::default();
        let a = calculate(&request(6.5), &assumptions).unwrap();
        let b = calculate(&request(6.5), &assumptions).unwrap();
        assert_bits_eq(a.future_value, b.future_value);
        assert_bits_eq(a.roi, b.roi);
    }

    proptest! {
        #[test]
        fn prop_zero_return_is_linear(
            initial in 1u32..1_000_000,
            contribution in 1u32..10_000,
            years in 0u32..50,
        ) {
            let req = InvestmentRequest {
                initial_amount: f64::from(initial),
                monthly_contribution: f64::from(contribution),
                annual_return: 0.0,
                period: f64::from(years),
                currency: "EUR".to_string(),
            };
            let result = calculate(&req, &Assumptions::default()).unwrap();
            let months = f64::from(years * 12);
            prop_assert_eq!(
                result.future_value,
                f64::from(initial) + f64::from(contribution) * months
            );
            prop_assert_eq!(result.total_gain, 0.0);
        }
    }
}
