//! Payoff horizon for a revolving or amortizing debt under a fixed payment
//!
//! The horizon comes from the closed-form inverse of the balance formula, so
//! the payment is checked against the first month's interest before any
//! logarithm is taken.

use super::default_currency;
use crate::assumptions::Assumptions;
use crate::chart::Chart;
use crate::error::{ensure_finite, ensure_finite_output, CalcResult};
use crate::projection::{
    balance_after, checked_monthly_rate, last_period, payoff_periods, round_money, PeriodUnit, Series,
};
use crate::report::{format_money, Summarize};
use serde::{Deserialize, Serialize};

pub const BALANCE_SERIES: &str = "remaining_balance";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffRequest {
    pub balance: f64,
    /// Annual interest rate, percent
    pub interest_rate: f64,
    pub monthly_payment: f64,
    #[serde(default)]
    pub extra_payment: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffResult {
    /// Whole months until the debt is cleared (rounded up)
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub currency_symbol: String,
    pub chart: Chart,
}

pub fn calculate(req: &DebtPayoffRequest, assumptions: &Assumptions) -> CalcResult<DebtPayoffResult> {
    let balance = ensure_finite("balance", req.balance)?;
    let interest_rate = ensure_finite("interest_rate", req.interest_rate)?;
    let monthly_payment = ensure_finite("monthly_payment", req.monthly_payment)?;
    let extra_payment = ensure_finite("extra_payment", req.extra_payment)?;

    let rate = checked_monthly_rate("interest_rate", interest_rate)?;
    let payment = monthly_payment + extra_payment;
    let months = payoff_periods(balance, rate, payment)?;
    let whole_months = last_period(months.ceil())?;
    let last_month = last_period(months.floor() + 1.0)?;

    let total_paid = ensure_finite_output("total_paid", payment * months)?;
    let total_interest = ensure_finite_output("total_interest", total_paid - balance)?;

    let remaining = Series::build(BALANCE_SERIES, PeriodUnit::Month, 0..=last_month, |month| {
        let elapsed = f64::from(month);
        if elapsed >= months {
            0.0
        } else {
            round_money(balance_after(balance, rate, payment, elapsed).max(0.0))
        }
    })
    .ensure_finite(BALANCE_SERIES)?;

    log::debug!("debt of {:.2} cleared in {:.2} months at {:.2}/month", balance, months, payment);

    Ok(DebtPayoffResult {
        months: whole_months,
        total_paid: round_money(total_paid),
        total_interest: round_money(total_interest),
        currency_symbol: assumptions.currency_symbol(&req.currency),
        chart: Chart::line("Debt repayment", vec![remaining])
            .and_bars(&[("Debt", balance), ("Interest", total_interest)]),
    })
}

impl Summarize for DebtPayoffResult {
    const FILE_STEM: &'static str = "debt";

    fn report_title(&self) -> String {
        "Debt payoff report".to_string()
    }

    fn summary_lines(&self) -> Vec<String> {
        let s = &self.currency_symbol;
        vec![
            format!("Payoff term: {} months", self.months),
            format!("Total paid: {}", format_money(s, self.total_paid)),
            format!("Of which interest: {}", format_money(s, self.total_interest)),
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
    use crate::error::CalcError;
    use crate::projection::{monthly_rate, MAX_SERIES_PERIODS};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn request(balance: f64, interest_rate: f64, monthly_payment: f64) -> DebtPayoffRequest {
        DebtPayoffRequest {
            balance,
            interest_rate,
            monthly_payment,
            extra_payment: 0.0,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_payoff_horizon() {
        let result = calculate(&request(10_000.0, 12.0, 300.0), &Assumptions::default()).unwrap();

        assert_eq!(result.months, 41);
        assert!(300.0 * f64::from(result.months) >= 10_000.0);
        assert_abs_diff_eq!(result.total_paid, 12_224.67, epsilon = 0.001);
        assert_abs_diff_eq!(result.total_interest, 2_224.67, epsilon = 0.001);
        assert_eq!(result.currency_symbol, "$");
    }

    #[test]
    fn test_balance_series_reaches_zero_by_reported_month() {
        let result = calculate(&request(10_000.0, 12.0, 300.0), &Assumptions::default()).unwrap();
        let remaining = result.chart.series_named(BALANCE_SERIES).unwrap();

        assert_eq!(remaining.points[0].value, 10_000.0);
        assert_eq!(remaining.len(), 42);
        let cleared = remaining.points.iter().find(|p| p.value <= 0.0).unwrap();
        assert!(cleared.period <= result.months);
        assert!(remaining.points.iter().all(|p| p.value >= 0.0));
    }

    #[test]
    fn test_payment_below_interest_rejected() {
        // 10k at 24% accrues 200 a month
        let err = calculate(&request(10_000.0, 24.0, 100.0), &Assumptions::default()).unwrap_err();
        assert!(matches!(err, CalcError::PaymentTooSmall { .. }));
    }

    #[test]
    fn test_extra_payment_shortens_term() {
        let req = DebtPayoffRequest { extra_payment: 100.0, ..request(10_000.0, 12.0, 300.0) };
        let result = calculate(&req, &Assumptions::default()).unwrap();

        assert_eq!(result.months, 29);
        assert_abs_diff_eq!(result.total_interest, 1_564.72, epsilon = 0.001);
    }

    #[test]
    fn test_extra_payment_can_rescue_small_payment() {
        let req = DebtPayoffRequest { extra_payment: 150.0, ..request(10_000.0, 24.0, 100.0) };
        assert!(calculate(&req, &Assumptions::default()).is_ok());
    }

    #[test]
    fn test_zero_rate_divides_balance() {
        let result = calculate(&request(1200.0, 0.0, 100.0), &Assumptions::default()).unwrap();
        assert_eq!(result.months, 12);
        assert_eq!(result.total_paid, 1200.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            calculate(&request(f64::NAN, 12.0, 300.0), &Assumptions::default()),
            Err(CalcError::NonFinite { field: "balance" })
        );
    }

    #[test]
    fn test_unbounded_horizon_rejected() {
        // 1e10 months at one unit a month
        assert_eq!(
            calculate(&request(1e10, 0.0, 1.0), &Assumptions::default()),
            Err(CalcError::HorizonTooLong { periods: 1e10, max: MAX_SERIES_PERIODS })
        );
    }

    #[test]
    fn test_total_loss_rate_rejected() {
        assert!(matches!(
            calculate(&request(1_000.0, -2_400.0, 100.0), &Assumptions::default()),
            Err(CalcError::RateOutOfRange { field: "interest_rate", .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let assumptions = Assumptions::default();
        let a = calculate(&request(8_500.0, 19.9, 250.0), &assumptions).unwrap();
        let b = calculate(&request(8_500.0, 19.9, 250.0), &assumptions).unwrap();
        assert_eq!(a.months, b.months);
        assert_bits_eq(a.total_paid, b.total_paid);
        assert_bits_eq(a.total_interest, b.total_interest);
    }

    proptest! {
        #[test]
        fn prop_series_clears_by_reported_month(
            balance in 100u32..100_000,
            rate_bp in 0u32..3_000,
            headroom in 10u32..2_000,
        ) {
            let balance = f64::from(balance);
            let annual_rate = f64::from(rate_bp) / 100.0;
            let payment = balance * monthly_rate(annual_rate) + f64::from(headroom);

            let result = calculate(&request(balance, annual_rate, payment), &Assumptions::default()).unwrap();
            let remaining = result.chart.series_named(BALANCE_SERIES).unwrap();

            prop_assert!(payment * f64::from(result.months) >= balance - 1e-6);
            prop_assert_eq!(remaining.last_value(), Some(0.0));
            let cleared = remaining.points.iter().find(|p| p.value <= 0.0).unwrap();
            prop_assert!(cleared.period <= result.months);
        }
    }
}
