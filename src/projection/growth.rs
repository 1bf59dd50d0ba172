//! Compounding, annuity and amortization formulas
//!
//! Each quantity has one "value at period k" function. Calculators call it
//! once for the headline number and once per point when building a series.

use crate::error::{CalcError, CalcResult};

/// Periodic rates below this magnitude are treated as zero
pub const RATE_EPSILON: f64 = 1e-10;

/// Convert an annual percentage (5 = 5%) to a monthly decimal rate
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

/// `monthly_rate` for a rate that compounds or amortizes a balance.
/// `1 + r` must stay positive for the powers and logarithms below.
pub fn checked_monthly_rate(field: &'static str, annual_pct: f64) -> CalcResult<f64> {
    let rate = monthly_rate(annual_pct);
    if rate <= -1.0 {
        return Err(CalcError::RateOutOfRange { field, annual_pct });
    }
    Ok(rate)
}

/// Annual percentage as a decimal growth rate; -100% is the floor
pub fn checked_annual_rate(field: &'static str, annual_pct: f64) -> CalcResult<f64> {
    let rate = annual_pct / 100.0;
    if rate < -1.0 {
        return Err(CalcError::RateOutOfRange { field, annual_pct });
    }
    Ok(rate)
}

pub fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < RATE_EPSILON
}

/// (1 + r)^n
pub fn growth_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of a level payment made at the end of each period.
/// Degenerates to `payment * n` at a zero rate.
pub fn annuity_fv(payment: f64, rate: f64, periods: f64) -> f64 {
    if is_zero_rate(rate) {
        return payment * periods;
    }
    payment * (growth_factor(rate, periods) - 1.0) / rate
}

/// Lump sum compounded for `periods` plus a level contribution stream
pub fn future_value(principal: f64, payment: f64, rate: f64, periods: f64) -> f64 {
    principal * growth_factor(rate, periods) + annuity_fv(payment, rate, periods)
}

/// Level payment that amortizes `principal` over `periods`
pub fn amortized_payment(principal: f64, rate: f64, periods: f64) -> CalcResult<f64> {
    if periods <= 0.0 {
        return Err(CalcError::NonPositiveTerm { months: periods });
    }
    if is_zero_rate(rate) {
        return Ok(principal / periods);
    }

    let factor = growth_factor(rate, periods);
    Ok(principal * rate * factor / (factor - 1.0))
}

/// Outstanding balance after `periods` level payments (may go negative
/// once the debt is repaid; callers clamp)
pub fn balance_after(principal: f64, rate: f64, payment: f64, periods: f64) -> f64 {
    principal * growth_factor(rate, periods) - annuity_fv(payment, rate, periods)
}

/// Continuous number of periods until `payment` retires `principal`.
///
/// Solves `balance_after(...) = 0` in closed form. The payment must exceed
/// the first period's interest, otherwise the balance never falls.
pub fn payoff_periods(principal: f64, rate: f64, payment: f64) -> CalcResult<f64> {
    if rate <= -1.0 {
        return Err(CalcError::RateOutOfRange { field: "rate", annual_pct: rate * 1200.0 });
    }
    let interest = principal * rate;
    if payment <= interest || payment <= 0.0 {
        return Err(CalcError::PaymentTooSmall { payment, interest });
    }
    if is_zero_rate(rate) {
        return Ok(principal / payment);
    }

    Ok((payment / (payment - interest)).ln() / (1.0 + rate).ln())
}

/// Round a monetary amount to cents
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage or ratio to one decimal
pub fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annuity_zero_rate_is_linear() {
        assert_eq!(annuity_fv(250.0, 0.0, 24.0), 6000.0);
        assert_eq!(future_value(1000.0, 250.0, 0.0, 24.0), 7000.0);
    }

    #[test]
    fn test_future_value_known_value() {
        // 100/month for 12 months at 6% annual
        let fv = annuity_fv(100.0, 0.005, 12.0);
        assert_abs_diff_eq!(fv, 1233.56, epsilon = 0.01);
    }

    #[test]
    fn test_amortized_payment_known_value() {
        // 200k over 30 years at 6%: textbook 1199.10
        let pmt = amortized_payment(200_000.0, monthly_rate(6.0), 360.0).unwrap();
        assert_abs_diff_eq!(pmt, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_amortized_payment_rejects_zero_term() {
        assert_eq!(
            amortized_payment(1000.0, 0.01, 0.0),
            Err(CalcError::NonPositiveTerm { months: 0.0 })
        );
        assert!(amortized_payment(1000.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_balance_reaches_zero_at_term() {
        let rate = monthly_rate(5.0);
        let pmt = amortized_payment(10_000.0, rate, 60.0).unwrap();
        assert_abs_diff_eq!(balance_after(10_000.0, rate, pmt, 60.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(balance_after(10_000.0, rate, pmt, 0.0), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_payoff_periods_inverts_balance() {
        let rate = 0.01;
        let months = payoff_periods(10_000.0, rate, 300.0).unwrap();
        assert_abs_diff_eq!(months, 40.75, epsilon = 0.01);
        assert_abs_diff_eq!(balance_after(10_000.0, rate, 300.0, months), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_payoff_periods_zero_rate() {
        assert_eq!(payoff_periods(1200.0, 0.0, 100.0), Ok(12.0));
    }

    #[test]
    fn test_payoff_periods_payment_too_small() {
        let err = payoff_periods(10_000.0, 0.02, 100.0).unwrap_err();
        assert!(matches!(err, CalcError::PaymentTooSmall { .. }));

        // Exactly covering interest never amortizes
        assert!(payoff_periods(10_000.0, 0.01, 100.0).is_err());
        assert!(payoff_periods(500.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_payoff_periods_rejects_total_loss_rate() {
        // -2400% a year is -200% a month; ln(1 + r) would be undefined
        assert!(matches!(
            payoff_periods(1000.0, -2.0, 100.0),
            Err(CalcError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_checked_rates() {
        assert_eq!(checked_monthly_rate("rate", 12.0), Ok(0.01));
        assert_eq!(
            checked_monthly_rate("rate", -1200.0),
            Err(CalcError::RateOutOfRange { field: "rate", annual_pct: -1200.0 })
        );
        assert_eq!(checked_annual_rate("rent_growth", -100.0), Ok(-1.0));
        assert!(checked_annual_rate("rent_growth", -150.0).is_err());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_money(1234.5678), 1234.57);
        assert_eq!(round_pct(87.46), 87.5);
    }
}
