//! Error types for calculators and assumption loading

use thiserror::Error;

/// Result type alias for calculator operations
pub type CalcResult<T> = std::result::Result<T, CalcError>;

/// Faults raised at the calculator boundary.
///
/// Input faults are detected before a formula is evaluated. Finite inputs
/// that still overflow surface as `NonFiniteResult`, so no NaN or infinity
/// ever reaches a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("input `{field}` must be a finite number")]
    NonFinite { field: &'static str },

    #[error("work hours must be non-zero")]
    ZeroWorkHours,

    #[error("work hours plus commute time must be non-zero")]
    ZeroTotalHours,

    #[error("monthly income must be non-zero to compute efficiency")]
    ZeroIncome,

    #[error("annual hours must be non-zero")]
    ZeroAnnualHours,

    #[error("amortization needs a positive number of months, got {months}")]
    NonPositiveTerm { months: f64 },

    #[error("investment period cannot be negative, got {years} years")]
    NegativePeriod { years: f64 },

    #[error("total contributions are zero, ROI is undefined")]
    ZeroContributions,

    #[error("comparison horizon must be at least one whole year, got {years}")]
    InvalidHorizon { years: f64 },

    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    RetirementHorizon { current_age: f64, retirement_age: f64 },

    #[error("payment too small: {payment:.2} per month does not cover {interest:.2} of monthly interest")]
    PaymentTooSmall { payment: f64, interest: f64 },

    #[error("rate `{field}` of {annual_pct}% would wipe out more than the whole balance each period")]
    RateOutOfRange { field: &'static str, annual_pct: f64 },

    #[error("horizon of {periods} periods exceeds the supported maximum of {max}")]
    HorizonTooLong { periods: f64, max: u32 },

    #[error("result `{field}` overflowed; inputs are too large to evaluate")]
    NonFiniteResult { field: &'static str },
}

/// Reject NaN and infinite inputs
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { field })
    }
}

/// Reject a computed value that overflowed to infinity or NaN
pub(crate) fn ensure_finite_output(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult { field })
    }
}

/// Errors raised while loading assumption overrides from disk
#[derive(Error, Debug)]
pub enum AssumptionError {
    #[error("failed to read assumptions file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown planning constant `{0}`")]
    UnknownConstant(String),

    #[error("invalid value {value} for `{name}`")]
    InvalidValue { name: String, value: f64 },
}

/// Errors raised while assembling a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("failed to encode report inputs: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("amount", 12.5), Ok(12.5));
        assert_eq!(
            ensure_finite("amount", f64::NAN),
            Err(CalcError::NonFinite { field: "amount" })
        );
        assert!(ensure_finite("rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite_output() {
        assert_eq!(ensure_finite_output("total", 1.0), Ok(1.0));
        assert_eq!(
            ensure_finite_output("total", f64::INFINITY / f64::INFINITY),
            Err(CalcError::NonFiniteResult { field: "total" })
        );
    }

    #[test]
    fn test_payment_too_small_message() {
        let err = CalcError::PaymentTooSmall { payment: 100.0, interest: 200.0 };
        assert_eq!(
            err.to_string(),
            "payment too small: 100.00 per month does not cover 200.00 of monthly interest"
        );
    }
}
