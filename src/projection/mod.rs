//! Shared financial math and series projection

mod growth;
mod series;

pub use growth::{
    amortized_payment, annuity_fv, balance_after, checked_annual_rate, checked_monthly_rate,
    future_value, growth_factor, is_zero_rate, monthly_rate, payoff_periods, round_money,
    round_pct, RATE_EPSILON,
};
pub use series::{last_period, PeriodUnit, Series, SeriesPoint, MAX_SERIES_PERIODS};
