//! Time-indexed series for charting

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Longest horizon a series may cover, counted in its own periods
/// (a thousand years of months)
pub const MAX_SERIES_PERIODS: u32 = 12_000;

/// Index of the last period of a series ending at `periods`, which must
/// already be a whole number. Negative horizons collapse to period 0.
pub fn last_period(periods: f64) -> CalcResult<u32> {
    if !periods.is_finite() || periods > f64::from(MAX_SERIES_PERIODS) {
        return Err(CalcError::HorizonTooLong { periods, max: MAX_SERIES_PERIODS });
    }
    Ok(periods.max(0.0) as u32)
}

/// Unit of the period index in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodUnit {
    Month,
    Year,
}

/// A single (period, value) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: u32,
    pub value: f64,
}

/// Named series of points, recomputed per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub unit: PeriodUnit,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Evaluate `value_at` for every period in `periods`
    pub fn build<I, F>(name: &str, unit: PeriodUnit, periods: I, value_at: F) -> Self
    where
        I: IntoIterator<Item = u32>,
        F: Fn(u32) -> f64,
    {
        Self {
            name: name.to_string(),
            unit,
            points: periods
                .into_iter()
                .map(|period| SeriesPoint { period, value: value_at(period) })
                .collect(),
        }
    }

    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pass the series through if every point is finite
    pub fn ensure_finite(self, field: &'static str) -> CalcResult<Self> {
        if self.points.iter().all(|p| p.value.is_finite()) {
            Ok(self)
        } else {
            Err(CalcError::NonFiniteResult { field })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_series() {
        let series = Series::build("squares", PeriodUnit::Year, 0..=3, |p| (p * p) as f64);
        assert_eq!(series.len(), 4);
        assert_eq!(series.points[2], SeriesPoint { period: 2, value: 4.0 });
        assert_eq!(series.last_value(), Some(9.0));
    }

    #[test]
    fn test_last_period_is_capped() {
        assert_eq!(last_period(41.0), Ok(41));
        assert_eq!(last_period(-3.0), Ok(0));
        assert_eq!(last_period(f64::from(MAX_SERIES_PERIODS)), Ok(MAX_SERIES_PERIODS));
        assert!(matches!(last_period(1e10), Err(CalcError::HorizonTooLong { .. })));
        assert!(last_period(f64::INFINITY).is_err());
        assert!(last_period(f64::NAN).is_err());
    }

    #[test]
    fn test_non_finite_series_rejected() {
        let series = Series::build("blowup", PeriodUnit::Year, 0..=1, |p| if p == 0 { 1.0 } else { f64::INFINITY });
        assert_eq!(series.ensure_finite("blowup"), Err(CalcError::NonFiniteResult { field: "blowup" }));
    }

    #[test]
    fn test_empty_series() {
        let series = Series::build("none", PeriodUnit::Month, 1..1, |_| 0.0);
        assert!(series.is_empty());
        assert_eq!(series.last_value(), None);
    }
}
