//! Renderer-neutral chart payloads
//!
//! The engine decides what to plot; an external renderer turns a `Chart`
//! into an image without knowing any of the finance behind it.

use crate::projection::Series;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// One labelled bar or pie slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<Bar>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
}

impl Chart {
    fn with_bars(title: &str, kind: ChartKind, bars: &[(&str, f64)]) -> Self {
        Self {
            title: title.to_string(),
            kind,
            bars: bars
                .iter()
                .map(|(label, value)| Bar { label: label.to_string(), value: *value })
                .collect(),
            series: Vec::new(),
        }
    }

    pub fn bar(title: &str, bars: &[(&str, f64)]) -> Self {
        Self::with_bars(title, ChartKind::Bar, bars)
    }

    pub fn pie(title: &str, slices: &[(&str, f64)]) -> Self {
        Self::with_bars(title, ChartKind::Pie, slices)
    }

    pub fn line(title: &str, series: Vec<Series>) -> Self {
        Self {
            title: title.to_string(),
            kind: ChartKind::Line,
            bars: Vec::new(),
            series,
        }
    }

    /// Attach secondary bars (e.g. a breakdown shown next to a line chart)
    pub fn and_bars(mut self, bars: &[(&str, f64)]) -> Self {
        self.bars.extend(
            bars.iter()
                .map(|(label, value)| Bar { label: label.to_string(), value: *value }),
        );
        self
    }

    /// Attach a series to a bar or pie chart
    pub fn and_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::PeriodUnit;

    #[test]
    fn test_bar_chart() {
        let chart = Chart::bar("Rates", &[("Nominal", 20.0), ("Real", 15.5)]);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[1].label, "Real");
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_line_chart_lookup() {
        let growth = Series::build("growth", PeriodUnit::Year, 0..=2, |y| y as f64);
        let chart = Chart::line("Growth", vec![growth]).and_bars(&[("Gain", 1.0)]);
        assert!(chart.series_named("growth").is_some());
        assert!(chart.series_named("missing").is_none());
        assert_eq!(chart.bars.len(), 1);
    }

    #[test]
    fn test_empty_parts_not_serialized() {
        let chart = Chart::pie("Split", &[("A", 1.0)]);
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json.get("series").is_none());
        assert_eq!(json["kind"], "pie");
    }
}
