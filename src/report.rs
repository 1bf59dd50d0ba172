//! Human-readable report summaries for the document renderer
//!
//! A `Report` bundles a title, the echoed inputs, summary lines and the
//! chart. Producing the PDF or image is left to the renderer.

use crate::chart::Chart;
use serde::{Deserialize, Serialize};

/// Output artifact requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Jpeg,
}

impl ReportFormat {
    /// `jpg`/`jpeg` (any case) select an image; anything else is a PDF
    pub fn parse(format: &str) -> Self {
        match format.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => ReportFormat::Jpeg,
            _ => ReportFormat::Pdf,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Jpeg => "jpg",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Implemented by every calculator result
pub trait Summarize {
    /// Base name of the report attachment, e.g. `credit` for `credit_report.pdf`
    const FILE_STEM: &'static str;

    fn report_title(&self) -> String;

    fn summary_lines(&self) -> Vec<String>;

    fn chart(&self) -> &Chart;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub file_stem: String,
    pub inputs: serde_json::Value,
    pub summary: Vec<String>,
    pub chart: Chart,
}

impl Report {
    pub fn build<Q, R>(request: &Q, result: &R) -> serde_json::Result<Self>
    where
        Q: Serialize,
        R: Summarize,
    {
        Ok(Self {
            title: result.report_title(),
            file_stem: R::FILE_STEM.to_string(),
            inputs: serde_json::to_value(request)?,
            summary: result.summary_lines(),
            chart: result.chart().clone(),
        })
    }

    /// Attachment file name, e.g. `debt_report.jpg`
    pub fn attachment_name(&self, format: ReportFormat) -> String {
        format!("{}_report.{}", self.file_stem, format.extension())
    }

    pub fn summary_text(&self) -> String {
        self.summary.join("\n")
    }
}

/// `€12,345.67` style formatting
pub fn format_money(symbol: &str, value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", symbol, sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("€", 0.0), "€0.00");
        assert_eq!(format_money("$", 999.5), "$999.50");
        assert_eq!(format_money("€", 1234.567), "€1,234.57");
        assert_eq!(format_money("₴", 1_234_567.0), "₴1,234,567.00");
        assert_eq!(format_money("€", -4500.0), "€-4,500.00");
    }

    #[test]
    fn test_report_format() {
        assert_eq!(ReportFormat::parse("JPEG"), ReportFormat::Jpeg);
        assert_eq!(ReportFormat::parse("jpg"), ReportFormat::Jpeg);
        assert_eq!(ReportFormat::parse("pdf"), ReportFormat::Pdf);
        assert_eq!(ReportFormat::parse("png"), ReportFormat::Pdf);
        assert_eq!(ReportFormat::Jpeg.media_type(), "image/jpeg");
    }
}
