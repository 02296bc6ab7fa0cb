//! Interchangeable renderers for the category breakdown.
//!
//! Every renderer consumes the same `&[CategoryScore]` slice produced by the
//! scoring engine, so the engine stays unaware of which one is selected.

mod bar;
mod chartjs;
mod pie;
mod text;

pub use bar::BarChart;
pub use chartjs::ChartJsConfig;
pub use pie::PieChart;
pub use text::TextBarChart;

use super::domain::AssessmentError;
use super::scoring::CategoryScore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fill colours in category order.
pub const PALETTE: [&str; 5] = ["#4A90E2", "#50E3C2", "#F5A623", "#D0021B", "#9013FE"];

pub trait ChartRenderer: Send + Sync {
    fn style(&self) -> ChartStyle;
    fn render(&self, breakdown: &[CategoryScore]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartStyle {
    #[default]
    Bar,
    Pie,
    CompactPie,
    #[serde(rename = "chartjs")]
    ChartJs,
    Text,
}

impl ChartStyle {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Bar,
            Self::Pie,
            Self::CompactPie,
            Self::ChartJs,
            Self::Text,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::CompactPie => "compact-pie",
            Self::ChartJs => "chartjs",
            Self::Text => "text",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar chart",
            Self::Pie => "Pie chart",
            Self::CompactPie => "Compact pie chart",
            Self::ChartJs => "Chart.js pie",
            Self::Text => "Text bars",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ordered().into_iter().map(Self::as_str).collect()
    }

    pub fn renderer(self) -> Box<dyn ChartRenderer> {
        match self {
            Self::Bar => Box::new(BarChart),
            Self::Pie => Box::new(PieChart::standard()),
            Self::CompactPie => Box::new(PieChart::compact()),
            Self::ChartJs => Box::new(ChartJsConfig),
            Self::Text => Box::new(TextBarChart::default()),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartStyle {
    type Err = AssessmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
        Self::ordered()
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| AssessmentError::UnknownChartStyle(raw.to_string()))
    }
}

/// Width of one entry relative to the largest score, clamped to `0..=100`.
pub(crate) fn relative_width(score: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (score as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}
