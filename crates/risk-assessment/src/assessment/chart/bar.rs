use super::{relative_width, ChartRenderer, ChartStyle};
use crate::assessment::scoring::CategoryScore;
use html_escape::encode_text;
use std::fmt::Write as _;

/// Horizontal HTML bars scaled against the highest category score.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl ChartRenderer for BarChart {
    fn style(&self) -> ChartStyle {
        ChartStyle::Bar
    }

    fn render(&self, breakdown: &[CategoryScore]) -> String {
        let max = breakdown.iter().map(|entry| entry.score).max().unwrap_or(0);
        let mut html = String::from("<div class=\"bar-chart\">\n");

        for entry in breakdown {
            let width = relative_width(entry.score, max);
            let _ = write!(
                html,
                "  <div class=\"bar-label\">{label}</div>\n  <div class=\"bar-container\">\
                 <div class=\"bar-fill\" style=\"width: {width:.1}%;\"></div>\
                 <span class=\"bar-score\">{score}</span></div>\n",
                label = encode_text(entry.category_label),
                score = entry.score,
            );
        }

        html.push_str("</div>");
        html
    }
}
