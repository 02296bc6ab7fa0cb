use super::{ChartRenderer, ChartStyle, PALETTE};
use crate::assessment::scoring::CategoryScore;
use serde_json::json;

/// Pie configuration object for a canvas charting library (Chart.js schema).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsConfig;

impl ChartJsConfig {
    pub fn config(&self, breakdown: &[CategoryScore]) -> serde_json::Value {
        let labels: Vec<&str> = breakdown.iter().map(|entry| entry.category_label).collect();
        let data: Vec<i64> = breakdown.iter().map(|entry| entry.score).collect();
        let colors: Vec<&str> = (0..breakdown.len())
            .map(|index| PALETTE[index % PALETTE.len()])
            .collect();

        json!({
            "type": "pie",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Risk score",
                    "data": data,
                    "backgroundColor": colors,
                }],
            },
            "options": {
                "responsive": true,
                "plugins": {
                    "legend": { "position": "bottom" },
                },
            },
        })
    }
}

impl ChartRenderer for ChartJsConfig {
    fn style(&self) -> ChartStyle {
        ChartStyle::ChartJs
    }

    fn render(&self, breakdown: &[CategoryScore]) -> String {
        self.config(breakdown).to_string()
    }
}
