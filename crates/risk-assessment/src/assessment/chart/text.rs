use super::{relative_width, ChartRenderer, ChartStyle};
use crate::assessment::scoring::CategoryScore;
use std::fmt::Write as _;

const DEFAULT_WIDTH: usize = 30;

/// Fixed-width `#` bars for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct TextBarChart {
    width: usize,
}

impl TextBarChart {
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl ChartRenderer for TextBarChart {
    fn style(&self) -> ChartStyle {
        ChartStyle::Text
    }

    fn render(&self, breakdown: &[CategoryScore]) -> String {
        let max = breakdown.iter().map(|entry| entry.score).max().unwrap_or(0);
        let label_width = breakdown
            .iter()
            .map(|entry| entry.category_label.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for entry in breakdown {
            let share = relative_width(entry.score, max) / 100.0;
            let filled = (share * self.width as f64).round() as usize;
            let _ = writeln!(
                out,
                "{label:<label_width$} |{bar:<width$}| {score}",
                label = entry.category_label,
                bar = "#".repeat(filled),
                width = self.width,
                score = entry.score,
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{score, ResponseSet};

    #[test]
    fn longest_bar_spans_the_full_width() {
        let mut values = [0; 25];
        values[0] = 3;
        values[1] = 3;
        values[5] = 3;
        let result = score(&ResponseSet::from_array(values));
        let chart = TextBarChart::new(10).render(&result.category_breakdown);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("|##########| 6"));
        assert!(lines[1].contains("|#####     | 3"));
        assert!(lines[2].contains("|          | 0"));
    }
}
