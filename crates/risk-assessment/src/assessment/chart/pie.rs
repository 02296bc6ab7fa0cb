use super::{ChartRenderer, ChartStyle, PALETTE};
use crate::assessment::scoring::CategoryScore;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

const STANDARD_DIAMETER: u32 = 300;
const COMPACT_DIAMETER: u32 = 150;
const EMPTY_FILL: &str = "#e0e0e0";

/// SVG pie chart with a legend. Categories with a non-positive score get no slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieChart {
    diameter: u32,
}

impl PieChart {
    pub const fn new(diameter: u32) -> Self {
        Self { diameter }
    }

    pub const fn standard() -> Self {
        Self::new(STANDARD_DIAMETER)
    }

    pub const fn compact() -> Self {
        Self::new(COMPACT_DIAMETER)
    }

    pub const fn diameter(&self) -> u32 {
        self.diameter
    }

    fn slices(&self, breakdown: &[CategoryScore]) -> String {
        let radius = f64::from(self.diameter) / 2.0;
        let total: i64 = breakdown.iter().map(|entry| entry.score.max(0)).sum();
        let mut svg = String::new();

        if total == 0 {
            let _ = write!(
                svg,
                "<circle cx=\"{radius:.2}\" cy=\"{radius:.2}\" r=\"{radius:.2}\" fill=\"{EMPTY_FILL}\" />"
            );
            return svg;
        }

        let mut start = -FRAC_PI_2;
        for (index, entry) in breakdown.iter().enumerate() {
            if entry.score <= 0 {
                continue;
            }
            let color = PALETTE[index % PALETTE.len()];
            let sweep = entry.score as f64 / total as f64 * TAU;

            if entry.score == total {
                let _ = write!(
                    svg,
                    "<circle cx=\"{radius:.2}\" cy=\"{radius:.2}\" r=\"{radius:.2}\" fill=\"{color}\" />"
                );
                break;
            }

            let end = start + sweep;
            let (x0, y0) = point(radius, start);
            let (x1, y1) = point(radius, end);
            let large_arc = u8::from(sweep > std::f64::consts::PI);
            let _ = write!(
                svg,
                "<path d=\"M {radius:.2} {radius:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z\" fill=\"{color}\" />"
            );
            start = end;
        }

        svg
    }
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius + radius * angle.cos(), radius + radius * angle.sin())
}

impl ChartRenderer for PieChart {
    fn style(&self) -> ChartStyle {
        if self.diameter <= COMPACT_DIAMETER {
            ChartStyle::CompactPie
        } else {
            ChartStyle::Pie
        }
    }

    fn render(&self, breakdown: &[CategoryScore]) -> String {
        let mut html = String::from("<div class=\"pie-chart\">\n");
        let _ = writeln!(
            html,
            "  <svg width=\"{d}\" height=\"{d}\" viewBox=\"0 0 {d} {d}\" role=\"img\">{slices}</svg>",
            d = self.diameter,
            slices = self.slices(breakdown),
        );

        html.push_str("  <ul class=\"pie-legend\">\n");
        for (index, entry) in breakdown.iter().enumerate() {
            let _ = writeln!(
                html,
                "    <li><span class=\"swatch\" style=\"background: {color};\"></span>{label}: {score}</li>",
                color = encode_double_quoted_attribute(PALETTE[index % PALETTE.len()]),
                label = encode_text(entry.category_label),
                score = entry.score,
            );
        }
        html.push_str("  </ul>\n</div>");
        html
    }
}
