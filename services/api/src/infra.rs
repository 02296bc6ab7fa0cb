use metrics_exporter_prometheus::PrometheusHandle;
use risk_assessment::assessment::{
    AssessmentError, AssessmentSession, ChartStyle, QUESTION_COUNT,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) chart_style: ChartStyle,
}

/// Form field carrying the selector value of question `index`.
pub(crate) fn question_field(index: usize) -> String {
    format!("q{index}")
}

pub(crate) const CHART_FIELD: &str = "chart";

/// Replays submitted selector fields as answer events on a fresh session.
/// Missing or unparsable selectors leave the question unanswered.
pub(crate) fn session_from_form(
    fields: &HashMap<String, String>,
) -> Result<AssessmentSession, AssessmentError> {
    let mut session = AssessmentSession::new();
    for index in 0..QUESTION_COUNT {
        let Some(raw) = fields.get(&question_field(index)) else {
            continue;
        };
        match raw.trim().parse::<i32>() {
            Ok(value) => session.answer(index, value)?,
            Err(_) => warn!(
                question_index = index,
                raw = %raw,
                "ignoring unparsable selector value"
            ),
        }
    }
    Ok(session)
}

/// Chart style requested by the form, falling back to the configured default.
pub(crate) fn chart_style_from_form(
    fields: &HashMap<String, String>,
    fallback: ChartStyle,
) -> ChartStyle {
    match fields.get(CHART_FIELD) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(requested = %raw, %fallback, "unknown chart style, using default");
            fallback
        }),
        None => fallback,
    }
}

pub(crate) fn parse_chart_style(raw: &str) -> Result<ChartStyle, String> {
    raw.parse::<ChartStyle>().map_err(|err| {
        format!("{err} (expected one of: {})", ChartStyle::names().join(", "))
    })
}
