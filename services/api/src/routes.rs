use crate::infra::{chart_style_from_form, session_from_form, AppState};
use crate::report::AssessmentReport;
use crate::views;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use risk_assessment::assessment::{
    AssessmentSession, ChartStyle, Question, Questionnaire, ResponseSet, RiskCategory,
};
use risk_assessment::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) responses: Vec<i32>,
    #[serde(default)]
    pub(crate) chart: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionnaireView {
    pub(crate) title: &'static str,
    pub(crate) categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) category: RiskCategory,
    pub(crate) label: &'static str,
    pub(crate) questions: Vec<QuestionView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) index: usize,
    pub(crate) text: &'static str,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(questionnaire_form))
        .route("/assessment", post(submit_form))
        .route("/api/v1/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessments", post(assessment_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questionnaire_form(State(state): State<AppState>) -> Html<String> {
    Html(views::questionnaire_page(
        &Questionnaire::standard(),
        state.chart_style,
    ))
}

pub(crate) async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut session = session_from_form(&fields)?;
    let style = chart_style_from_form(&fields, state.chart_style);
    let report = score_submission(&mut session, style);
    Ok(Html(views::results_page(&Questionnaire::standard(), &report)))
}

pub(crate) async fn assessment_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let AssessmentRequest { responses, chart } = payload;

    let responses = ResponseSet::from_slice(&responses)?;
    let style = match chart {
        Some(raw) => raw.parse::<ChartStyle>()?,
        None => state.chart_style,
    };

    let mut session = AssessmentSession::from_responses(responses);
    Ok(Json(score_submission(&mut session, style)))
}

pub(crate) async fn questionnaire_endpoint() -> Json<QuestionnaireView> {
    let questionnaire = Questionnaire::standard();
    let categories = questionnaire
        .groups()
        .map(|(category, questions)| CategoryView {
            category,
            label: category.label(),
            questions: question_views(category, questions),
        })
        .collect();

    Json(QuestionnaireView {
        title: questionnaire.title(),
        categories,
    })
}

fn question_views(category: RiskCategory, questions: &[Question]) -> Vec<QuestionView> {
    category
        .question_indices()
        .zip(questions)
        .map(|(index, question)| QuestionView {
            index,
            text: question.text,
        })
        .collect()
}

fn score_submission(session: &mut AssessmentSession, style: ChartStyle) -> AssessmentReport {
    let answered = session.responses().answered();
    let result = session.submit();
    info!(
        answered,
        riskiest = result.riskiest_category_label,
        total = result.total(),
        chart = %style,
        "assessment scored"
    );
    AssessmentReport::build(result, style, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const SCENARIO: [i32; 25] = [
        3, 3, 3, 3, 3, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0,
    ];

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            chart_style: ChartStyle::Bar,
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[tokio::test]
    async fn assessment_endpoint_scores_documented_scenario() {
        let request = AssessmentRequest {
            responses: SCENARIO.to_vec(),
            chart: Some("pie".to_string()),
        };

        let Json(body) = assessment_endpoint(State(test_state(true)), Json(request))
            .await
            .expect("assessment scores");

        assert_eq!(body.scores, [15, 0, 5, 10, 4]);
        assert_eq!(body.total, 34);
        assert_eq!(body.riskiest_category, "Infrastructure Risk");
        assert_eq!(body.category_breakdown[0].percentage, 44.1);
        assert_eq!(body.recommendations.len(), 3);
        assert_eq!(body.chart.style, ChartStyle::Pie);
        assert!(body.chart.content.contains("<svg"));
    }

    #[tokio::test]
    async fn assessment_endpoint_rejects_wrong_length() {
        let request = AssessmentRequest {
            responses: vec![1; 24],
            chart: None,
        };

        let err = assessment_endpoint(State(test_state(true)), Json(request))
            .await
            .expect_err("24 responses are rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn assessment_endpoint_rejects_unknown_chart() {
        let request = AssessmentRequest {
            responses: vec![0; 25],
            chart: Some("radar".to_string()),
        };

        let result = assessment_endpoint(State(test_state(true)), Json(request)).await;
        assert!(matches!(result, Err(AppError::Assessment(_))));
    }

    #[tokio::test]
    async fn questionnaire_endpoint_groups_questions() {
        let Json(view) = questionnaire_endpoint().await;
        assert_eq!(view.categories.len(), 5);
        assert_eq!(view.categories[1].label, "Application Risk");
        assert_eq!(view.categories[1].questions[2].index, 7);
        assert!(view.categories[1].questions[2].text.contains("encrypted"));
    }

    #[tokio::test]
    async fn form_submission_renders_results_page() {
        let app = router(test_state(true));
        let mut fields: Vec<String> = SCENARIO
            .iter()
            .enumerate()
            .map(|(index, value)| format!("q{index}={value}"))
            .collect();
        fields.push("chart=compact-pie".to_string());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/assessment")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(fields.join("&")))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<li><strong>Infrastructure Risk:</strong> 15 (44.1%)</li>"));
        assert!(html.contains("viewBox=\"0 0 150 150\""));
    }

    #[tokio::test]
    async fn empty_form_submission_is_accepted() {
        let app = router(test_state(true));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/assessment")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<li><strong>Operational Risk:</strong> 0 (0.0%)</li>"));
        assert!(html.contains("Riskiest Category:</strong> Infrastructure Risk"));
        assert!(!html.contains("NaN"));
    }

    #[tokio::test]
    async fn index_serves_the_questionnaire() {
        let app = router(test_state(true));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("NLNB Risk Assessment Tool"));
        assert!(html.contains("Submit Assessment"));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let response = readiness_endpoint(State(test_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(State(test_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn garbled_selector_scores_zero_through_the_form() {
        let app = router(test_state(true));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/assessment")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("q0=3&q1=high&q2=2&q7=&chart=bar"))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<li><strong>Infrastructure Risk:</strong> 5 (100.0%)</li>"));
        assert!(html.contains("<li><strong>Application Risk:</strong> 0 (0.0%)</li>"));
        assert!(html.contains("bar-chart"));
    }
}
