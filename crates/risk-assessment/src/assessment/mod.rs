//! Questionnaire, scoring engine, and result presentation for the risk assessment.

pub mod chart;
pub mod domain;
mod import;
mod questionnaire;
pub mod recommendations;
mod scoring;
mod session;

pub use chart::{ChartRenderer, ChartStyle};
pub use domain::{
    Answer, AssessmentError, Question, ResponseSet, RiskCategory, CATEGORY_COUNT, QUESTION_COUNT,
    QUESTIONS_PER_CATEGORY,
};
pub use import::{responses_from_path, responses_from_reader};
pub use questionnaire::Questionnaire;
pub use recommendations::{recommendations_for, FALLBACK_RECOMMENDATION};
pub use scoring::{
    format_percentage, percentage, score, AssessmentResult, CategoryScore, CategoryShare,
};
pub use session::AssessmentSession;
