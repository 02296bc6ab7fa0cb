use crate::infra::parse_chart_style;
use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args};
use risk_assessment::assessment::{
    responses_from_path, AssessmentResult, AssessmentSession, CategoryShare, ChartStyle,
    Questionnaire, ResponseSet, CATEGORY_COUNT,
};
use risk_assessment::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

/// Serializable view of one scored submission, shared by the JSON API and `score --json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AssessmentReport {
    pub(crate) assessed_at: DateTime<Utc>,
    pub(crate) scores: [i64; CATEGORY_COUNT],
    pub(crate) total: i64,
    pub(crate) riskiest_category: &'static str,
    pub(crate) category_breakdown: Vec<CategoryShare>,
    pub(crate) recommendations: Vec<&'static str>,
    pub(crate) chart: ChartView,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChartView {
    pub(crate) style: ChartStyle,
    pub(crate) content: String,
}

impl AssessmentReport {
    pub(crate) fn build(
        result: &AssessmentResult,
        style: ChartStyle,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            assessed_at,
            scores: result.scores,
            total: result.total(),
            riskiest_category: result.riskiest_category_label,
            category_breakdown: result.shares(),
            recommendations: result.recommendations.clone(),
            chart: ChartView {
                style,
                content: style.renderer().render(&result.category_breakdown),
            },
        }
    }
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["responses", "responses_csv"])
))]
pub(crate) struct ScoreArgs {
    /// Comma-separated list of 25 answers (0 = unanswered, 1 = low, 2 = medium, 3 = high)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub(crate) responses: Vec<i32>,
    /// CSV file with `question,value` rows (0-based question index)
    #[arg(long)]
    pub(crate) responses_csv: Option<PathBuf>,
    /// Chart style for the summary
    #[arg(long, default_value_t = ChartStyle::Text, value_parser = parse_chart_style)]
    pub(crate) chart: ChartStyle,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        responses_csv,
        chart,
        json,
    } = args;

    let responses = match responses_csv {
        Some(path) => responses_from_path(path)?,
        None => ResponseSet::from_slice(&responses)?,
    };

    let answered = responses.answered();
    let mut session = AssessmentSession::from_responses(responses);
    let report = AssessmentReport::build(session.submit(), chart, Utc::now());

    if json {
        let rendered = serde_json::to_string_pretty(&report)?;
        println!("{rendered}");
    } else {
        render_report(&report, answered);
    }

    Ok(())
}

fn render_report(report: &AssessmentReport, answered: usize) {
    println!("Risk Results Summary");
    println!(
        "Assessed {} ({} of {} questions answered)",
        report.assessed_at.format("%Y-%m-%d %H:%M UTC"),
        answered,
        risk_assessment::assessment::QUESTION_COUNT
    );

    println!();
    for share in &report.category_breakdown {
        println!(
            "- {}: {} ({})",
            share.category_label, share.score, share.percentage_label
        );
    }

    println!("\nRiskiest Category: {}", report.riskiest_category);

    println!("\n{}", report.chart.content.trim_end());

    println!("\nRecommended Actions for {}", report.riskiest_category);
    for recommendation in &report.recommendations {
        println!("- {recommendation}");
    }
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let questionnaire = Questionnaire::standard();
    println!("{}", questionnaire.title());

    let mut number = 1;
    for (category, questions) in questionnaire.groups() {
        println!("\n{}", category.label());
        for question in questions {
            println!("{number:>2}. {}", question.text);
            number += 1;
        }
    }

    Ok(())
}
