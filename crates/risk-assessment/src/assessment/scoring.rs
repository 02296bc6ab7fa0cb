use super::domain::{ResponseSet, RiskCategory, CATEGORY_COUNT, QUESTIONS_PER_CATEGORY};
use super::recommendations::recommendations_for;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub score: i64,
}

/// Scoring output for one submission. Rebuilt from scratch on every call to [`score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub scores: [i64; CATEGORY_COUNT],
    pub riskiest_category: RiskCategory,
    pub riskiest_category_label: &'static str,
    pub category_breakdown: Vec<CategoryScore>,
    pub recommendations: Vec<&'static str>,
}

/// A breakdown row with its share of the overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: RiskCategory,
    pub category_label: &'static str,
    pub score: i64,
    pub percentage: f64,
    pub percentage_label: String,
}

pub fn score(responses: &ResponseSet) -> AssessmentResult {
    let mut scores = [0i64; CATEGORY_COUNT];
    for (index, value) in responses.values().iter().enumerate() {
        scores[index / QUESTIONS_PER_CATEGORY] += i64::from(*value);
    }

    let riskiest_category = riskiest(&scores);
    let label = riskiest_category.label();

    let category_breakdown = RiskCategory::ordered()
        .into_iter()
        .map(|category| CategoryScore {
            category,
            category_label: category.label(),
            score: scores[category.index()],
        })
        .collect();

    AssessmentResult {
        scores,
        riskiest_category,
        riskiest_category_label: label,
        category_breakdown,
        recommendations: recommendations_for(label),
    }
}

/// First category holding the maximum score; earlier categories win ties.
fn riskiest(scores: &[i64; CATEGORY_COUNT]) -> RiskCategory {
    let max = scores.iter().copied().max().unwrap_or_default();
    scores
        .iter()
        .position(|score| *score == max)
        .and_then(RiskCategory::from_index)
        .unwrap_or(RiskCategory::Infrastructure)
}

impl AssessmentResult {
    pub fn total(&self) -> i64 {
        self.scores.iter().sum()
    }

    pub fn max_score(&self) -> i64 {
        self.scores.iter().copied().max().unwrap_or_default()
    }

    pub fn score_for(&self, category: RiskCategory) -> i64 {
        self.scores[category.index()]
    }

    pub fn shares(&self) -> Vec<CategoryShare> {
        let total = self.total();
        self.category_breakdown
            .iter()
            .map(|entry| {
                let percentage = percentage(entry.score, total);
                CategoryShare {
                    category: entry.category,
                    category_label: entry.category_label,
                    score: entry.score,
                    percentage,
                    percentage_label: format_percentage(percentage),
                }
            })
            .collect()
    }
}

/// `score / total * 100` rounded to one decimal. A zero total yields 0.0.
pub fn percentage(score: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = score as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}
