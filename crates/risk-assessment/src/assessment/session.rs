use super::domain::{AssessmentError, ResponseSet};
use super::scoring::{score, AssessmentResult};
use tracing::debug;

/// Form state for one assessment: owns the answers and the last submitted result.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    responses: ResponseSet,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_responses(responses: ResponseSet) -> Self {
        Self {
            responses,
            result: None,
        }
    }

    /// Records one selector change. The value is stored as given.
    pub fn answer(&mut self, question_index: usize, value: i32) -> Result<(), AssessmentError> {
        self.responses.set(question_index, value)?;
        debug!(question_index, value, "response recorded");
        Ok(())
    }

    /// Scores a snapshot of the current answers. Unanswered questions count as zero.
    pub fn submit(&mut self) -> &AssessmentResult {
        let snapshot = self.responses;
        let result = score(&snapshot);
        debug!(
            answered = snapshot.answered(),
            riskiest = result.riskiest_category_label,
            "assessment submitted"
        );
        self.result.insert(result)
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }
}
