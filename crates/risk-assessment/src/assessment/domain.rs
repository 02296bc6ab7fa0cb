use serde::{Deserialize, Serialize};

pub const CATEGORY_COUNT: usize = 5;
pub const QUESTIONS_PER_CATEGORY: usize = 5;
pub const QUESTION_COUNT: usize = CATEGORY_COUNT * QUESTIONS_PER_CATEGORY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Infrastructure,
    Application,
    Vendor,
    Cybersecurity,
    Operational,
}

impl RiskCategory {
    /// Declaration order. Question groups and tie-breaks both follow it.
    pub const fn ordered() -> [Self; CATEGORY_COUNT] {
        [
            Self::Infrastructure,
            Self::Application,
            Self::Vendor,
            Self::Cybersecurity,
            Self::Operational,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure Risk",
            Self::Application => "Application Risk",
            Self::Vendor => "Vendor Risk",
            Self::Cybersecurity => "Cybersecurity Risk",
            Self::Operational => "Operational Risk",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Infrastructure => 0,
            Self::Application => 1,
            Self::Vendor => 2,
            Self::Cybersecurity => 3,
            Self::Operational => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == label)
    }

    /// Category owning the question at `question_index` (`floor(i / 5)`).
    pub fn for_question(question_index: usize) -> Option<Self> {
        Self::from_index(question_index / QUESTIONS_PER_CATEGORY)
    }

    /// 0-based indices of the five questions in this category.
    pub fn question_indices(self) -> std::ops::Range<usize> {
        let start = self.index() * QUESTIONS_PER_CATEGORY;
        start..start + QUESTIONS_PER_CATEGORY
    }
}

/// Options offered by each question's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    #[default]
    Unanswered,
    Low,
    Medium,
    High,
}

impl Answer {
    pub const fn ordered() -> [Self; 4] {
        [Self::Unanswered, Self::Low, Self::Medium, Self::High]
    }

    pub const fn value(self) -> i32 {
        match self {
            Self::Unanswered => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unanswered => "Select",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|answer| answer.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub category: RiskCategory,
}

/// The 25 ordinal answers for one assessment. Values are stored as given;
/// only the length is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet {
    values: [i32; QUESTION_COUNT],
}

impl Default for ResponseSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSet {
    pub const fn new() -> Self {
        Self {
            values: [0; QUESTION_COUNT],
        }
    }

    pub const fn from_array(values: [i32; QUESTION_COUNT]) -> Self {
        Self { values }
    }

    pub fn from_slice(values: &[i32]) -> Result<Self, AssessmentError> {
        let values: [i32; QUESTION_COUNT] =
            values.try_into().map_err(|_| AssessmentError::InvalidLength {
                expected: QUESTION_COUNT,
                actual: values.len(),
            })?;
        Ok(Self { values })
    }

    pub fn set(&mut self, question_index: usize, value: i32) -> Result<(), AssessmentError> {
        let slot = self
            .values
            .get_mut(question_index)
            .ok_or(AssessmentError::QuestionOutOfRange {
                index: question_index,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn get(&self, question_index: usize) -> Option<i32> {
        self.values.get(question_index).copied()
    }

    pub fn values(&self) -> &[i32; QUESTION_COUNT] {
        &self.values
    }

    pub fn answered(&self) -> usize {
        self.values.iter().filter(|value| **value != 0).count()
    }

    pub fn total(&self) -> i64 {
        self.values.iter().map(|value| i64::from(*value)).sum()
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<i32>::deserialize(deserializer)?;
        Self::from_slice(&values).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("expected {expected} responses, received {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("question index {index} is outside 0..{}", QUESTION_COUNT)]
    QuestionOutOfRange { index: usize },
    #[error("unknown chart style '{0}'")]
    UnknownChartStyle(String),
    #[error("invalid response row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("failed to read responses: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid responses CSV: {0}")]
    Csv(#[from] csv::Error),
}
