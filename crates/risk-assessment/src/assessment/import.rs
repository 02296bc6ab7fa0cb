use super::domain::{AssessmentError, ResponseSet};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ResponseRow {
    question: usize,
    value: i32,
}

/// Loads responses from `question,value` rows (0-based question index).
/// Questions without a row stay unanswered; a later row overwrites an earlier one.
pub fn responses_from_reader<R: Read>(reader: R) -> Result<ResponseSet, AssessmentError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut responses = ResponseSet::new();

    for (offset, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
        let row = record?;
        responses
            .set(row.question, row.value)
            .map_err(|err| AssessmentError::InvalidRow {
                row: offset + 1,
                reason: err.to_string(),
            })?;
    }

    Ok(responses)
}

pub fn responses_from_path(path: impl AsRef<Path>) -> Result<ResponseSet, AssessmentError> {
    let file = File::open(path)?;
    responses_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_rows_in_any_order() {
        let csv = "question,value\n24,1\n0, 3\n7,2\n";
        let responses = responses_from_reader(Cursor::new(csv)).expect("parses");
        assert_eq!(responses.get(0), Some(3));
        assert_eq!(responses.get(7), Some(2));
        assert_eq!(responses.get(24), Some(1));
        assert_eq!(responses.answered(), 3);
    }

    #[test]
    fn rejects_question_outside_the_questionnaire() {
        let csv = "question,value\n3,1\n30,2\n";
        let err = responses_from_reader(Cursor::new(csv)).expect_err("index 30 invalid");
        assert!(matches!(err, AssessmentError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn rejects_malformed_values() {
        let csv = "question,value\n1,high\n";
        assert!(matches!(
            responses_from_reader(Cursor::new(csv)),
            Err(AssessmentError::Csv(_))
        ));
    }
}
