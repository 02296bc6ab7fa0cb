use risk_assessment::assessment::{
    recommendations_for, responses_from_path, Answer, AssessmentSession, ChartStyle,
    Questionnaire, RiskCategory, FALLBACK_RECOMMENDATION, QUESTION_COUNT,
};
use std::io::Write;

#[test]
fn answering_every_question_high_flags_infrastructure_first() {
    let questionnaire = Questionnaire::standard();
    let mut session = AssessmentSession::new();
    for index in 0..questionnaire.len() {
        session
            .answer(index, Answer::High.value())
            .expect("question index in range");
    }

    let result = session.submit();
    assert!(result.scores.iter().all(|score| *score == 15));
    assert_eq!(result.riskiest_category, RiskCategory::Infrastructure);
    assert!(result
        .shares()
        .iter()
        .all(|share| share.percentage_label == "20.0%"));
}

#[test]
fn each_category_group_drives_its_own_recommendations() {
    let questionnaire = Questionnaire::standard();
    for (category, _) in questionnaire.groups() {
        let mut session = AssessmentSession::new();
        for index in category.question_indices() {
            session.answer(index, Answer::Medium.value()).expect("in range");
        }
        let result = session.submit();
        assert_eq!(result.riskiest_category, category);
        assert_eq!(result.recommendations, recommendations_for(category.label()));
    }
    assert_eq!(recommendations_for("Unknown"), vec![FALLBACK_RECOMMENDATION]);
}

#[test]
fn responses_load_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "question,value").expect("write header");
    writeln!(file, "16,3").expect("write row");
    writeln!(file, "17,3").expect("write row");
    writeln!(file, "2,1").expect("write row");

    let responses = responses_from_path(file.path()).expect("csv loads");
    let mut session = AssessmentSession::from_responses(responses);
    let result = session.submit();

    assert_eq!(result.riskiest_category, RiskCategory::Cybersecurity);
    assert_eq!(result.total(), 7);
    assert_eq!(session.responses().values().len(), QUESTION_COUNT);
}

#[test]
fn every_chart_style_renders_the_breakdown() {
    let mut session = AssessmentSession::new();
    session.answer(4, 2).expect("in range");
    let breakdown = session.submit().category_breakdown.clone();

    for style in ChartStyle::ordered() {
        let rendered = style.renderer().render(&breakdown);
        assert!(
            rendered.contains("Infrastructure Risk"),
            "{style} output omitted a category label"
        );
    }
}
