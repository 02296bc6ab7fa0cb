use crate::infra::{question_field, CHART_FIELD};
use crate::report::AssessmentReport;
use html_escape::{encode_double_quoted_attribute, encode_script, encode_text};
use risk_assessment::assessment::{Answer, ChartStyle, Questionnaire};
use std::fmt::Write as _;

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

const STYLES: &str = r#"
body { font-family: 'Segoe UI', sans-serif; background: #f9f9f9; color: #333; max-width: 800px; margin: 0 auto; padding: 2rem; }
h2 { color: #4A90E2; }
.question { margin-bottom: 1rem; }
select { margin-left: 1rem; }
button { margin-top: 2rem; padding: 0.6rem 1.2rem; background-color: #4A90E2; color: #fff; border: none; border-radius: 4px; cursor: pointer; font-size: 1rem; }
.results { margin-top: 2rem; background: #fff; padding: 1rem; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.05); }
.bar-chart { margin-top: 2rem; }
.bar-label { margin: 0.5rem 0 0.2rem; font-weight: bold; }
.bar-container { position: relative; background: #e0e0e0; border-radius: 4px; height: 24px; margin-bottom: 1rem; }
.bar-fill { background: #4A90E2; height: 100%; border-radius: 4px; }
.bar-score { position: absolute; top: 0; right: 10px; line-height: 24px; font-size: 14px; color: #fff; font-weight: bold; }
.pie-chart { margin-top: 2rem; display: flex; gap: 2rem; align-items: center; }
.pie-legend { list-style: none; padding: 0; }
.swatch { display: inline-block; width: 12px; height: 12px; margin-right: 0.5rem; border-radius: 2px; }
.recommendations { margin-top: 2rem; background: #f1f9ff; padding: 1rem; border-left: 4px solid #4A90E2; border-radius: 8px; }
.recommendations h3 { margin-top: 0; color: #0077cc; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLES}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = encode_text(title),
    )
}

pub(crate) fn questionnaire_page(questionnaire: &Questionnaire, default_chart: ChartStyle) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", encode_text(questionnaire.title()));
    body.push_str("<form method=\"post\" action=\"/assessment\">\n");

    for (index, question) in questionnaire.questions().iter().enumerate() {
        let _ = writeln!(
            body,
            "<div class=\"question\"><label for=\"{field}\">{number}. {text}</label>\
             <select id=\"{field}\" name=\"{field}\">{options}</select></div>",
            field = encode_double_quoted_attribute(&question_field(index)),
            number = index + 1,
            text = encode_text(question.text),
            options = answer_options(),
        );
    }

    let _ = writeln!(
        body,
        "<div class=\"question\"><label for=\"{CHART_FIELD}\">Chart style</label>\
         <select id=\"{CHART_FIELD}\" name=\"{CHART_FIELD}\">{}</select></div>",
        chart_options(default_chart),
    );
    body.push_str("<button type=\"submit\">Submit Assessment</button>\n</form>");

    layout(questionnaire.title(), &body)
}

fn answer_options() -> String {
    Answer::ordered()
        .into_iter()
        .map(|answer| {
            format!(
                "<option value=\"{}\">{}</option>",
                answer.value(),
                answer.label()
            )
        })
        .collect()
}

fn chart_options(selected: ChartStyle) -> String {
    ChartStyle::ordered()
        .into_iter()
        .map(|style| {
            let marker = if style == selected { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{marker}>{}</option>",
                encode_double_quoted_attribute(style.as_str()),
                encode_text(style.label())
            )
        })
        .collect()
}

pub(crate) fn results_page(questionnaire: &Questionnaire, report: &AssessmentReport) -> String {
    let riskiest = encode_text(report.riskiest_category);
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", encode_text(questionnaire.title()));
    body.push_str("<div class=\"results\">\n<h3>Risk Results Summary</h3>\n<ul>\n");

    for share in &report.category_breakdown {
        let _ = writeln!(
            body,
            "<li><strong>{}:</strong> {} ({})</li>",
            encode_text(share.category_label),
            share.score,
            share.percentage_label
        );
    }

    let _ = writeln!(
        body,
        "</ul>\n<p><strong>Riskiest Category:</strong> {riskiest}</p>"
    );
    body.push_str(&chart_markup(report));

    let _ = writeln!(
        body,
        "\n<div class=\"recommendations\">\n<h3>Recommended Actions for {riskiest}</h3>\n<ul>"
    );
    for recommendation in &report.recommendations {
        let _ = writeln!(body, "<li>{}</li>", encode_text(recommendation));
    }
    let _ = writeln!(
        body,
        "</ul>\n</div>\n<p><small>Assessed {}</small></p>\n</div>\n<a href=\"/\">Start a new assessment</a>",
        report.assessed_at.format("%Y-%m-%d %H:%M UTC")
    );

    layout(questionnaire.title(), &body)
}

fn chart_markup(report: &AssessmentReport) -> String {
    let content = &report.chart.content;
    match report.chart.style {
        // Chart.js config is JSON inside a script element, not HTML text.
        ChartStyle::ChartJs => format!(
            "<canvas id=\"risk-chart\" width=\"400\" height=\"400\"></canvas>\n\
             <script src=\"{CHART_JS_CDN}\"></script>\n\
             <script>new Chart(document.getElementById('risk-chart'), {config});</script>",
            config = encode_script(content),
        ),
        ChartStyle::Text => format!("<pre class=\"text-chart\">{}</pre>", encode_text(content)),
        ChartStyle::Bar | ChartStyle::Pie | ChartStyle::CompactPie => content.clone(),
    }
}
