use std::fmt::Write;

use crate::domain::{EvaluationResult, FactsError, Field, NO_MATCH_MESSAGE};

use super::request::FormSubmission;

/// What to show under the form after a submission.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    Evaluated(EvaluationResult),
    Invalid(FactsError),
    /// The body could not be decoded as a form at all
    Unreadable(String),
}

struct InputSpec {
    field: Field,
    label: &'static str,
    step: &'static str,
}

const INPUTS: [InputSpec; 4] = [
    InputSpec {
        field: Field::Cgpa,
        label: "CGPA",
        step: "0.01",
    },
    InputSpec {
        field: Field::FamilyIncome,
        label: "Monthly Family Income (RM)",
        step: "1",
    },
    InputSpec {
        field: Field::CoCurricularScore,
        label: "Co-curricular Score (0-100)",
        step: "1",
    },
    InputSpec {
        field: Field::DisciplinaryActions,
        label: "Number of Disciplinary Actions",
        step: "1",
    },
];

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}input{width:100%;padding:.4rem}\
button{margin-top:1.5rem;padding:.6rem 1rem}\
.success{background:#e6f4ea;border:1px solid #34a853;padding:1rem;margin-top:1.5rem}\
.error{background:#fce8e6;border:1px solid #d93025;padding:1rem;margin-top:1.5rem}\
.caption{color:#5f6368;font-size:.85rem}";

/// Render the form page, pre-filled with `values`.
pub fn render_page(values: &FormSubmission, outcome: Option<&FormOutcome>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Scholarship Eligibility Advisor</title>\n");
    let _ = writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE);
    html.push_str("<h1>Scholarship Eligibility Advisor</h1>\n");
    html.push_str("<h2>Enter Applicant Details</h2>\n");
    html.push_str("<form method=\"post\" action=\"/evaluate\">\n");

    for input in &INPUTS {
        let name = input.field.as_str();
        let max = input
            .field
            .max()
            .map(|max| format!(" max=\"{}\"", max))
            .unwrap_or_default();
        let _ = writeln!(
            html,
            "<label for=\"{name}\">{label}</label>\n\
             <input id=\"{name}\" name=\"{name}\" type=\"number\" min=\"{min}\"{max} step=\"{step}\" value=\"{value}\" required>",
            name = name,
            label = input.label,
            min = input.field.min(),
            max = max,
            step = input.step,
            value = escape_html(values.raw(input.field)),
        );
    }

    html.push_str("<button type=\"submit\">Evaluate Scholarship Decision</button>\n</form>\n");

    if let Some(outcome) = outcome {
        render_outcome(&mut html, outcome);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_outcome(html: &mut String, outcome: &FormOutcome) {
    match outcome {
        FormOutcome::Evaluated(EvaluationResult::Matched {
            decision,
            reason,
            rule_name,
        }) => {
            let _ = writeln!(
                html,
                "<div class=\"success\">\n<strong>Decision: {}</strong>\n<p>Reason: {}</p>\n<p class=\"caption\">Rule Applied: {}</p>\n</div>",
                decision,
                escape_html(reason),
                escape_html(rule_name),
            );
        }
        FormOutcome::Evaluated(EvaluationResult::NoMatch) => {
            let _ = writeln!(html, "<div class=\"error\">{}</div>", NO_MATCH_MESSAGE);
        }
        FormOutcome::Invalid(err) => {
            let _ = writeln!(
                html,
                "<div class=\"error\">Invalid input: {}</div>",
                escape_html(&err.to_string())
            );
        }
        FormOutcome::Unreadable(message) => {
            let _ = writeln!(
                html,
                "<div class=\"error\">Could not read the submitted form: {}</div>",
                escape_html(message)
            );
        }
    }
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
