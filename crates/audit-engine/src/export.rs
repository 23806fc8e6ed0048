//! CSV export of the violation log
//!
//! Deterministic tabular serialization: one header row, then one quoted row
//! per violation in log order. Callable after a one-shot pass or in the
//! middle of a live session.

use shared_types::Violation;

const HEADER: &str = "Type,Severity,Element,Violation,Message,Fix";

pub fn violations_to_csv(violations: &[Violation]) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');

    for violation in violations {
        let fields = [
            violation.kind.label(),
            violation.severity.label(),
            violation.element_tag.as_str(),
            violation.matched_text.as_str(),
            violation.message.as_str(),
            violation.suggested_fix.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|field| quote(field)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

/// Double-quote a field, escaping embedded quotes by doubling them
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
