//! Single-element validation
//!
//! Each check runs independently even when an earlier one fires. Absence of
//! a class attribute, inline style text, or a computed-style resolver means
//! there is nothing to check, never a failure.

use shared_types::{ElementId, Severity, Violation, ViolationKind};
use tracing::debug;

use crate::allowlist;
use crate::config::AuditConfig;
use crate::patterns;
use crate::tree::{ClassValue, ElementTree};

/// Literal replacements for the most common utility classes
const CLASS_FIX_TABLE: &[(&str, &str)] = &[
    ("flex", "ds-row"),
    ("grid", "ds-grid"),
    ("items-center", "ds-cluster"),
    ("justify-between", "ds-cluster"),
    ("p-2", "ds-pad-sm"),
    ("p-4", "ds-pad-md"),
    ("p-6", "ds-pad-lg"),
    ("px-4", "ds-pad-md"),
    ("py-2", "ds-pad-sm"),
    ("m-4", "ds-gap-md"),
    ("mt-2", "ds-stack-sm"),
    ("mt-4", "ds-stack"),
    ("mb-4", "ds-stack"),
    ("gap-2", "ds-gap-sm"),
    ("gap-4", "ds-gap-md"),
    ("bg-red-500", "ds-bg-danger"),
    ("bg-blue-500", "ds-bg-accent"),
    ("text-gray-500", "ds-text-muted"),
];

fn suggested_class_fix(token: &str, config: &AuditConfig) -> String {
    match CLASS_FIX_TABLE.iter().find(|(from, _)| *from == token) {
        Some((_, replacement)) => format!("Replace with `{}`", replacement),
        None => format!(
            "Use the token-system equivalent from the `{}` namespace",
            config.token_prefix
        ),
    }
}

/// Run every check against one element and return its violations.
///
/// The caller owns the log; this function is pure with respect to the
/// engine context.
pub fn validate_element<T: ElementTree>(
    tree: &T,
    element: ElementId,
    config: &AuditConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let tag = tree.tag_name(element);

    check_class_tokens(tree, element, &tag, config, &mut violations);
    check_inline_style(tree, element, &tag, &mut violations);
    check_computed_font(tree, element, &tag, config, &mut violations);

    if !violations.is_empty() {
        debug!(
            element = element.0,
            tag = %tag,
            count = violations.len(),
            "element deviates from token contract"
        );
    }
    violations
}

/// Class check: split into tokens, match utility shapes, consult the
/// allow-list. A missing or non-string class attribute skips this check
/// only.
fn check_class_tokens<T: ElementTree>(
    tree: &T,
    element: ElementId,
    tag: &str,
    config: &AuditConfig,
    violations: &mut Vec<Violation>,
) {
    let classes = match tree.class_value(element) {
        Some(ClassValue::Text(text)) => text,
        _ => return,
    };

    for token in classes.split_whitespace() {
        if patterns::is_utility_class(token) && !allowlist::is_allowed(token) {
            violations.push(Violation {
                kind: ViolationKind::NonDesignSystemClass,
                element,
                element_tag: tag.to_string(),
                matched_text: token.to_string(),
                message: format!("Class `{}` bypasses the design-system utilities", token),
                severity: Severity::High,
                suggested_fix: suggested_class_fix(token, config),
            });
        }
    }
}

/// Inline-style check: every rule in the table fires independently
fn check_inline_style<T: ElementTree>(
    tree: &T,
    element: ElementId,
    tag: &str,
    violations: &mut Vec<Violation>,
) {
    let style = match tree.inline_style(element) {
        Some(style) => style,
        None => return,
    };

    for rule in patterns::style_rules() {
        if let Some(matched) = (rule.matched)(&style) {
            violations.push(Violation {
                kind: rule.kind,
                element,
                element_tag: tag.to_string(),
                matched_text: matched,
                message: rule.message.to_string(),
                severity: rule.severity,
                suggested_fix: rule.suggested_fix.to_string(),
            });
        }
    }
}

/// Computed-font check: skipped entirely when the host has no resolver for
/// this element
fn check_computed_font<T: ElementTree>(
    tree: &T,
    element: ElementId,
    tag: &str,
    config: &AuditConfig,
    violations: &mut Vec<Violation>,
) {
    let family = match tree.computed_font_family(element) {
        Some(family) => family,
        None => return,
    };

    if !config.font_is_approved(&family) {
        violations.push(Violation {
            kind: ViolationKind::ComputedFontViolation,
            element,
            element_tag: tag.to_string(),
            message: format!("Resolved font stack `{}` contains no approved family", family),
            matched_text: family,
            severity: Severity::High,
            suggested_fix: "Inherit the brand font stack (var(--ds-font-body))".to_string(),
        });
    }
}
