//! Allow-list policy: sanctioned class names plus structural exceptions
//! that keep pattern matches from becoming false-positive violations.
//!
//! Precedence is fixed: the exact list is consulted first and a hit ends the
//! check; only then do the structural predicates run.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::patterns;

/// Class names sanctioned outright: shipped components, utilities in the
/// `ds-` token namespace, and legacy names still permitted while the
/// migration backlog clears.
pub const SANCTIONED_CLASSES: &[&str] = &[
    // Components
    "btn",
    "btn-primary",
    "btn-secondary",
    "btn-ghost",
    "btn-danger",
    "card",
    "card-header",
    "card-body",
    "card-footer",
    "form-group",
    "form-label",
    "form-control",
    "input-group",
    "alert",
    "alert-info",
    "alert-warning",
    "alert-error",
    "avatar",
    "avatar-sm",
    "avatar-lg",
    "modal",
    "modal-backdrop",
    "modal-dialog",
    "dropdown",
    "dropdown-menu",
    "dropdown-item",
    "nav",
    "nav-item",
    "nav-link",
    "header",
    "footer",
    // Token-namespace utilities
    "ds-stack",
    "ds-stack-sm",
    "ds-stack-lg",
    "ds-cluster",
    "ds-row",
    "ds-grid",
    "ds-pad-sm",
    "ds-pad-md",
    "ds-pad-lg",
    "ds-gap-sm",
    "ds-gap-md",
    // Legacy, permitted
    "container",
    "row",
    "col",
    "clearfix",
];

/// Component-family prefixes exempt from utility-pattern matches
const COMPONENT_PREFIXES: &[&str] = &[
    "btn-", "button-", "card-", "form-", "input-", "alert-", "avatar-", "modal-", "dropdown-",
    "nav-", "header-", "footer-",
];

/// JS-hook and testing naming conventions
const HOOK_PREFIXES: &[&str] = &["js-", "test-", "qa-"];

/// Accessibility helper classes
const A11Y_CLASSES: &[&str] = &["sr-only", "visually-hidden", "skip-link"];

lazy_static! {
    static ref SANCTIONED: HashSet<&'static str> = SANCTIONED_CLASSES.iter().copied().collect();

    /// Generic two-segment kebab-case shape (`word-word`)
    static ref KEBAB_PAIR: Regex = Regex::new(r"^[a-z]+-[a-z]+$").unwrap();
}

/// Exact allow-list check. A hit always suppresses the violation.
pub fn is_sanctioned(class: &str) -> bool {
    SANCTIONED.contains(class)
}

/// Structural exception predicate, consulted after the exact list.
///
/// The kebab-case arm is deliberately narrower than a plain shape test: a
/// name that is itself a utility shape (`items-center`) cannot escape
/// through it, only component-specific identifiers (`hero-banner`) can.
pub fn is_structurally_exempt(class: &str) -> bool {
    if COMPONENT_PREFIXES.iter().any(|p| class.starts_with(p)) {
        return true;
    }
    if HOOK_PREFIXES.iter().any(|p| class.starts_with(p)) || A11Y_CLASSES.contains(&class) {
        return true;
    }
    KEBAB_PAIR.is_match(class) && !patterns::is_utility_class(class)
}

/// Combined policy: exact list first, then structural exceptions
pub fn is_allowed(class: &str) -> bool {
    is_sanctioned(class) || is_structurally_exempt(class)
}
