//! Live-monitor lifecycle and highlighting tests

mod common;

use audit_engine::{
    StyleAuditor, TreeChange, MARKER_ATTRIBUTE, MARKER_CLASS, STYLESHEET_ID,
};
use common::{MemoryElement, MemoryTree};
use pretty_assertions::assert_eq;

#[test]
fn test_enable_injects_stylesheet_and_is_idempotent() {
    common::init_tracing();
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();

    auditor.enable_dev_mode(&mut tree);
    assert!(auditor.is_dev_mode_enabled());
    assert!(tree.stylesheets.contains_key(STYLESHEET_ID));

    auditor.enable_dev_mode(&mut tree);
    assert_eq!(tree.stylesheets.len(), 1);
}

#[test]
fn test_disable_without_enable_is_a_noop() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();

    auditor.disable_dev_mode(&mut tree);

    assert!(!auditor.is_dev_mode_enabled());
    assert!(tree.stylesheets.is_empty());
}

#[test]
fn test_inserted_offender_gets_marker_and_tooltip() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let offender = tree.insert(MemoryElement::new("div").classes("p-4"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(offender)]);

    assert!(tree.has_class(offender, MARKER_CLASS));
    let note = tree.attribute(offender, MARKER_ATTRIBUTE).unwrap();
    assert!(!note.is_empty());
    assert!(note.contains("non-design-system-class"));
}

#[test]
fn test_compliant_insertion_gets_no_marker() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let element = tree.insert(MemoryElement::new("div").classes("card"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(element)]);

    assert!(!tree.has_class(element, MARKER_CLASS));
    assert!(tree.attribute(element, MARKER_ATTRIBUTE).is_none());
}

#[test]
fn test_marker_clears_when_element_becomes_compliant() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let element = tree.insert(MemoryElement::new("div").classes("p-4"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(element)]);
    assert!(tree.has_class(element, MARKER_CLASS));

    // The host echoes the marker write first, as a mutation feed would
    auditor.handle_changes(
        &mut tree,
        &[TreeChange::AttributeChanged {
            element,
            attribute: "class".to_string(),
        }],
    );

    // The page fixes the class; the host reports the attribute change
    tree.set_classes(element, "ds-pad-md");
    auditor.handle_changes(
        &mut tree,
        &[TreeChange::AttributeChanged {
            element,
            attribute: "class".to_string(),
        }],
    );

    assert!(!tree.has_class(element, MARKER_CLASS));
    assert!(tree.attribute(element, MARKER_ATTRIBUTE).is_none());
}

#[test]
fn test_own_marker_writes_do_not_retrigger_validation() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let offender = tree.insert(MemoryElement::new("div").classes("p-4"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(offender)]);
    let log_len = auditor.violations().len();

    // The host echoes the monitor's own marker writes back as changes
    auditor.handle_changes(
        &mut tree,
        &[
            TreeChange::AttributeChanged {
                element: offender,
                attribute: "class".to_string(),
            },
            TreeChange::AttributeChanged {
                element: offender,
                attribute: MARKER_ATTRIBUTE.to_string(),
            },
        ],
    );

    assert_eq!(auditor.violations().len(), log_len);
}

#[test]
fn test_disable_strips_all_markers() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let first = tree.insert(MemoryElement::new("div").classes("p-4"));
    let second = tree.insert(MemoryElement::new("span").classes("bg-red-500"));
    let clean = tree.insert(MemoryElement::new("p").classes("card"));
    auditor.handle_changes(
        &mut tree,
        &[
            TreeChange::Inserted(first),
            TreeChange::Inserted(second),
            TreeChange::Inserted(clean),
        ],
    );
    assert!(tree.has_class(first, MARKER_CLASS));
    assert!(tree.has_class(second, MARKER_CLASS));

    auditor.disable_dev_mode(&mut tree);

    assert!(!auditor.is_dev_mode_enabled());
    assert!(tree.stylesheets.is_empty());
    for element in [first, second, clean] {
        assert!(!tree.has_class(element, MARKER_CLASS));
        assert!(tree.attribute(element, MARKER_ATTRIBUTE).is_none());
    }
}

#[test]
fn test_changes_are_ignored_while_disabled() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();

    let offender = tree.insert(MemoryElement::new("div").classes("p-4"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(offender)]);

    assert!(auditor.violations().is_empty());
    assert!(!tree.has_class(offender, MARKER_CLASS));
}

#[test]
fn test_live_session_accumulates_into_the_log() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    tree.insert(MemoryElement::new("div").classes("card"));

    let report = auditor.validate_page(&tree);
    assert_eq!(report.violation_count, 0);

    auditor.enable_dev_mode(&mut tree);
    let offender = tree.insert(MemoryElement::new("div").classes("p-4"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(offender)]);

    // Incremental passes append without clearing the one-shot results
    assert_eq!(auditor.violations().len(), 1);
    let csv = auditor.export_violations_csv();
    assert_eq!(csv.lines().count() - 1, 1);
}

#[test]
fn test_style_mutation_is_revalidated() {
    let mut auditor = StyleAuditor::new();
    let mut tree = MemoryTree::new();
    auditor.enable_dev_mode(&mut tree);

    let element = tree.insert(MemoryElement::new("div").classes("card"));
    auditor.handle_changes(&mut tree, &[TreeChange::Inserted(element)]);
    assert!(!tree.has_class(element, MARKER_CLASS));

    tree.elements[element.0 as usize].style = Some("color: #ff0000".to_string());
    auditor.handle_changes(
        &mut tree,
        &[TreeChange::AttributeChanged {
            element,
            attribute: "style".to_string(),
        }],
    );

    assert!(tree.has_class(element, MARKER_CLASS));
    let note = tree.attribute(element, MARKER_ATTRIBUTE).unwrap();
    assert!(note.contains("hardcoded-color"));
}
