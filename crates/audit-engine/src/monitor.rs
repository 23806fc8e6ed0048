//! Live monitoring and diagnostic highlighting
//!
//! Dev mode re-validates elements as the host reports tree changes and
//! toggles visual markers on offenders. Every write the monitor makes is
//! confined to a reserved marker namespace and filtered back out of
//! incoming change batches, so highlighting never re-triggers validation.

use std::collections::HashSet;

use shared_types::ElementId;
use tracing::{debug, info};

use crate::patterns;
use crate::tree::ElementTree;

/// Marker class toggled on offending elements
pub const MARKER_CLASS: &str = "ds-audit-flag";

/// Tooltip attribute carrying the violation summary
pub const MARKER_ATTRIBUTE: &str = "data-ds-audit-note";

/// Id of the injected diagnostic stylesheet
pub const STYLESHEET_ID: &str = "ds-audit-style";

/// A host-observed tree change. Hosts coalesce their raw mutation
/// notifications into batches of these; the engine never polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChange {
    Inserted(ElementId),
    AttributeChanged { element: ElementId, attribute: String },
}

/// Lifecycle and marker bookkeeping for dev mode.
///
/// `disabled → enabled → disabled`, idempotent in both directions. Disabling
/// restores the tree to its pre-enable visual state no matter how many
/// elements were highlighted.
#[derive(Debug, Default)]
pub struct DevModeMonitor {
    enabled: bool,
    marked: HashSet<ElementId>,
    /// Our own (element, attribute) writes, pending their echo from the
    /// host's change feed
    self_mutations: HashSet<(ElementId, String)>,
}

impl DevModeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable<T: ElementTree>(&mut self, tree: &mut T) {
        if self.enabled {
            return;
        }
        tree.inject_stylesheet(STYLESHEET_ID, &diagnostic_stylesheet());
        self.enabled = true;
        info!("dev mode enabled; observing class and style mutations");
    }

    pub fn disable<T: ElementTree>(&mut self, tree: &mut T) {
        if !self.enabled {
            return;
        }
        let marked = self.marked.len();
        for element in self.marked.drain() {
            tree.remove_class(element, MARKER_CLASS);
            tree.remove_attribute(element, MARKER_ATTRIBUTE);
        }
        tree.remove_stylesheet(STYLESHEET_ID);
        self.self_mutations.clear();
        self.enabled = false;
        info!(stripped = marked, "dev mode disabled; diagnostic markers removed");
    }

    /// Reduce a change batch to the elements that need re-validation,
    /// dropping mutations the monitor caused itself and attributes it does
    /// not observe.
    pub fn relevant_elements(&mut self, changes: &[TreeChange]) -> Vec<ElementId> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for change in changes {
            let element = match change {
                TreeChange::Inserted(element) => *element,
                TreeChange::AttributeChanged { element, attribute } => {
                    if attribute == MARKER_ATTRIBUTE {
                        continue;
                    }
                    if self.self_mutations.remove(&(*element, attribute.clone())) {
                        debug!(element = element.0, attribute = %attribute, "ignoring own marker write");
                        continue;
                    }
                    if attribute != "class" && attribute != "style" {
                        continue;
                    }
                    *element
                }
            };
            if seen.insert(element) {
                out.push(element);
            }
        }

        out
    }

    /// Toggle the marker by violation presence, recording the writes so the
    /// echoed mutations can be filtered out of the next batch.
    pub fn apply_marker<T: ElementTree>(
        &mut self,
        tree: &mut T,
        element: ElementId,
        notes: &[String],
    ) {
        if notes.is_empty() {
            if self.marked.remove(&element) {
                tree.remove_class(element, MARKER_CLASS);
                tree.remove_attribute(element, MARKER_ATTRIBUTE);
                self.self_mutations.insert((element, "class".to_string()));
            }
        } else {
            tree.add_class(element, MARKER_CLASS);
            tree.set_attribute(element, MARKER_ATTRIBUTE, &notes.join(" | "));
            self.marked.insert(element);
            self.self_mutations.insert((element, "class".to_string()));
        }
    }
}

/// Build the injected CSS: utility-shaped class names are flagged by
/// selector (an approximation of the pattern library, since selectors
/// cannot consult the allow-list), and the marker class renders its tooltip
/// attribute as a label. Selectors exclude the marker class so the
/// stylesheet never matches its own flags.
fn diagnostic_stylesheet() -> String {
    let mut selectors = Vec::new();
    for prefix in patterns::UTILITY_CLASS_PREFIXES {
        selectors.push(format!("[class^=\"{}\"]:not(.{})", prefix, MARKER_CLASS));
        selectors.push(format!("[class*=\" {}\"]:not(.{})", prefix, MARKER_CLASS));
    }

    let mut css = selectors.join(",\n");
    css.push_str(" {\n  outline: 2px dashed #dc2626;\n  outline-offset: 1px;\n}\n");
    css.push_str(&format!(
        ".{} {{\n  position: relative;\n  outline: 2px solid #dc2626;\n}}\n",
        MARKER_CLASS
    ));
    css.push_str(&format!(
        ".{}::after {{\n  content: attr({});\n  position: absolute;\n  top: 100%;\n  left: 0;\n  z-index: 9999;\n  background: #7f1d1d;\n  color: #fff;\n  font: 11px/1.4 monospace;\n  padding: 2px 6px;\n  white-space: pre;\n}}\n",
        MARKER_CLASS, MARKER_ATTRIBUTE
    ));
    css
}
