//! Host-tree abstraction
//!
//! The engine inspects a live element tree owned by the surrounding UI
//! layer. Everything it reads from that tree, and every diagnostic marker it
//! writes back, goes through this trait so the validation logic runs the
//! same against a real DOM bridge or an in-memory fixture.

use shared_types::ElementId;

/// Raw value of a class attribute.
///
/// Some hosts hand back non-string class values (SVG elements animate
/// theirs). Those are opaque to class checks and skipped; every other check
/// still runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    Text(String),
    Opaque,
}

/// Read/write access to the caller-owned element tree.
///
/// The engine never holds on to elements between calls; `ElementId` handles
/// are only dereferenced through the tree that issued them.
pub trait ElementTree {
    /// Every element currently in the tree, in document order.
    fn elements(&self) -> Vec<ElementId>;

    /// Tag name for display and export.
    fn tag_name(&self, element: ElementId) -> String;

    /// The raw class attribute, `None` when absent.
    fn class_value(&self, element: ElementId) -> Option<ClassValue>;

    /// Raw inline style text, `None` when absent.
    fn inline_style(&self, element: ElementId) -> Option<String>;

    /// Effective font-family as resolved by the host's computed-style
    /// system. `None` when the host exposes no resolver for this element;
    /// the computed-font check is then skipped.
    fn computed_font_family(&self, element: ElementId) -> Option<String>;

    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);
    fn remove_attribute(&mut self, element: ElementId, name: &str);

    /// Install a stylesheet under the given id, replacing any previous one
    /// with the same id.
    fn inject_stylesheet(&mut self, id: &str, css: &str);
    fn remove_stylesheet(&mut self, id: &str);
}
