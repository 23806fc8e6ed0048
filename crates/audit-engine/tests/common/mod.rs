//! Shared in-memory tree fixture for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;

use audit_engine::{ClassValue, ElementId, ElementTree};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    pub tag: String,
    pub class: Option<ClassValue>,
    pub style: Option<String>,
    pub computed_font: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn classes(mut self, classes: &str) -> Self {
        self.class = Some(ClassValue::Text(classes.to_string()));
        self
    }

    /// A class attribute that is not a plain string (SVG-style)
    pub fn opaque_class(mut self) -> Self {
        self.class = Some(ClassValue::Opaque);
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn font(mut self, family: &str) -> Self {
        self.computed_font = Some(family.to_string());
        self
    }
}

/// Minimal document-order element tree, standing in for the host page
#[derive(Debug, Default)]
pub struct MemoryTree {
    pub elements: Vec<MemoryElement>,
    pub stylesheets: BTreeMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: MemoryElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() as u32 - 1)
    }

    pub fn element(&self, id: ElementId) -> &MemoryElement {
        &self.elements[id.0 as usize]
    }

    pub fn set_classes(&mut self, id: ElementId, classes: &str) {
        self.elements[id.0 as usize].class = Some(ClassValue::Text(classes.to_string()));
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        match &self.element(id).class {
            Some(ClassValue::Text(text)) => text.split_whitespace().any(|t| t == class),
            _ => false,
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).attributes.get(name).map(|s| s.as_str())
    }
}

impl ElementTree for MemoryTree {
    fn elements(&self) -> Vec<ElementId> {
        (0..self.elements.len() as u32).map(ElementId).collect()
    }

    fn tag_name(&self, element: ElementId) -> String {
        self.element(element).tag.clone()
    }

    fn class_value(&self, element: ElementId) -> Option<ClassValue> {
        self.element(element).class.clone()
    }

    fn inline_style(&self, element: ElementId) -> Option<String> {
        self.element(element).style.clone()
    }

    fn computed_font_family(&self, element: ElementId) -> Option<String> {
        self.element(element).computed_font.clone()
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        let entry = &mut self.elements[element.0 as usize];
        let current = match &entry.class {
            Some(ClassValue::Text(text)) => text.clone(),
            _ => String::new(),
        };
        if !current.split_whitespace().any(|t| t == class) {
            let joined = if current.is_empty() {
                class.to_string()
            } else {
                format!("{} {}", current, class)
            };
            entry.class = Some(ClassValue::Text(joined));
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        let entry = &mut self.elements[element.0 as usize];
        if let Some(ClassValue::Text(text)) = &entry.class {
            let remaining: Vec<&str> = text.split_whitespace().filter(|t| *t != class).collect();
            entry.class = Some(ClassValue::Text(remaining.join(" ")));
        }
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        self.elements[element.0 as usize]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) {
        self.elements[element.0 as usize].attributes.remove(name);
    }

    fn inject_stylesheet(&mut self, id: &str, css: &str) {
        self.stylesheets.insert(id.to_string(), css.to_string());
    }

    fn remove_stylesheet(&mut self, id: &str) {
        self.stylesheets.remove(id);
    }
}
