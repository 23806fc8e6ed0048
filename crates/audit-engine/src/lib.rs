//! Runtime design-token compliance engine
//!
//! Inspects a live UI element tree against the style-token contract and
//! reports deviations. The engine is a lint, not a compiler: it matches
//! token usage by string/pattern shape, never restructures the tree, and
//! never fixes anything itself.
//!
//! # Features
//!
//! - **Pattern classification**: utility-class shapes, hardcoded colors and
//!   pixel values, non-token font declarations
//! - **Allow-list policy**: sanctioned names plus structural exceptions that
//!   suppress false positives
//! - **One-shot and live validation**: a full-tree pass, or mutation-driven
//!   re-validation with visual highlighting in dev mode
//! - **Reporting**: compliance score, letter grade, prioritized
//!   recommendations, CSV export, console summary
//!
//! The element tree stays owned by the host; see [`tree::ElementTree`].

pub mod allowlist;
pub mod config;
pub mod export;
pub mod monitor;
pub mod patterns;
pub mod report;
pub mod tree;
pub mod validator;

use tracing::info;

pub use config::{AuditConfig, AuditError};
pub use monitor::{TreeChange, MARKER_ATTRIBUTE, MARKER_CLASS, STYLESHEET_ID};
pub use report::ConsoleReporter;
pub use shared_types::{
    ComplianceReport, ElementId, Grade, Recommendation, ReportStatus, Severity, Violation,
    ViolationKind,
};
pub use tree::{ClassValue, ElementTree};

use monitor::DevModeMonitor;

/// Engine context: owns the violation log and the dev-mode monitor.
///
/// Callers construct and own as many independent auditors as they need (one
/// per test case, for instance); nothing is shared between them. The log is
/// cleared at the start of every full-tree pass and accumulates across
/// incremental live passes.
#[derive(Debug, Default)]
pub struct StyleAuditor {
    config: AuditConfig,
    violations: Vec<Violation>,
    monitor: DevModeMonitor,
}

impl StyleAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AuditConfig) -> Self {
        Self {
            config,
            violations: Vec::new(),
            monitor: DevModeMonitor::new(),
        }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Full-tree pass: resets the log, validates every element in document
    /// order, returns a fresh report
    pub fn validate_page<T: ElementTree>(&mut self, tree: &T) -> ComplianceReport {
        self.violations.clear();
        let elements = tree.elements();
        for element in &elements {
            let found = validator::validate_element(tree, *element, &self.config);
            self.violations.extend(found);
        }
        info!(
            elements = elements.len(),
            violations = self.violations.len(),
            "full-tree validation pass complete"
        );
        report::build_report(&self.violations, elements.len())
    }

    /// Single-element check. Appends to the log without resetting it;
    /// returns `None` when the caller only wants the log side effect.
    pub fn validate_element<T: ElementTree>(
        &mut self,
        tree: &T,
        element: ElementId,
        return_violations: bool,
    ) -> Option<Vec<Violation>> {
        let found = validator::validate_element(tree, element, &self.config);
        self.violations.extend(found.iter().cloned());
        if return_violations {
            Some(found)
        } else {
            None
        }
    }

    /// Recompute a report from the current log without re-scanning the tree
    pub fn generate_report<T: ElementTree>(&self, tree: &T) -> ComplianceReport {
        report::build_report(&self.violations, tree.elements().len())
    }

    pub fn export_violations_csv(&self) -> String {
        export::violations_to_csv(&self.violations)
    }

    /// Print a human-readable summary and return the same report
    pub fn log_report<T: ElementTree>(&self, tree: &T) -> ComplianceReport {
        let report = self.generate_report(tree);
        match ConsoleReporter::format(&report) {
            Ok(text) => println!("{}", text),
            Err(err) => tracing::warn!(error = %err, "could not format report"),
        }
        report
    }

    /// Start live monitoring: inject the diagnostic stylesheet and begin
    /// accepting change batches. Idempotent.
    pub fn enable_dev_mode<T: ElementTree>(&mut self, tree: &mut T) {
        self.monitor.enable(tree);
    }

    /// Stop live monitoring and strip every diagnostic marker. Idempotent.
    pub fn disable_dev_mode<T: ElementTree>(&mut self, tree: &mut T) {
        self.monitor.disable(tree);
    }

    pub fn is_dev_mode_enabled(&self) -> bool {
        self.monitor.is_enabled()
    }

    /// Host entry point for coalesced mutation batches. Re-validates the
    /// affected elements and toggles their markers; a no-op while dev mode
    /// is disabled.
    pub fn handle_changes<T: ElementTree>(&mut self, tree: &mut T, changes: &[TreeChange]) {
        if !self.monitor.is_enabled() {
            return;
        }
        for element in self.monitor.relevant_elements(changes) {
            let found = validator::validate_element(tree, element, &self.config);
            let notes: Vec<String> = found
                .iter()
                .map(|v| format!("{}: {}", v.kind, v.message))
                .collect();
            self.violations.extend(found);
            self.monitor.apply_marker(tree, element, &notes);
        }
    }

    /// The accumulated violation log, in detection order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violations_with_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }
}
