//! Report generation: compliance scoring, grading, and remediation guidance
//!
//! A report is derived entirely from a violation log plus an element count;
//! it carries no state of its own and can be regenerated at any time.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Result;
use chrono::Utc;
use shared_types::{
    ComplianceReport, Grade, Recommendation, ReportStatus, Severity, Violation, ViolationKind,
};

/// `round(max(0, (total - violations) / total * 100))`; an empty tree is
/// vacuously compliant
pub fn compliance_score(total_elements: usize, violation_count: usize) -> u32 {
    if total_elements == 0 {
        return 100;
    }
    let ratio = (total_elements as f64 - violation_count as f64) / total_elements as f64;
    (ratio * 100.0).max(0.0).round() as u32
}

/// Assemble a full report from the current log and element count
pub fn build_report(violations: &[Violation], total_elements: usize) -> ComplianceReport {
    let violation_count = violations.len();
    let score = compliance_score(total_elements, violation_count);

    let mut violations_by_kind: BTreeMap<ViolationKind, usize> = BTreeMap::new();
    let mut violations_by_severity: BTreeMap<Severity, usize> = BTreeMap::new();
    for violation in violations {
        *violations_by_kind.entry(violation.kind).or_insert(0) += 1;
        *violations_by_severity.entry(violation.severity).or_insert(0) += 1;
    }

    ComplianceReport {
        generated_at: Utc::now(),
        score,
        grade: Grade::from_score(score),
        status: ReportStatus::from_score(score),
        total_elements,
        violation_count,
        violations_by_kind,
        violations_by_severity,
        violations: violations.to_vec(),
        recommendations: recommendations_for(violations),
    }
}

/// One recommendation per kind present in the log, in fixed kind order
fn recommendations_for(violations: &[Violation]) -> Vec<Recommendation> {
    ViolationKind::ALL
        .iter()
        .filter(|kind| violations.iter().any(|v| v.kind == **kind))
        .map(|kind| recommendation_for(*kind))
        .collect()
}

fn recommendation_for(kind: ViolationKind) -> Recommendation {
    let (priority, action, impact) = match kind {
        ViolationKind::NonDesignSystemClass => (
            Severity::High,
            "Replace raw utility classes with ds- component and token classes",
            "Layout and color changes keep flowing from the token stylesheet",
        ),
        ViolationKind::HardcodedColor => (
            Severity::High,
            "Move literal colors into color tokens (var(--ds-color-*))",
            "Palette changes propagate without hunting hex values",
        ),
        ViolationKind::HardcodedSpacing => (
            Severity::Medium,
            "Replace pixel values with spacing tokens (var(--ds-space-*))",
            "Spacing rhythm stays consistent across breakpoints",
        ),
        ViolationKind::NonDesignSystemFont => (
            Severity::High,
            "Declare fonts through the typography tokens",
            "Typeface swaps stay a one-line stylesheet change",
        ),
        ViolationKind::ComputedFontViolation => (
            Severity::High,
            "Audit inherited font-family overrides",
            "Every element renders in a brand or icon face",
        ),
    };
    Recommendation {
        priority,
        action: action.to_string(),
        impact: impact.to_string(),
    }
}

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a report for console output
    pub fn format(report: &ComplianceReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════╗")?;
        writeln!(output, "║          TOKEN COMPLIANCE REPORT             ║")?;
        writeln!(output, "╚══════════════════════════════════════════════╝")?;
        writeln!(output)?;
        writeln!(output, "Generated:  {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(output, "Elements:   {}", report.total_elements)?;
        writeln!(output, "Violations: {}", report.violation_count)?;
        writeln!(output, "Score:      {}/100 ({})", report.score, report.grade)?;
        let status = match report.status {
            ReportStatus::Passing => "✓ PASSING",
            ReportStatus::Failing => "✗ FAILING",
        };
        writeln!(output, "Status:     {}", status)?;

        if !report.violations_by_kind.is_empty() {
            writeln!(output)?;
            writeln!(output, "By kind:")?;
            for (kind, count) in &report.violations_by_kind {
                writeln!(output, "  {:<28} {}", kind.label(), count)?;
            }
        }

        if !report.violations_by_severity.is_empty() {
            writeln!(output)?;
            writeln!(output, "By severity:")?;
            for (severity, count) in &report.violations_by_severity {
                writeln!(output, "  {:<28} {}", severity.label(), count)?;
            }
        }

        if !report.recommendations.is_empty() {
            writeln!(output)?;
            writeln!(output, "Recommendations:")?;
            for rec in &report.recommendations {
                writeln!(output, "  • [{}] {}", rec.priority, rec.action)?;
                writeln!(output, "    {}", rec.impact)?;
            }
        }

        writeln!(output)?;
        Ok(output)
    }
}
