use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque handle to an element in the host-owned UI tree.
///
/// The engine never takes ownership of elements; it refers back into the
/// caller's tree by document-order index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ElementId(pub u32);

/// Classification of a detected deviation from the token system
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    NonDesignSystemClass,
    HardcodedColor,
    HardcodedSpacing,
    NonDesignSystemFont,
    ComputedFontViolation,
}

impl ViolationKind {
    /// All kinds, in the fixed order used for report summaries and
    /// recommendations
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::NonDesignSystemClass,
        ViolationKind::HardcodedColor,
        ViolationKind::HardcodedSpacing,
        ViolationKind::NonDesignSystemFont,
        ViolationKind::ComputedFontViolation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::NonDesignSystemClass => "non-design-system-class",
            ViolationKind::HardcodedColor => "hardcoded-color",
            ViolationKind::HardcodedSpacing => "hardcoded-spacing",
            ViolationKind::NonDesignSystemFont => "non-design-system-font",
            ViolationKind::ComputedFontViolation => "computed-font-violation",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Remediation priority. Ordering drives report sorting only; severity never
/// gates pass/fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single detected deviation from the token system.
///
/// Immutable once created; validation passes only ever append new records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub element: ElementId,
    /// Tag name of the offending element, captured for display and export
    pub element_tag: String,
    /// The exact text that triggered the match (class token, literal value,
    /// or resolved font stack)
    pub matched_text: String,
    pub message: String,
    pub severity: Severity,
    pub suggested_fix: String,
}

/// Letter grade on the fixed score ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            95..=u32::MAX => Grade::APlus,
            90..=94 => Grade::A,
            85..=89 => Grade::BPlus,
            80..=84 => Grade::B,
            75..=79 => Grade::CPlus,
            70..=74 => Grade::C,
            65..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Passing,
    Failing,
}

impl ReportStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            ReportStatus::Passing
        } else {
            ReportStatus::Failing
        }
    }
}

/// Remediation guidance derived from which violation kinds are present.
/// Recomputed on every report, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Severity,
    pub action: String,
    pub impact: String,
}

/// Snapshot report over a violation log plus a tree element count.
///
/// Holds no independent state; safe to discard and regenerate at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub generated_at: DateTime<Utc>,
    /// Percentage of elements with zero violations, rounded; 100 on an
    /// empty tree
    pub score: u32,
    pub grade: Grade,
    pub status: ReportStatus,
    pub total_elements: usize,
    pub violation_count: usize,
    pub violations_by_kind: BTreeMap<ViolationKind, usize>,
    pub violations_by_severity: BTreeMap<Severity, usize>,
    pub violations: Vec<Violation>,
    pub recommendations: Vec<Recommendation>,
}

impl ComplianceReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
