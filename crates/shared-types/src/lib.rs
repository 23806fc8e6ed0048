pub mod types;

pub use types::{
    ComplianceReport, ElementId, Grade, Recommendation, ReportStatus, Severity, Violation,
    ViolationKind,
};
