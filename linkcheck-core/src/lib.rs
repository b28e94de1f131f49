pub mod audit;
pub mod report;

pub use audit::{AuditOptions, AuditProgressCallback, AuditSummary, execute_audit};
pub use report::{ReportFormat, render_report};
