pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{exit_code, expand_directory, handle_check, init_logging, parse_format};

// Re-export audit functionality from linkcheck-core
pub use linkcheck_core::{AuditOptions, AuditSummary, ReportFormat, execute_audit, render_report};
