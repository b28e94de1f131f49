// Report rendering for audit summaries

use crate::audit::AuditSummary;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const CLEAN_MESSAGE: &str = "No broken internal links found.";
pub const BROKEN_HEADER: &str = "Broken internal links found:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Render a summary in the requested format. Text output always ends with a
/// newline; JSON is pretty-printed.
pub fn render_report(summary: &AuditSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary)),
        ReportFormat::Json => render_json(summary),
    }
}

fn render_text(summary: &AuditSummary) -> String {
    if summary.findings.is_empty() {
        return format!("{}\n", CLEAN_MESSAGE);
    }

    let mut report = String::new();
    report.push_str(BROKEN_HEADER);
    report.push('\n');
    for finding in &summary.findings {
        report.push_str(&finding.message);
        report.push('\n');
    }
    report
}

fn render_json(summary: &AuditSummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
