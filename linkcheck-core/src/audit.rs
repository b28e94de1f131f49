use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use linkcheck_scanner::{Finding, LinkAuditor, ScanResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Options for configuring an audit run
pub struct AuditOptions {
    pub directory: PathBuf,
    pub show_progress: bool,
}

impl AuditOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Callback for reporting which document is being audited
pub type AuditProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Outcome of auditing one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub directory: PathBuf,
    pub documents_scanned: usize,
    pub links_checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditSummary {
    pub fn from_scan(directory: PathBuf, scan: ScanResult) -> Self {
        Self {
            directory,
            documents_scanned: scan.documents_scanned,
            links_checked: scan.links_checked,
            findings: scan.findings,
        }
    }

    pub fn has_broken_links(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Execute an audit with the given options
pub fn execute_audit(
    options: AuditOptions,
    progress_callback: Option<AuditProgressCallback>,
) -> Result<AuditSummary> {
    let AuditOptions {
        directory,
        show_progress,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.set_message("Listing documents...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let processed_count = Arc::new(AtomicUsize::new(0));

    let pb_clone = progress_bar.clone();
    let count_clone = processed_count.clone();
    let auditor = LinkAuditor::new().with_progress_callback(Arc::new(
        move |_index: usize, filename: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref pb) = pb_clone {
                pb.set_message(format!("Checking {} ({} documents)", filename, count));
                pb.tick();
            }
            if let Some(ref callback) = progress_callback {
                callback(filename);
            }
        },
    ));

    let outcome = auditor
        .audit(&directory)
        .with_context(|| format!("Link audit of {} failed", directory.display()));

    // Clear the spinner before any error reaches the terminal
    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    let scan = outcome?;
    debug!(
        "Processed {} documents",
        processed_count.load(Ordering::Relaxed)
    );

    Ok(AuditSummary::from_scan(directory, scan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[test]
    fn test_options_default_to_no_progress() {
        let options = AuditOptions::new("html");
        assert_eq!(options.directory, PathBuf::from("html"));
        assert!(!options.show_progress);
        assert!(options.with_progress(true).show_progress);
    }

    #[test]
    fn test_execute_audit_forwards_progress() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), r#"<a href="x.html">x</a>"#).unwrap();

        let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let messages_clone = messages.clone();
        let callback: AuditProgressCallback = Arc::new(move |msg: String| {
            messages_clone.lock().unwrap().push(msg);
        });

        let summary = execute_audit(AuditOptions::new(dir.path()), Some(callback)).unwrap();

        assert_eq!(summary.documents_scanned, 1);
        assert_eq!(summary.links_checked, 1);
        assert!(summary.has_broken_links());
        assert_eq!(*messages.lock().unwrap(), vec!["index.html".to_string()]);
    }

    #[test]
    fn test_execute_audit_missing_directory_has_context() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = execute_audit(AuditOptions::new(&missing), None).unwrap_err();
        assert!(err.to_string().starts_with("Link audit of"));
        assert!(format!("{:#}", err).contains("Failed to list directory"));
    }
}
