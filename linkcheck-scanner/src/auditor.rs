use crate::error::{AuditError, Result};
use crate::link::{LinkKind, resolve_link};
use crate::result::{Finding, LinkReference, ScanResult};
use scraper::{Html, Selector};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

const DOCUMENT_SUFFIX: &str = ".html";

/// Check every `.html` file directly inside `directory` for internal links
/// that point at missing files.
pub fn find_broken_links(directory: impl AsRef<Path>) -> Result<Vec<Finding>> {
    LinkAuditor::new()
        .audit(directory)
        .map(|result| result.findings)
}

pub struct LinkAuditor {
    progress_callback: Option<ProgressCallback>,
}

impl LinkAuditor {
    pub fn new() -> Self {
        Self {
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Single pass over the directory listing. Findings come back in listing
    /// order, and in document order within each file.
    pub fn audit(&self, directory: impl AsRef<Path>) -> Result<ScanResult> {
        let directory = directory.as_ref();
        info!("Auditing links in {}", directory.display());

        let documents = Self::list_documents(directory)?;
        let mut result = ScanResult::default();

        for (index, name) in documents.into_iter().enumerate() {
            // Non UTF-8 names are read by their real name, reported lossily
            let filename = name.to_string_lossy().into_owned();
            if let Some(ref callback) = self.progress_callback {
                callback(index, filename.clone());
            }

            let path = directory.join(&name);
            let html = fs::read_to_string(&path).map_err(|source| AuditError::ReadDocument {
                path: path.clone(),
                source,
            })?;

            let links = Self::extract_links(&filename, &html, directory);
            debug!("{}: {} internal links", filename, links.len());

            result.documents_scanned += 1;
            result.links_checked += links.len();

            for link in links {
                if !link.resolved.exists() {
                    debug!("  -> Broken: {} ({})", link.href, link.resolved.display());
                    result.findings.push(Finding::from(link));
                }
            }
        }

        info!(
            "Audit complete. {} documents, {} internal links, {} broken",
            result.documents_scanned,
            result.links_checked,
            result.findings.len()
        );
        Ok(result)
    }

    /// Names of the `.html` entries directly inside `directory`, in the order
    /// the OS lists them. Subdirectories are not descended into.
    pub fn list_documents(directory: &Path) -> Result<Vec<OsString>> {
        let list_error = |source: std::io::Error| AuditError::ListDirectory {
            path: directory.to_path_buf(),
            source,
        };

        let mut documents = Vec::new();
        for entry in fs::read_dir(directory).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;

            let name = entry.file_name();
            if !name
                .as_encoded_bytes()
                .ends_with(DOCUMENT_SUFFIX.as_bytes())
            {
                continue;
            }
            // A directory named `*.html` is skipped here rather than failing
            // later when it is read as a document.
            if entry.file_type().map_err(list_error)?.is_dir() {
                warn!(
                    "Skipping directory {} (named like a document)",
                    entry.path().display()
                );
                continue;
            }

            documents.push(name);
        }

        Ok(documents)
    }

    /// Parse `html` leniently and return its internal links resolved against
    /// `directory`. External, fragment and empty hrefs are dropped.
    pub fn extract_links(source: &str, html: &str, directory: &Path) -> Vec<LinkReference> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for element in document.select(&ANCHOR_SELECTOR) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let kind = LinkKind::classify(href);
            if !kind.is_internal() {
                debug!("Skipping {:?} link '{}' in {}", kind, href, source);
                continue;
            }

            links.push(LinkReference::new(
                source.to_string(),
                href.to_string(),
                resolve_link(directory, href),
            ));
        }

        links
    }
}

impl Default for LinkAuditor {
    fn default() -> Self {
        Self::new()
    }
}
