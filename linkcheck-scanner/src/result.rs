use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single `<a href>` pulled out of a scanned document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    /// Filename of the document the anchor was found in
    pub source: String,
    /// The href exactly as written in the markup
    pub href: String,
    /// Scan directory joined with the href, with `.`/`..` collapsed
    pub resolved: PathBuf,
}

impl LinkReference {
    pub fn new(source: String, href: String, resolved: PathBuf) -> Self {
        Self {
            source,
            href,
            resolved,
        }
    }
}

/// An internal link whose resolved path does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub source: String,
    pub href: String,
    pub resolved: PathBuf,
    pub message: String,
}

impl Finding {
    pub fn new(source: String, href: String, resolved: PathBuf) -> Self {
        let message = format!(
            "In {}: Link to '{}' (resolved as '{}') is broken.",
            source,
            href,
            resolved.display()
        );
        Self {
            source,
            href,
            resolved,
            message,
        }
    }
}

impl From<LinkReference> for Finding {
    fn from(link: LinkReference) -> Self {
        Finding::new(link.source, link.href, link.resolved)
    }
}

/// Everything one pass over a directory produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub documents_scanned: usize,
    pub links_checked: usize,
    pub findings: Vec<Finding>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
