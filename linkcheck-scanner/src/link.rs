use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Href prefixes that are never checked against the filesystem.
///
/// This is a plain prefix test, so a relative path such as `httpfoo.html`
/// also counts as external.
pub const EXTERNAL_PREFIXES: [&str; 3] = ["http", "mailto:", "tel:"];

/// How an href is treated by the auditor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Checked for existence on disk
    Internal,
    /// Starts with `http`, `mailto:` or `tel:`
    External,
    /// Starts with or contains `#`
    Fragment,
    /// Empty href attribute
    Empty,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        if href.is_empty() {
            LinkKind::Empty
        } else if EXTERNAL_PREFIXES
            .iter()
            .any(|prefix| href.starts_with(prefix))
        {
            LinkKind::External
        } else if href.contains('#') {
            LinkKind::Fragment
        } else {
            LinkKind::Internal
        }
    }

    pub fn is_internal(self) -> bool {
        self == LinkKind::Internal
    }
}

/// Join `href` onto the scan directory and collapse `.`/`..` lexically.
pub fn resolve_link(directory: &Path, href: &str) -> PathBuf {
    normalize_path(&directory.join(href))
}

/// Lexical path normalization: drops `.` segments and folds `..` into the
/// preceding segment. Leading `..` on a relative path are kept, and `..`
/// directly under the root is discarded. On unix exactly two leading slashes
/// are kept as written, while three or more collapse to one. Never touches
/// the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    let normalized: PathBuf = parts.iter().collect();
    if has_double_slash_root(path) {
        let mut rooted = OsString::from("/");
        rooted.push(normalized.as_os_str());
        return PathBuf::from(rooted);
    }
    normalized
}

fn has_double_slash_root(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    cfg!(unix) && bytes.starts_with(b"//") && !bytes.starts_with(b"///")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_internal() {
        assert_eq!(LinkKind::classify("page.html"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("../css/style.css"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("/abs/page.html"), LinkKind::Internal);
    }

    #[test]
    fn test_classify_external_prefixes() {
        assert_eq!(LinkKind::classify("http://example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("https://example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("mailto:me@example.com"), LinkKind::External);
        assert_eq!(LinkKind::classify("tel:+15551234"), LinkKind::External);
    }

    #[test]
    fn test_classify_http_prefix_quirk() {
        // literal prefix match, not scheme parsing
        assert_eq!(LinkKind::classify("httpfoo.html"), LinkKind::External);
    }

    #[test]
    fn test_classify_other_schemes_are_internal() {
        assert_eq!(LinkKind::classify("ftp://example.com"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("javascript:void(0)"), LinkKind::Internal);
    }

    #[test]
    fn test_classify_fragments() {
        assert_eq!(LinkKind::classify("#top"), LinkKind::Fragment);
        assert_eq!(LinkKind::classify("page.html#section"), LinkKind::Fragment);
        assert!(!LinkKind::classify("#").is_internal());
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(LinkKind::classify(""), LinkKind::Empty);
        assert!(!LinkKind::Empty.is_internal());
    }

    #[test]
    fn test_resolve_inside_directory() {
        assert_eq!(
            resolve_link(Path::new("html"), "page.html"),
            PathBuf::from("html/page.html")
        );
        assert_eq!(
            resolve_link(Path::new("html"), "./docs/../page.html"),
            PathBuf::from("html/page.html")
        );
    }

    #[test]
    fn test_resolve_escapes_directory() {
        assert_eq!(
            resolve_link(Path::new("html"), "../css/style.css"),
            PathBuf::from("css/style.css")
        );
        assert_eq!(
            resolve_link(Path::new("html"), "../../shared/a.html"),
            PathBuf::from("../shared/a.html")
        );
    }

    #[test]
    fn test_resolve_absolute_href_replaces_directory() {
        assert_eq!(
            resolve_link(Path::new("html"), "/srv/site/a.html"),
            PathBuf::from("/srv/site/a.html")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_protocol_relative_keeps_double_slash() {
        let resolved = resolve_link(Path::new("html"), "//cdn.example.com/x.js");
        assert_eq!(resolved.to_str(), Some("//cdn.example.com/x.js"));

        let resolved = resolve_link(Path::new("html"), "//cdn.example.com/./lib/../x.js");
        assert_eq!(resolved.to_str(), Some("//cdn.example.com/x.js"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_triple_slash_collapses_to_root() {
        let resolved = resolve_link(Path::new("html"), "///x");
        assert_eq!(resolved.to_str(), Some("/x"));

        let resolved = normalize_path(Path::new("////a//b"));
        assert_eq!(resolved.to_str(), Some("/a/b"));
    }

    #[test]
    fn test_normalize_root_parent_is_discarded() {
        assert_eq!(normalize_path(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_normalize_to_current_dir() {
        assert_eq!(normalize_path(Path::new("html/..")), PathBuf::from("."));
        assert_eq!(normalize_path(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn test_normalize_trailing_slash_and_duplicates() {
        assert_eq!(
            normalize_path(Path::new("html//sub/./")),
            PathBuf::from("html/sub")
        );
    }
}
