pub mod auditor;
pub mod error;
pub mod link;
pub mod result;

pub use auditor::{LinkAuditor, ProgressCallback, find_broken_links};
pub use error::AuditError;
pub use link::LinkKind;
pub use result::{Finding, LinkReference, ScanResult};
