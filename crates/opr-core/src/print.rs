//! Print host trait.

use crate::error::Result;

/// Hands a rendered preview document to the host's print / save-as-PDF
/// pipeline. Paper size and pagination are up to the host; the document only
/// carries layout hints.
pub trait PrintHost: Send + Sync {
    fn print(&self, document: &str) -> Result<()>;
}
