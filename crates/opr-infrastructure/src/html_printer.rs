//! Print host that exports the preview document as an HTML file.
//!
//! The written file is what the host then opens in a browser and sends to
//! its print / save-as-PDF dialog.

use std::fs;
use std::path::{Path, PathBuf};

use opr_core::print::PrintHost;
use opr_core::{OprError, Result};

pub struct HtmlExportPrinter {
    path: PathBuf,
}

impl HtmlExportPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintHost for HtmlExportPrinter {
    fn print(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    OprError::print(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }

        fs::write(&self.path, document)
            .map_err(|e| OprError::print(format!("cannot write {}: {e}", self.path.display())))?;

        tracing::info!(
            path = %self.path.display(),
            bytes = document.len(),
            "Exported report for printing"
        );
        Ok(())
    }
}
