//! PDF text via `pdf_extract`.
//!
//! `pdf_extract` wants a path and can panic on malformed input instead of
//! returning an error, so the bytes go to a scratch file and the call runs
//! behind [`std::panic::catch_unwind`].

use crate::reader::FormatReader;
use crate::scratch::ScratchDir;
use anyhow::{anyhow, Context, Result};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct PdfReader {
    scratch: ScratchDir,
}

impl PdfReader {
    pub fn new(scratch: ScratchDir) -> Self {
        Self { scratch }
    }
}

impl FormatReader for PdfReader {
    fn read(&self, data: &[u8]) -> Result<String> {
        let file = self.scratch.materialize(data, ".pdf")?;
        debug!(path = %file.path().display(), bytes = data.len(), "Extracting PDF text");
        extract_from_path(file.path())
    }
}

fn extract_from_path(path: &Path) -> Result<String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path))) {
        Ok(result) => result.context("Failed to extract text from PDF"),
        Err(_) => {
            warn!("PDF parser panicked on malformed input");
            Err(anyhow!("PDF parser panicked (malformed document)"))
        }
    }
}
