//! Request-level handling of one uploaded file.
//!
//! Validates what the client sent (name, extension, size), runs the
//! extractor, and shapes the outcome into the JSON document returned to the
//! client.

use crate::error::ExtractionError;
use crate::extractor::Extractor;
use crate::reader::Format;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

const MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_bytes: u64,
}

impl UploadLimits {
    pub fn from_megabytes(mb: u64) -> Self {
        Self {
            max_bytes: mb.saturating_mul(MIB),
        }
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::from_megabytes(50)
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub ok: bool,
    pub text: String,
    pub meta: ExtractMeta,
}

#[derive(Debug, Serialize)]
pub struct ExtractMeta {
    pub filename: String,
    pub format: String,
    /// Number of characters (Unicode scalar values) in `text`.
    pub length: usize,
    pub mimetype: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// How a failed upload should be reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    PayloadTooLarge,
    Internal,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file provided")]
    MissingFile,

    #[error("invalid file name")]
    InvalidFilename,

    #[error("missing file extension")]
    MissingExtension,

    #[error("unsupported format; accepted formats: PDF, EPUB, DOCX, TXT")]
    UnsupportedFormat,

    #[error("the file exceeds the {limit_mb} MB limit")]
    TooLarge { limit_mb: u64 },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl UploadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooLarge { .. } => ErrorKind::PayloadTooLarge,
            Self::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::BadRequest,
        }
    }

    pub fn into_response(self) -> ErrorResponse {
        ErrorResponse {
            ok: false,
            error: self.to_string(),
        }
    }
}

/// Extracts text from an uploaded file named `filename`.
///
/// Only the final path component of `filename` is kept; its extension is
/// matched case-insensitively against the supported formats before any
/// parsing happens.
pub fn handle_upload(
    extractor: &Extractor,
    limits: UploadLimits,
    filename: &str,
    data: &[u8],
) -> Result<ExtractResponse, UploadError> {
    if filename.is_empty() {
        return Err(UploadError::InvalidFilename);
    }

    let filename = basename(filename).ok_or(UploadError::InvalidFilename)?;
    let ext = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{}", e.to_lowercase()))
        .ok_or(UploadError::MissingExtension)?;

    let format = Format::from_extension(&ext).ok_or_else(|| {
        warn!(%filename, %ext, "Rejected upload with unsupported format");
        UploadError::UnsupportedFormat
    })?;

    if data.len() as u64 > limits.max_bytes {
        warn!(%filename, bytes = data.len(), "Rejected upload over size limit");
        return Err(UploadError::TooLarge {
            limit_mb: limits.max_bytes / MIB,
        });
    }

    let text = extractor.extract(data, format.extension())?;
    let length = text.chars().count();
    info!(%filename, format = format.name(), length, "Upload extracted");

    Ok(ExtractResponse {
        ok: true,
        text,
        meta: ExtractMeta {
            filename,
            format: format.name().to_string(),
            length,
            mimetype: format.mime_type().to_string(),
        },
    })
}

/// Final component of a client-supplied name, accepting either separator.
fn basename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next()?;
    (!base.is_empty()).then(|| base.to_string())
}
