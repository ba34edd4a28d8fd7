use thiserror::Error;

/// Why a document produced no text.
///
/// Every variant is attributable to the uploaded file, never to the
/// process itself.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file extension")]
    UnsupportedExtension,

    /// The parsing crate rejected the file. The cause chain is kept for
    /// diagnostics.
    #[error("could not read the document: {0}")]
    Unreadable(String),

    #[error("no usable text found in this file")]
    NoUsableText,
}

impl ExtractionError {
    pub(crate) fn unreadable(cause: &anyhow::Error) -> Self {
        Self::Unreadable(format!("{cause:#}"))
    }
}
