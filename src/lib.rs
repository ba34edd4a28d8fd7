//! Plain-text extraction for uploaded documents.
//!
//! A document arrives as bytes plus a declared extension. The [`Extractor`]
//! picks the matching [`FormatReader`], pulls the raw text out, and runs it
//! through [`normalize_whitespace`] so every format ends up in the same
//! paragraph-separated shape.

pub mod docx_reader;
pub mod epub_reader;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod pdf_reader;
pub mod reader;
pub mod scratch;
pub mod txt_reader;
pub mod upload;

pub use error::ExtractionError;
pub use extractor::{extract_text, Extractor, ExtractorConfig};
pub use normalize::normalize_whitespace;
pub use reader::{Format, FormatReader};
pub use upload::{handle_upload, ErrorKind, ExtractMeta, ExtractResponse, UploadError, UploadLimits};
