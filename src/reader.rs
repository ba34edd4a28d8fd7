use anyhow::Result;

/// Pulls raw, un-normalized text out of one document format.
///
/// Implementations return whatever the underlying parser produced; cleanup
/// is left to the caller. An error that is already an
/// [`ExtractionError`](crate::ExtractionError) is passed through untouched by
/// the extractor, anything else is reported as an unreadable document.
pub trait FormatReader: Send + Sync {
    fn read(&self, data: &[u8]) -> Result<String>;
}

/// The document formats accepted for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Pdf,
    Epub,
    Docx,
    Txt,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Pdf, Format::Epub, Format::Docx, Format::Txt];

    /// Matches a lower-cased extension including its leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Epub => ".epub",
            Self::Docx => ".docx",
            Self::Txt => ".txt",
        }
    }

    /// Extension without the dot, as reported in response metadata.
    pub fn name(&self) -> &'static str {
        &self.extension()[1..]
    }

    pub fn mime_type(&self) -> &'static str {
        mime_type_for(self.extension())
    }
}

/// Best-effort MIME type for an extension such as `.epub`.
pub fn mime_type_for(ext: &str) -> &'static str {
    mime_guess::from_ext(ext.trim_start_matches('.'))
        .first_raw()
        .unwrap_or("application/octet-stream")
}
