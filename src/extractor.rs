use crate::docx_reader::DocxReader;
use crate::epub_reader::EpubReader;
use crate::error::ExtractionError;
use crate::normalize::normalize_whitespace;
use crate::pdf_reader::PdfReader;
use crate::reader::{Format, FormatReader};
use crate::scratch::ScratchDir;
use crate::txt_reader::TxtReader;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Directory for PDF/EPUB scratch files. `None` uses the system temp dir.
    pub scratch_dir: Option<PathBuf>,
}

/// Routes a document to its reader by extension and cleans up the result.
///
/// Holds no per-call state, so one instance can serve any number of threads.
pub struct Extractor {
    readers: HashMap<&'static str, Box<dyn FormatReader>>,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let scratch = ScratchDir::new(config.scratch_dir);

        let mut readers: HashMap<&'static str, Box<dyn FormatReader>> = HashMap::new();
        for format in Format::ALL {
            let reader: Box<dyn FormatReader> = match format {
                Format::Pdf => Box::new(PdfReader::new(scratch.clone())),
                Format::Epub => Box::new(EpubReader::new(scratch.clone())),
                Format::Docx => Box::new(DocxReader),
                Format::Txt => Box::new(TxtReader),
            };
            readers.insert(format.extension(), reader);
        }

        Self { readers }
    }

    /// Extracts normalized text from `data`, declared as `extension`
    /// (lower-case, leading dot).
    ///
    /// The result is never empty: a document with nothing left after
    /// normalization is reported as [`ExtractionError::NoUsableText`].
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub fn extract(&self, data: &[u8], extension: &str) -> Result<String, ExtractionError> {
        let reader = self
            .readers
            .get(extension)
            .ok_or(ExtractionError::UnsupportedExtension)?;

        let raw = reader.read(data).map_err(|err| match err.downcast::<ExtractionError>() {
            Ok(domain) => domain,
            Err(other) => ExtractionError::unreadable(&other),
        })?;
        debug!(raw_len = raw.len(), "Reader finished");

        let text = normalize_whitespace(&raw);
        if text.is_empty() {
            return Err(ExtractionError::NoUsableText);
        }

        info!(chars = text.chars().count(), "Extraction complete");
        Ok(text)
    }

    #[cfg(test)]
    fn with_reader(mut self, extension: &'static str, reader: Box<dyn FormatReader>) -> Self {
        self.readers.insert(extension, reader);
        self
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// One-shot extraction with the default configuration.
pub fn extract_text(data: &[u8], extension: &str) -> Result<String, ExtractionError> {
    Extractor::default().extract(data, extension)
}
