use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where PDF and EPUB bytes get spilled for parsers that only take a path.
#[derive(Debug, Clone, Default)]
pub struct ScratchDir {
    dir: Option<PathBuf>,
}

impl ScratchDir {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Writes `data` to a fresh, uniquely named file ending in `suffix`.
    ///
    /// The file is deleted when the returned guard drops, including while
    /// unwinding.
    pub fn materialize(&self, data: &[u8], suffix: &str) -> Result<ScratchFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("doc2text-").suffix(suffix);

        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("Failed to create scratch file")?;

        file.write_all(data)
            .and_then(|()| file.flush())
            .context("Failed to write scratch file")?;

        Ok(ScratchFile { file })
    }
}

pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
