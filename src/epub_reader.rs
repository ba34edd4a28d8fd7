use crate::reader::FormatReader;
use crate::scratch::ScratchDir;
use anyhow::{Context, Result};
use rbook::prelude::*;
use rbook::Epub;
use scraper::Html;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Reads every readable content document of an EPUB.
///
/// Spine documents come first in reading order, then documents that are
/// only listed in the manifest (appendices, the navigation document). Each
/// part contributes its visible text (text nodes joined by a single
/// space); parts are joined by a line break.
#[derive(Debug, Default)]
pub struct EpubReader {
    scratch: ScratchDir,
}

impl EpubReader {
    pub fn new(scratch: ScratchDir) -> Self {
        Self { scratch }
    }
}

impl FormatReader for EpubReader {
    fn read(&self, data: &[u8]) -> Result<String> {
        let file = self.scratch.materialize(data, ".epub")?;
        let parts = document_parts(file.path())?;
        debug!(parts = parts.len(), "Read EPUB content documents");

        Ok(parts
            .iter()
            .map(|html| visible_text(html))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Content documents in spine order, followed by readable manifest entries
/// outside the spine, sorted by href.
fn document_parts(path: &Path) -> Result<Vec<String>> {
    let epub = Epub::options()
        .strict(false)
        .open(path)
        .context("Failed to open EPUB")?;

    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for entry in epub.spine().entries().filter_map(|s| s.manifest_entry()) {
        if seen.insert(entry.href().as_str()) {
            entries.push(entry);
        }
    }

    let mut rest: Vec<_> = epub
        .manifest()
        .readable_content()
        .filter(|entry| !seen.contains(entry.href().as_str()))
        .collect();
    rest.sort_by(|a, b| a.href().as_str().cmp(b.href().as_str()));
    entries.extend(rest);

    entries
        .iter()
        .map(|entry| {
            entry
                .read_str()
                .with_context(|| format!("Failed to read EPUB content document: {}", entry.href()))
        })
        .collect()
}

/// Text a browser would render, minus script and style bodies.
fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    doc.root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|el| matches!(el.name(), "script" | "style"))
            });
            (!hidden).then_some(&**text)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
