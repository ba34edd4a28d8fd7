use crate::reader::FormatReader;
use anyhow::{anyhow, Context, Result};
use docx_rust::document::{
    BodyContent, BreakType, Paragraph, ParagraphContent, Run, RunContent,
};
use docx_rust::DocxFile;
use std::io::Cursor;
use tracing::debug;

/// Reads the top-level body paragraphs of a DOCX package, straight from
/// memory.
///
/// Paragraphs are joined with a line break, so an empty paragraph turns
/// into a blank line. Tables and other block content are not paragraphs and
/// are skipped.
#[derive(Debug, Default)]
pub struct DocxReader;

impl FormatReader for DocxReader {
    fn read(&self, data: &[u8]) -> Result<String> {
        // DocxFile owns the raw parts; Docx borrows from it.
        let file = DocxFile::from_reader(Cursor::new(data))
            .map_err(|e| anyhow!("{}", e))
            .context("Failed to open DOCX package")?;
        let docx = file
            .parse()
            .map_err(|e| anyhow!("{}", e))
            .context("Failed to parse DOCX content")?;

        let paragraphs: Vec<String> = docx
            .document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        debug!(paragraphs = paragraphs.len(), "Read DOCX paragraphs");
        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for pc in &para.content {
        match pc {
            ParagraphContent::Run(run) => push_run_text(run, &mut text),
            ParagraphContent::Link(link) => {
                if let Some(run) = &link.content {
                    push_run_text(run, &mut text);
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(run: &Run, out: &mut String) {
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => out.push_str(&t.text),
            // Page and column breaks carry no text.
            RunContent::Break(br) => {
                if matches!(br.ty, None | Some(BreakType::TextWrapping)) {
                    out.push('\n');
                }
            }
            RunContent::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}
