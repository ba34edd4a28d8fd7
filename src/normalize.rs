use regex::Regex;
use std::sync::LazyLock;

// Unicode whitespace plus the ASCII file/group/record/unit separators.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[\s\x1c-\x1f]*\n").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());

/// Collapse whitespace while keeping paragraph breaks.
///
/// Blocks separated by a blank line (possibly containing other whitespace)
/// survive as paragraphs joined by exactly one blank line. Inside a block
/// every whitespace run, newlines included, becomes a single space. Blocks
/// that end up empty are dropped, so whitespace-only input yields `""`.
pub fn normalize_whitespace(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");

    PARAGRAPH_BREAK
        .split(&text)
        .map(|block| WHITESPACE_RUN.replace_all(block, " ").trim_matches(is_space).to_string())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
