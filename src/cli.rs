use clap::Parser;
use std::path::PathBuf;

/// Extract clean plain text from a PDF, EPUB, DOCX or TXT document
#[derive(Parser, Debug)]
#[command(name = "doc2text", version, about)]
pub struct Cli {
    /// Path to the input document
    pub input: PathBuf,

    /// File name to report and to take the format from.
    /// Defaults to the input's own file name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reject documents larger than this many megabytes
    #[arg(long, default_value_t = 50)]
    pub max_size_mb: u64,

    /// Directory for temporary copies of PDF and EPUB input
    #[arg(long)]
    pub scratch_dir: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,
}
