use crate::reader::FormatReader;
use anyhow::Result;
use tracing::debug;

/// Plain text: UTF-8 first, ISO-8859-1 otherwise. Never fails.
#[derive(Debug, Default)]
pub struct TxtReader;

impl FormatReader for TxtReader {
    fn read(&self, data: &[u8]) -> Result<String> {
        Ok(decode(data))
    }
}

fn decode(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!(valid_up_to = e.valid_up_to(), "Not UTF-8, decoding as Latin-1");
            // Latin-1 maps each byte to the code point of the same value.
            data.iter().map(|&b| char::from(b)).collect()
        }
    }
}
