//! Whole-file reads for the extractors.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::error::ExtractError;

const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// Reads `path` into a string.
///
/// The encoding follows the byte-order mark: UTF-8, UTF-16LE/BE and
/// UTF-32LE/BE are recognized, anything without a mark is read as UTF-8.
/// Malformed sequences are replaced rather than rejected, and the mark itself
/// never reaches the first line.
pub fn read_document(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

fn decode(bytes: &[u8]) -> String {
    // UTF-32LE has to be checked first: its mark starts with the UTF-16LE one.
    if let Some(body) = bytes.strip_prefix(&UTF32_LE_BOM) {
        return decode_utf32(body, u32::from_le_bytes);
    }
    if let Some(body) = bytes.strip_prefix(&UTF32_BE_BOM) {
        return decode_utf32(body, u32::from_be_bytes);
    }
    let (text, _, _) = UTF_8.decode(bytes);
    text.into_owned()
}

fn decode_utf32(body: &[u8], unit: fn([u8; 4]) -> u32) -> String {
    let mut chunks = body.chunks_exact(4);
    let mut text: String = chunks
        .by_ref()
        .map(|c| {
            let code = unit([c[0], c[1], c[2], c[3]]);
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    if !chunks.remainder().is_empty() {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
