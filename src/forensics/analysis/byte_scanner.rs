use regex::Regex;
use tracing::debug;

use crate::forensics::analysis::types::WordScan;
use crate::forensics::common::error::Result;

/// Finds distinct runs of at least `min_len` ASCII letters/digits in the raw
/// file bytes.
///
/// The bytes go through a hex encode/decode pass first; that pass is an
/// identity. Non-ASCII bytes are dropped before matching, which joins the
/// ASCII bytes on either side of them.
pub fn scan_words(data: &[u8], min_len: usize) -> Result<WordScan> {
    let hex_data = hex::encode(data);
    let decoded = hex::decode(&hex_data)?;

    let text: String = decoded
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect();

    let pattern = Regex::new(&format!("[A-Za-z0-9]{{{},}}", min_len.max(1)))?;
    let words = pattern
        .find_iter(&text)
        .map(|m| m.as_str().to_owned())
        .collect();

    let scan = WordScan { words };
    debug!("Scanned {} bytes, {} distinct words", data.len(), scan.len());
    Ok(scan)
}
