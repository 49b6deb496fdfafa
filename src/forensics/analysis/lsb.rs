//! Red-channel LSB extraction and reassembly into text.
//!
//! The first `limit` pixels (row-major) contribute one bit each, most
//! significant bit first within every byte. Reassembly is split into
//! fallible steps so that each failure mode can be observed on its own;
//! [`extract_lsb_message`] collapses all of them into
//! [`LsbMessage::Unreadable`].

use thiserror::Error;
use tracing::debug;

use crate::forensics::analysis::types::LsbMessage;
use crate::forensics::input::types::ImageSample;

const BITS_PER_CHAR: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LsbDecodeError {
    #[error("Malformed bit chunk: {0:?}")]
    MalformedChunk(String),

    #[error("Bit chunk decodes to invalid code point {0:#x}")]
    InvalidCodePoint(u32),
}

/// Collects `r & 1` for the first `limit` pixels as a `'0'`/`'1'` string.
pub fn lsb_bit_string(sample: &ImageSample, limit: usize) -> String {
    sample
        .pixels
        .iter()
        .take(limit)
        .map(|p| if p.r & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Parses consecutive 8-bit chunks into characters. A trailing chunk
/// shorter than 8 bits is dropped.
pub fn decode_bit_string(bits: &str) -> Result<String, LsbDecodeError> {
    bits.as_bytes()
        .chunks_exact(BITS_PER_CHAR)
        .map(decode_chunk)
        .collect()
}

fn decode_chunk(chunk: &[u8]) -> Result<char, LsbDecodeError> {
    let text = std::str::from_utf8(chunk)
        .map_err(|_| LsbDecodeError::MalformedChunk(String::from_utf8_lossy(chunk).into_owned()))?;
    // from_str_radix accepts a leading '+', which is not a bit
    if !text.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(LsbDecodeError::MalformedChunk(text.to_owned()));
    }
    let code = u32::from_str_radix(text, 2)
        .map_err(|_| LsbDecodeError::MalformedChunk(text.to_owned()))?;
    char::from_u32(code).ok_or(LsbDecodeError::InvalidCodePoint(code))
}

/// Printable means not a control character, not a no-break space and not a
/// soft hyphen. Exact for the 0..=255 range that 8-bit chunks produce.
pub fn is_printable(c: char) -> bool {
    !c.is_control() && c != '\u{a0}' && c != '\u{ad}'
}

/// Deletes every non-printable character.
pub fn printable_only(text: &str) -> String {
    text.chars().filter(|&c| is_printable(c)).collect()
}

/// Runs the full extraction and falls back to the sentinel on any failure
/// or when nothing but whitespace survives the printable filter.
pub fn extract_lsb_message(sample: &ImageSample, limit: usize) -> LsbMessage {
    let bits = lsb_bit_string(sample, limit);
    debug!("Extracted {} LSBs from red channel", bits.len());

    let decoded = match decode_bit_string(&bits) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!("LSB reassembly failed: {}", e);
            return LsbMessage::Unreadable;
        }
    };

    let text = printable_only(&decoded);
    if text.trim().is_empty() {
        LsbMessage::Unreadable
    } else {
        LsbMessage::Decoded(text)
    }
}
