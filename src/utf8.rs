//! Byte-level codepoint boundaries.
//!
//! Nothing here validates UTF-8. A lead byte is taken as-is and the
//! continuation bytes after it are counted, never past the end of the slice.

use crate::constants::is_continuation_byte;

/// Number of bytes occupied by the codepoint starting at `offset`.
///
/// Returns 0 when `offset` is at or past the end of `bytes`. On malformed
/// input the count may be off, but it is always bounded by `bytes.len()`.
#[inline]
pub fn codepoint_byte_length(bytes: &[u8], offset: usize) -> usize {
    if offset >= bytes.len() {
        return 0;
    }

    let mut length = 1;
    while offset + length < bytes.len() && is_continuation_byte(bytes[offset + length]) {
        length += 1;
    }
    length
}

/// Byte offset reached after stepping over `char_count` codepoints from `byte_start`.
#[inline]
fn advance_codepoints(bytes: &[u8], byte_start: usize, char_count: usize) -> usize {
    let mut offset = byte_start;
    for _ in 0..char_count {
        let step = codepoint_byte_length(bytes, offset);
        if step == 0 {
            break;
        }
        offset += step;
    }
    offset
}

/// Byte-slice form of [`substring_by_chars`], for input that may not be valid UTF-8.
pub fn substring_bytes_by_chars(bytes: &[u8], char_start: usize, char_count: usize) -> &[u8] {
    let start = advance_codepoints(bytes, 0, char_start);
    let end = advance_codepoints(bytes, start, char_count);
    &bytes[start..end]
}

/// Substring of `word` covering `char_count` codepoints starting at codepoint `char_start`.
///
/// Truncated to whatever is available when the range runs past the end.
pub fn substring_by_chars(word: &str, char_start: usize, char_count: usize) -> &str {
    let bytes = word.as_bytes();
    let start = advance_codepoints(bytes, 0, char_start);
    let end = advance_codepoints(bytes, start, char_count);
    // Valid UTF-8 in, so both offsets sit on char boundaries.
    &word[start..end]
}
