//! Splits words into Pali characters.
//!
//! A unit is one codepoint, except that a codepoint followed by `h` is read
//! as one unit whenever the pair is itself an alphabet entry ("kh", "ṭh").
//! The merge is tried at every position, so "ah" stays two units because it
//! is not an entry. Units are contiguous and cover the whole word.

use crate::alphabet::Alphabet;
use crate::utf8::codepoint_byte_length;

/// One Pali character of a word, with where it sits in that word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaliUnit<'a> {
    pub text: &'a str,
    /// Offset of the unit in the word, in bytes.
    pub byte_offset: usize,
    /// Offset of the unit in the word, in codepoints.
    pub char_offset: usize,
    /// 1, or 2 for a merged aspirate.
    pub char_len: usize,
}

impl PaliUnit<'_> {
    #[inline]
    pub fn is_aspirate(&self) -> bool {
        self.char_len == 2
    }
}

/// Lazy left-to-right unit iterator over one word.
#[derive(Debug, Clone)]
pub struct Units<'a> {
    alphabet: &'a Alphabet,
    word: &'a str,
    byte_cursor: usize,
    char_cursor: usize,
}

impl<'a> Units<'a> {
    pub fn new(alphabet: &'a Alphabet, word: &'a str) -> Self {
        Units {
            alphabet,
            word,
            byte_cursor: 0,
            char_cursor: 0,
        }
    }

    /// Bytes of the word not yet consumed.
    #[inline]
    pub fn remaining_bytes(&self) -> usize {
        self.word.len() - self.byte_cursor
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = PaliUnit<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.word.as_bytes();
        let start = self.byte_cursor;
        let len = self.alphabet.unit_byte_length(bytes, start);
        if len == 0 {
            return None;
        }

        let char_len = if len > codepoint_byte_length(bytes, start) { 2 } else { 1 };
        let unit = PaliUnit {
            text: &self.word[start..start + len],
            byte_offset: start,
            char_offset: self.char_cursor,
            char_len,
        };

        self.byte_cursor += len;
        self.char_cursor += char_len;
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.remaining_bytes();
        // Each unit is 1..=5 bytes.
        ((rest + 4) / 5, Some(rest))
    }
}

impl std::iter::FusedIterator for Units<'_> {}

impl Alphabet {
    /// Iterates over the Pali characters of `word`.
    pub fn units<'a>(&'a self, word: &'a str) -> Units<'a> {
        Units::new(self, word)
    }
}

/// Splits `word` into its Pali characters.
pub fn explode<'a>(alphabet: &'a Alphabet, word: &'a str) -> Vec<&'a str> {
    alphabet.units(word).map(|u| u.text).collect()
}

/// Byte-level [`explode`] for input that was never checked as UTF-8.
/// Still lossless; malformed sequences come out as their own units.
pub fn explode_bytes<'a>(alphabet: &Alphabet, bytes: &'a [u8]) -> Vec<&'a [u8]> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    loop {
        let len = alphabet.unit_byte_length(bytes, offset);
        if len == 0 {
            break;
        }
        units.push(&bytes[offset..offset + len]);
        offset += len;
    }
    units
}
