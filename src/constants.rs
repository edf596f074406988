// Romanized Pali alphabet, in collation order.
// Aspirates are single letters here: "kh" sorts after "k" and before "g".
pub const PALI_ALPHABET: [&str; 41] = [
    // Vowels
    "a", "\u{0101}", "i", "\u{012B}", "u", "\u{016B}", "e", "o",
    // Velars
    "k", "kh", "g", "gh", "\u{1E45}",
    // Palatals
    "c", "ch", "j", "jh", "\u{00F1}",
    // Retroflexes
    "\u{1E6D}", "\u{1E6D}h", "\u{1E0D}", "\u{1E0D}h", "\u{1E47}",
    // Dentals
    "t", "th", "d", "dh", "n",
    // Labials
    "p", "ph", "b", "bh", "m",
    // Semivowels, sibilant, aspirate, lateral, niggahita
    "y", "r", "l", "v", "s", "h", "\u{1E37}", "\u{1E43}",
];

/// The letter that turns a preceding consonant into an aspirate.
pub const ASPIRATE_MARK: u8 = b'h';

const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_BITS: u8 = 0b1000_0000;

/// True for UTF-8 continuation bytes (`10xxxxxx`).
#[inline]
pub fn is_continuation_byte(b: u8) -> bool {
    b & CONTINUATION_MASK == CONTINUATION_BITS
}

#[inline]
pub fn is_aspirate_mark(b: u8) -> bool {
    b == ASPIRATE_MARK
}
