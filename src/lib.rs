//! Pali alphabetical collation.
//!
//! Romanized Pali sorts by its own alphabet (a ā i ī u ū e o k kh g gh ṅ ...),
//! not by codepoint. Aspirated consonants such as "kh" and "ṭh" are single
//! letters, so "kha" sorts after every word starting with "k" + vowel.
//!
//! ```
//! let sorted = pali_sort::sort(vec!["pa", "kha", "ka"]);
//! assert_eq!(sorted, vec!["ka", "kha", "pa"]);
//!
//! assert_eq!(pali_sort::explode("bhikkhu"), vec!["bh", "i", "k", "kh", "u"]);
//! ```

pub mod alphabet;
pub mod collator;
pub mod constants;
pub mod error;
pub mod tokenizer;
pub mod utf8;

pub use alphabet::Alphabet;
pub use collator::PaliCollator;
pub use error::AlphabetError;
pub use tokenizer::{PaliUnit, Units};
pub use utf8::{codepoint_byte_length, substring_by_chars};

/// Pali characters of `word`, using the built-in alphabet.
pub fn explode(word: &str) -> Vec<&str> {
    tokenizer::explode(Alphabet::pali(), word)
}

/// Rank of a single Pali character; unknown characters rank after all others.
pub fn position(unit: &str) -> usize {
    Alphabet::pali().position(unit)
}

/// True if `word1` sorts before `word2` in the built-in Pali alphabet.
pub fn less_than(word1: &str, word2: &str) -> bool {
    PaliCollator::pali().less_than(word1, word2)
}

/// Sorts words in Pali alphabetical order.
pub fn sort<S: AsRef<str>>(words: Vec<S>) -> Vec<S> {
    PaliCollator::pali().sort_words(words)
}
