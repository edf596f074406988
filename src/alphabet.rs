use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::constants::{is_aspirate_mark, PALI_ALPHABET};
use crate::error::AlphabetError;
use crate::utf8::codepoint_byte_length;

static PALI: Lazy<Alphabet> = Lazy::new(|| {
    let alphabet = Alphabet::build(PALI_ALPHABET.iter().map(|e| e.to_string()).collect());
    debug!(entries = alphabet.len(), "initialized built-in Pali alphabet");
    alphabet
});

/// An ordered collation alphabet. An entry's index is its rank.
#[derive(Debug, Clone)]
pub struct Alphabet {
    entries: Vec<String>,                  // rank -> entry
    positions: FxHashMap<Box<[u8]>, usize>, // entry bytes -> rank
}

impl Alphabet {
    /// The compiled-in romanized Pali alphabet, shared process-wide.
    pub fn pali() -> &'static Alphabet {
        &PALI
    }

    /// Builds an alphabet from entries given in collation order.
    ///
    /// Every entry must be a single codepoint or a single codepoint followed
    /// by `h`; anything else could never be matched by the tokenizer.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        for (position, entry) in entries.iter().enumerate() {
            if entry.is_empty() {
                return Err(AlphabetError::EmptyEntry { position });
            }
            if !is_unit_shaped(entry) {
                return Err(AlphabetError::UnreachableEntry {
                    entry: entry.clone(),
                    position,
                });
            }
            if let Some(&first) = seen.get(entry.as_str()) {
                return Err(AlphabetError::Duplicate {
                    entry: entry.clone(),
                    first,
                    second: position,
                });
            }
            seen.insert(entry.as_str(), position);
        }

        let alphabet = Alphabet::build(entries);
        debug!(entries = alphabet.len(), "built custom alphabet");
        Ok(alphabet)
    }

    /// Loads an alphabet file: one entry per line, in collation order.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load(path: &Path) -> Result<Self, AlphabetError> {
        let io_err = |source: std::io::Error| AlphabetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(io_err)?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            entries.push(entry.to_string());
        }

        debug!(path = %path.display(), entries = entries.len(), "read alphabet file");
        Alphabet::from_entries(entries)
    }

    fn build(entries: Vec<String>) -> Self {
        let positions: FxHashMap<Box<[u8]>, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.as_bytes().into(), i))
            .collect();
        Alphabet { entries, positions }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Rank shared by every unit that is not in the alphabet. Sorts last.
    #[inline]
    pub fn unknown_rank(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn contains(&self, unit: &str) -> bool {
        self.positions.contains_key(unit.as_bytes())
    }

    /// Rank of `unit`, or [`unknown_rank`](Self::unknown_rank) if it is not an entry.
    #[inline]
    pub fn position(&self, unit: &str) -> usize {
        self.position_bytes(unit.as_bytes())
    }

    #[inline]
    pub fn position_bytes(&self, unit: &[u8]) -> usize {
        self.positions
            .get(unit)
            .copied()
            .unwrap_or_else(|| self.unknown_rank())
    }

    /// Byte length of the unit starting at `offset`: one codepoint, or one
    /// codepoint plus a following `h` when that pair is an entry.
    /// Returns 0 at end of input.
    #[inline]
    pub fn unit_byte_length(&self, bytes: &[u8], offset: usize) -> usize {
        let single = codepoint_byte_length(bytes, offset);
        if single == 0 {
            return 0;
        }

        let next = offset + single;
        if next < bytes.len()
            && is_aspirate_mark(bytes[next])
            && self.positions.contains_key(&bytes[offset..=next])
        {
            single + 1
        } else {
            single
        }
    }
}

/// One codepoint, or one codepoint followed by the aspirate mark.
fn is_unit_shaped(entry: &str) -> bool {
    let bytes = entry.as_bytes();
    let first = codepoint_byte_length(bytes, 0);
    first == bytes.len() || (first + 1 == bytes.len() && is_aspirate_mark(bytes[first]))
}
