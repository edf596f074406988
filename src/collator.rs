use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::trace;

use crate::alphabet::Alphabet;
use crate::tokenizer::explode;

/// Orders words by the ranks of their Pali characters.
///
/// Characters outside the alphabet all share one rank, so two words that
/// differ only in unknown characters of the same byte length compare equal.
#[derive(Debug, Clone, Copy)]
pub struct PaliCollator<'a> {
    alphabet: &'a Alphabet,
}

impl PaliCollator<'static> {
    /// Collator over the built-in Pali alphabet.
    pub fn pali() -> Self {
        PaliCollator::new(Alphabet::pali())
    }
}

impl Default for PaliCollator<'static> {
    fn default() -> Self {
        PaliCollator::pali()
    }
}

impl<'a> PaliCollator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        PaliCollator { alphabet }
    }

    /// Compares two words one unit at a time, tokenizing both in lockstep.
    ///
    /// The first differing rank decides. If one word runs out first, the
    /// shorter word in bytes sorts first; equal byte lengths are `Equal`.
    pub fn compare(&self, word1: &str, word2: &str) -> Ordering {
        let mut left = self.alphabet.units(word1);
        let mut right = self.alphabet.units(word2);

        while let (Some(l), Some(r)) = (left.next(), right.next()) {
            let left_rank = self.alphabet.position(l.text);
            let right_rank = self.alphabet.position(r.text);
            trace!(left = l.text, right = r.text, left_rank, right_rank, "comparing units");

            match left_rank.cmp(&right_rank) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        word1.len().cmp(&word2.len())
    }

    #[inline]
    pub fn less_than(&self, word1: &str, word2: &str) -> bool {
        self.compare(word1, word2) == Ordering::Less
    }

    /// Eager variant: explodes both words fully, then walks the rank lists.
    ///
    /// Kept as a reference for [`less_than`](Self::less_than). It differs at
    /// the end of input: when one rank list is a prefix of the other, the one
    /// with fewer units sorts first, regardless of byte length. The two agree
    /// on words made only of alphabet characters.
    pub fn less_than_legacy(&self, word1: &str, word2: &str) -> bool {
        let ranks1: Vec<usize> = explode(self.alphabet, word1)
            .into_iter()
            .map(|u| self.alphabet.position(u))
            .collect();
        let ranks2: Vec<usize> = explode(self.alphabet, word2)
            .into_iter()
            .map(|u| self.alphabet.position(u))
            .collect();

        for (i, &rank1) in ranks1.iter().enumerate() {
            if i >= ranks2.len() {
                return false;
            }
            match rank1.cmp(&ranks2[i]) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }

        ranks1.len() < ranks2.len()
    }

    /// Rank of every Pali character in `word`, in order.
    pub fn sort_key(&self, word: &str) -> Vec<usize> {
        self.alphabet
            .units(word)
            .map(|u| self.alphabet.position(u.text))
            .collect()
    }

    /// Sorts `words` in place. Rank-equal words keep no guaranteed order.
    ///
    /// `less_than` is not a total order once unknown characters of different
    /// byte widths meet (`"éé" < "xxṭ" < "xxx" < "éé"`), so the slice is first
    /// ordered by [`sort_key`](Self::sort_key), which never disagrees with
    /// `less_than` on alphabet words, and then settled against `less_than`.
    pub fn sort_in_place<S: AsRef<str>>(&self, words: &mut [S]) {
        words.sort_by_cached_key(|w| self.sort_key(w.as_ref()));
        self.settle(words);
    }

    /// Returns `words` in Pali alphabetical order.
    pub fn sort_words<S: AsRef<str>>(&self, mut words: Vec<S>) -> Vec<S> {
        self.sort_in_place(&mut words);
        words
    }

    /// Same ordering as [`sort_words`](Self::sort_words), keyed on the rayon pool.
    pub fn sort_words_par<S: AsRef<str> + Send>(&self, mut words: Vec<S>) -> Vec<S> {
        words.par_sort_by_cached_key(|w| self.sort_key(w.as_ref()));
        self.settle(&mut words);
        words
    }

    /// Insertion pass over `less_than`: afterwards no word is less than its
    /// predecessor. Linear when the slice is already in order.
    fn settle<S: AsRef<str>>(&self, words: &mut [S]) {
        for i in 1..words.len() {
            let mut j = i;
            while j > 0 && self.less_than(words[j].as_ref(), words[j - 1].as_ref()) {
                words.swap(j, j - 1);
                j -= 1;
            }
        }
    }
}
