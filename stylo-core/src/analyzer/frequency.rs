//! Per-document n-gram frequency counting.
//!
//! Counts live in a dense `Vec` in first-occurrence order with an
//! `FxHashMap` index on the side. Iteration order is therefore a pure
//! function of the input sequence, which keeps the aggregate's tie-break
//! reproducible.

use rustc_hash::FxHashMap;

/// Occurrence counts of the distinct n-grams of one document.
///
/// Every stored count is at least 1; absent keys are implicitly zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramFrequencies {
    entries: Vec<(String, u32)>,
    index: FxHashMap<String, usize>,
}

impl NgramFrequencies {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts an ordered n-gram sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use stylo_core::analyzer::NgramFrequencies;
    ///
    /// let freq = NgramFrequencies::from_ngrams(["the", "cat", "the"]);
    /// assert_eq!(freq.get("the"), 2);
    /// assert_eq!(freq.get("dog"), 0);
    /// ```
    pub fn from_ngrams<I, S>(ngrams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut freq = Self::new();
        for ngram in ngrams {
            freq.add(ngram.as_ref());
        }
        freq
    }

    /// Records one occurrence of `ngram`.
    #[inline]
    pub fn add(&mut self, ngram: &str) {
        match self.index.get(ngram) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(ngram.to_owned(), self.entries.len());
                self.entries.push((ngram.to_owned(), 1));
            }
        }
    }

    /// Occurrences of `ngram`, zero if it never appeared.
    #[inline]
    pub fn get(&self, ngram: &str) -> u32 {
        self.index
            .get(ngram)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Iterates `(ngram, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct n-grams.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no n-gram was counted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, v)| *v as u64).sum()
    }
}
