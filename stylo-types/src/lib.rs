//! Core types shared across the Stylo authorship engine.
//!
//! This crate holds the plain data passed between the analyzer, the corpus
//! and whatever reports the results. Keeping it separate ensures:
//!
//! - **No dependencies**: the types compile anywhere the engine does
//! - **Cross-crate compatibility**: core and demo share the same types
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Unique document identifier.
///
/// Ids are assigned sequentially by the corpus in insertion order, so a
/// smaller id always means an earlier document.
pub type DocId = u32;

/// Default number of n-grams kept per author aggregate.
pub const DEFAULT_TOP_N: usize = 20;

/// Separator placed between the units of one n-gram key.
pub const UNIT_SEPARATOR: &str = ", ";

/// Unit of an n-gram: whole words or single characters.
///
/// `#[repr(u8)]` keeps the enum one byte wide so [`NgramConfig`] stays a
/// cheap hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Granularity {
    /// Units are whitespace-delimited words with punctuation removed.
    Word = 0,
    /// Units are characters, spaces and punctuation included.
    Char = 1,
}

impl Granularity {
    /// Both granularities, word first.
    pub const ALL: [Granularity; 2] = [Granularity::Word, Granularity::Char];

    /// Returns `true` for word n-grams.
    #[inline(always)]
    pub const fn is_word(self) -> bool {
        matches!(self, Granularity::Word)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Word => f.write_str("word"),
            Granularity::Char => f.write_str("char"),
        }
    }
}

/// Active n-gram configuration: how long the n-grams are and what a unit is.
///
/// A length of zero is accepted and simply yields no n-grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NgramConfig {
    /// Number of units per n-gram.
    pub length: usize,
    /// Unit kind.
    pub granularity: Granularity,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self::char(4)
    }
}

impl NgramConfig {
    /// Word n-grams of the given length.
    pub const fn word(length: usize) -> Self {
        Self {
            length,
            granularity: Granularity::Word,
        }
    }

    /// Character n-grams of the given length.
    pub const fn char(length: usize) -> Self {
        Self {
            length,
            granularity: Granularity::Char,
        }
    }
}

impl fmt::Display for NgramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-length {} n-grams", self.length, self.granularity)
    }
}

/// Aggregated statistics of one n-gram across an author's documents.
#[derive(Debug, Clone, PartialEq)]
pub struct NgramStat {
    /// The n-gram key, units joined by [`UNIT_SEPARATOR`].
    pub ngram: String,
    /// Occurrences summed over all of the author's documents.
    pub total: u64,
    /// Mean occurrences per document, rounded to two decimals.
    pub mean: f64,
    /// Population standard deviation per document, rounded to two decimals.
    pub stdev: f64,
}

/// Euclidean distance between two author aggregates.
///
/// `overlap` is the number of n-grams both aggregates share. A distance of
/// `0.0` with zero overlap means there was nothing to compare, which is not
/// the same as two identical styles; check [`Distance::has_evidence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    /// Square root of the summed squared mean differences.
    pub value: f64,
    /// Number of n-grams present in both aggregates.
    pub overlap: usize,
}

impl Distance {
    /// Creates a new distance.
    #[inline(always)]
    pub const fn new(value: f64, overlap: usize) -> Self {
        Self { value, overlap }
    }

    /// Returns `true` if at least one n-gram was shared.
    #[inline(always)]
    pub const fn has_evidence(&self) -> bool {
        self.overlap > 0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({} shared n-grams)", self.value, self.overlap)
    }
}

/// Errors reported by corpus queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// No documents are attributed to this author label.
    UnknownAuthor {
        /// The label that was requested.
        author: String,
    },
    /// A summary was requested before any n-gram model was activated.
    ModelNotSet,
    /// The author exists but has no aggregate under the active model.
    NotSummarised {
        /// The label that was requested.
        author: String,
    },
    /// The corpus already holds as many documents as `DocId` can number.
    TooManyDocuments {
        /// Documents stored when the insert was refused.
        count: usize,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::UnknownAuthor { author } => {
                write!(f, "unknown author: {:?} has no documents", author)
            }
            CorpusError::ModelNotSet => write!(f, "no n-gram model has been set"),
            CorpusError::NotSummarised { author } => {
                write!(
                    f,
                    "author {:?} has not been summarised under the active model",
                    author
                )
            }
            CorpusError::TooManyDocuments { count } => {
                write!(f, "document id space exhausted at {} documents", count)
            }
        }
    }
}

impl core::error::Error for CorpusError {}

/// Descriptive statistics over per-document occurrence counts.
pub mod stats {
    /// Arithmetic mean. Returns `0.0` for an empty slice.
    ///
    /// # Example
    /// ```
    /// use stylo_types::stats::mean;
    ///
    /// assert_eq!(mean(&[1, 0]), 0.5);
    /// ```
    pub fn mean(values: &[u32]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sum: u64 = values.iter().map(|&v| v as u64).sum();
        sum as f64 / values.len() as f64
    }

    /// Population standard deviation (divides by `N`, not `N - 1`).
    ///
    /// A single value or a list of equal values gives `0.0`.
    ///
    /// # Example
    /// ```
    /// use stylo_types::stats::{mean, population_stdev};
    ///
    /// let counts = [1, 0];
    /// assert_eq!(population_stdev(&counts, mean(&counts)), 0.5);
    /// ```
    pub fn population_stdev(values: &[u32], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let sum_squares: f64 = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum();
        (sum_squares / values.len() as f64).sqrt()
    }

    /// Rounds to two decimal places. Exact halves go to the even neighbour,
    /// so `0.125` becomes `0.12`.
    #[inline(always)]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round_ties_even() / 100.0
    }
}
