//! N-gram extraction.
//!
//! Slides a window of `n` units over normalized text, one unit at a time.
//! Units are words for [`Granularity::Word`] and characters for
//! [`Granularity::Char`]. Each n-gram is rendered as its units joined by
//! [`UNIT_SEPARATOR`] so it can be counted as a single key:
//!
//! - words `"the cat sat"`, n = 2: `"the, cat"`, `"cat, sat"`
//! - chars `"a b"`, n = 2: `"a, _"`, `"_, b"`
//!
//! Spaces become [`SPACE_SENTINEL`] when they are themselves a unit, so a
//! character n-gram never contains a bare space.

use stylo_types::{Granularity, NgramConfig, UNIT_SEPARATOR};

use super::tokenizer::Tokenizer;

/// Stand-in for a space character inside a character n-gram.
pub const SPACE_SENTINEL: &str = "_";

/// Number of n-grams a sliding window of `n` produces over `units` units.
///
/// Zero when `n` is zero or longer than the input.
#[inline(always)]
pub const fn count_ngrams(units: usize, n: usize) -> usize {
    if n == 0 || units < n {
        0
    } else {
        units - n + 1
    }
}

/// Splits normalized text into the units n-grams are built from.
fn collect_units<'n>(normalized: &'n str, granularity: Granularity, units: &mut Vec<&'n str>) {
    units.clear();
    match granularity {
        Granularity::Word => Tokenizer.tokenize(normalized, |word, _| units.push(word)),
        Granularity::Char => {
            for (i, ch) in normalized.char_indices() {
                if ch == ' ' {
                    units.push(SPACE_SENTINEL);
                } else {
                    units.push(&normalized[i..i + ch.len_utf8()]);
                }
            }
        }
    }
}

/// Extracts n-grams from normalized text, first occurrence first.
///
/// The callback receives each n-gram as a borrowed key that is only valid
/// for the duration of the call; copy it if it must outlive the callback.
///
/// # Example
///
/// ```
/// use stylo_core::analyzer::ngram::extract_ngrams;
/// use stylo_types::Granularity;
///
/// let mut grams = Vec::new();
/// extract_ngrams("the cat sat", 2, Granularity::Word, |g| grams.push(g.to_owned()));
/// assert_eq!(grams, ["the, cat", "cat, sat"]);
/// ```
pub fn extract_ngrams<F>(normalized: &str, n: usize, granularity: Granularity, mut callback: F)
where
    F: FnMut(&str),
{
    if n == 0 || normalized.is_empty() {
        return;
    }

    let mut units = Vec::with_capacity(normalized.len());
    collect_units(normalized, granularity, &mut units);
    if units.len() < n {
        return;
    }

    let mut key = String::with_capacity(n * 8);
    for window in units.windows(n) {
        key.clear();
        for (i, unit) in window.iter().enumerate() {
            if i > 0 {
                key.push_str(UNIT_SEPARATOR);
            }
            key.push_str(unit);
        }
        callback(key.as_str());
    }
}

/// Collects all n-grams of a configuration into an ordered sequence.
pub fn collect_ngrams(normalized: &str, config: NgramConfig) -> Vec<String> {
    let mut out = Vec::new();
    extract_ngrams(normalized, config.length, config.granularity, |g| {
        out.push(g.to_owned())
    });
    out
}

/// Trait for types that turn normalized text into n-gram keys.
pub trait NgramExtractor {
    /// Extracts all n-grams from normalized text, in text order.
    fn extract<F>(&self, normalized: &str, callback: F)
    where
        F: FnMut(&str);
}

/// Standard sliding-window extractor bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct SlidingWindowExtractor {
    config: NgramConfig,
}

impl SlidingWindowExtractor {
    /// Creates an extractor for the given configuration.
    #[inline]
    pub const fn new(config: NgramConfig) -> Self {
        Self { config }
    }
}

impl NgramExtractor for SlidingWindowExtractor {
    #[inline]
    fn extract<F>(&self, normalized: &str, callback: F)
    where
        F: FnMut(&str),
    {
        extract_ngrams(
            normalized,
            self.config.length,
            self.config.granularity,
            callback,
        );
    }
}
