//! Space tokenizer for word-normalized text.
//!
//! Splits normalized input like `"the cat sat"` into word slices, each
//! tagged with its position:
//!
//! ```ignore
//! ("the", 0)
//! ("cat", 1)
//! ("sat", 2)
//! ```
//!
//! Tokens borrow from the input, nothing is copied. The scan is a single
//! `memchr` pass over ASCII space bytes.
//!
//! ## The Input Contract
//!
//! Input must come from word normalization: no leading or trailing space
//! and no consecutive spaces. Debug builds assert this.

use memchr::memchr_iter;

/// Zero-allocation tokenizer over word-normalized text.
///
/// # Example
///
/// ```
/// use stylo_core::analyzer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer.tokenize("the cat sat", |word, _pos| words.push(word));
/// assert_eq!(words, ["the", "cat", "sat"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Emits `(word, position)` for every token, left to right.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading space (normalizer contract violated)"
        );
        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing space (normalizer contract violated)"
        );
        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces (normalizer contract violated)"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0usize;

        // Splitting on an ASCII byte always lands on a char boundary.
        for i in memchr_iter(b' ', bytes) {
            if start < i {
                emit(&normalized[start..i], pos);
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&normalized[start..], pos);
        }
    }

    /// Counts tokens without collecting them.
    #[inline]
    pub fn count(&self, normalized: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(normalized, |_, _| n += 1);
        n
    }
}
