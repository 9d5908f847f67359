//! Text normalization, the first stage of the pipeline.
//!
//! The rules depend on the n-gram granularity:
//!
//! - **Word**: lowercase, drop punctuation except hyphens (smart quotes count
//!   as punctuation), trim hyphens off each token, split tokens on `--`, and
//!   re-join everything with single spaces.
//! - **Char**: lowercase and turn each `\r`, `\n` and `\t` into one space.
//!   Everything else, punctuation and runs of spaces included, is kept.
//!
//! Word output always satisfies the tokenizer contract: no leading, trailing
//! or doubled spaces. Char output makes no such promise.

use stylo_types::Granularity;

/// Smart quotes stripped alongside ASCII punctuation in word mode.
const SMART_QUOTES: [char; 4] = ['\u{2019}', '\u{2018}', '\u{201C}', '\u{201D}'];

/// Returns `true` if word normalization removes this character.
#[inline(always)]
fn is_stripped_punct(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '-') || SMART_QUOTES.contains(&c)
}

#[inline(always)]
const fn is_line_ws(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\t')
}

/// Granularity-aware text normalizer.
///
/// # Examples
///
/// ```
/// use stylo_core::analyzer::TextNormalizer;
/// use stylo_types::Granularity;
///
/// let words = TextNormalizer::new(Granularity::Word);
/// assert_eq!(words.normalize("The cat's -well- known."), "the cats well known");
///
/// let chars = TextNormalizer::new(Granularity::Char);
/// assert_eq!(chars.normalize("Hi,\tYou"), "hi, you");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    granularity: Granularity,
}

impl TextNormalizer {
    /// Creates a normalizer for the given granularity.
    #[inline]
    pub const fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    /// Returns the granularity this normalizer was built for.
    #[inline(always)]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Normalizes text into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity. The input is never
    /// modified.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        match self.granularity {
            Granularity::Word => normalize_words(input, out),
            Granularity::Char => normalize_chars(input, out),
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

fn normalize_words(input: &str, out: &mut String) {
    out.reserve(input.len());
    let mut token = String::with_capacity(32);

    for raw in input.split_whitespace() {
        token.clear();
        for ch in raw.chars() {
            if is_stripped_punct(ch) {
                continue;
            }
            if ch.is_ascii() {
                token.push(ch.to_ascii_lowercase());
            } else {
                token.extend(ch.to_lowercase());
            }
        }

        // "--" is a dash between two words, not part of either.
        for piece in token.trim_matches('-').split("--") {
            if piece.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(piece);
        }
    }
}

fn normalize_chars(input: &str, out: &mut String) {
    out.reserve(input.len());
    for ch in input.chars() {
        if is_line_ws(ch) {
            out.push(' ');
        } else if ch.is_ascii() {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> String {
        TextNormalizer::new(Granularity::Word).normalize(input)
    }

    fn chars(input: &str) -> String {
        TextNormalizer::new(Granularity::Char).normalize(input)
    }

    #[test]
    fn word_lowercases() {
        assert_eq!(words("HELLO World"), "hello world");
    }

    #[test]
    fn word_strips_ascii_punctuation() {
        assert_eq!(words("Hello, world! (yes); \"no\"?"), "hello world yes no");
        assert_eq!(words("don't"), "dont");
        assert_eq!(words("snake_case"), "snakecase");
    }

    #[test]
    fn word_strips_smart_quotes() {
        assert_eq!(words("\u{201C}Quoted\u{201D} it\u{2019}s \u{2018}x\u{2019}"), "quoted its x");
    }

    #[test]
    fn word_keeps_inner_hyphens() {
        assert_eq!(words("well-known self-evident"), "well-known self-evident");
    }

    #[test]
    fn word_trims_outer_hyphens() {
        assert_eq!(words("-lead trail- -both-"), "lead trail both");
    }

    #[test]
    fn word_splits_double_hyphen() {
        assert_eq!(words("wait--what"), "wait what");
        assert_eq!(words("a---b"), "a -b");
    }

    #[test]
    fn word_drops_tokens_that_vanish() {
        assert_eq!(words("hello -- , world"), "hello world");
        assert_eq!(words("a----b"), "a b");
    }

    #[test]
    fn word_collapses_whitespace() {
        assert_eq!(words("  one\t\ttwo\r\nthree  "), "one two three");
    }

    #[test]
    fn word_output_has_no_double_spaces() {
        let out = words(" x -- -- y ... z--  --w ");
        assert!(!out.contains("  "));
        assert!(!out.starts_with(' '));
        assert!(!out.ends_with(' '));
    }

    #[test]
    fn char_lowercases_and_keeps_punctuation() {
        assert_eq!(chars("Hello, World!"), "hello, world!");
    }

    #[test]
    fn char_maps_each_line_ws_to_one_space() {
        assert_eq!(chars("a\r\nb\tc"), "a  b c");
    }

    #[test]
    fn char_preserves_space_runs() {
        assert_eq!(chars("  a  "), "  a  ");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(chars("ÉCOLE"), "école");
        assert_eq!(words("ÉCOLE Ünd"), "école ünd");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(words(""), "");
        assert_eq!(chars(""), "");
        assert_eq!(words("   ...  "), "");
    }

    #[test]
    fn normalize_into_reuses_buffer() {
        let n = TextNormalizer::new(Granularity::Word);
        let mut buf = String::with_capacity(128);
        n.normalize_into("First Text", &mut buf);
        assert_eq!(buf, "first text");
        let cap = buf.capacity();
        n.normalize_into("second", &mut buf);
        assert_eq!(buf, "second");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn idempotent() {
        let input = "It's the -- \u{201C}best\u{201D} of TIMES,\n\tit was";
        for g in Granularity::ALL {
            let n = TextNormalizer::new(g);
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "{g} normalization not idempotent");
        }
    }

    #[test]
    fn input_is_untouched() {
        let input = String::from("Keep ME");
        let _ = words(&input);
        assert_eq!(input, "Keep ME");
    }
}
