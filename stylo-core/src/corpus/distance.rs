//! Euclidean distance between author summaries.

use smallvec::SmallVec;
use stylo_types::{CorpusError, Distance};
use tracing::debug;

use crate::corpus::aggregate::AuthorSummary;
use crate::corpus::types::Corpus;

/// Distance over the mean counts of the n-grams both summaries share.
///
/// N-grams kept by only one side contribute nothing. With no shared
/// n-gram the value is `0.0` and `overlap` is zero.
///
/// Squared differences are summed smallest first, so swapping the
/// arguments gives a bit-identical result.
pub fn compute_distance(a: &AuthorSummary, b: &AuthorSummary) -> Distance {
    let mut squares: SmallVec<[f64; 32]> = a
        .iter()
        .filter_map(|stat| {
            b.get(&stat.ngram).map(|other| {
                let d = stat.mean - other.mean;
                d * d
            })
        })
        .collect();

    squares.sort_unstable_by(f64::total_cmp);
    let sum: f64 = squares.iter().sum();
    Distance::new(sum.sqrt(), squares.len())
}

impl Corpus {
    /// Distance between the current summaries of two authors.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::UnknownAuthor` for a label without documents,
    /// `CorpusError::ModelNotSet` before any configuration is active, and
    /// `CorpusError::NotSummarised` if either author has no summary under
    /// the active configuration.
    pub fn distance(&self, a: &str, b: &str) -> Result<Distance, CorpusError> {
        self.known_author(a)?;
        self.known_author(b)?;
        let left = self.current_summary(a)?;
        let right = self.current_summary(b)?;
        let distance = compute_distance(left, right);
        debug!(
            a,
            b,
            value = distance.value,
            overlap = distance.overlap,
            "computed distance"
        );
        Ok(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylo_types::{NgramConfig, NgramStat};

    fn summary(author: &str, means: &[(&str, f64)]) -> AuthorSummary {
        let stats = means
            .iter()
            .map(|&(ngram, mean)| NgramStat {
                ngram: ngram.to_owned(),
                total: 0,
                mean,
                stdev: 0.0,
            })
            .collect();
        AuthorSummary::new(author, NgramConfig::word(1), 1, stats)
    }

    #[test]
    fn shared_keys_only() {
        let a = summary("A", &[("x", 4.0), ("y", 1.0), ("only_a", 100.0)]);
        let b = summary("B", &[("x", 1.0), ("y", 5.0), ("only_b", 50.0)]);
        let d = compute_distance(&a, &b);
        assert_eq!(d.value, 5.0);
        assert_eq!(d.overlap, 2);
    }

    #[test]
    fn symmetric() {
        let a = summary("A", &[("p", 0.1), ("q", 7.33), ("r", 2.5), ("s", 1e-3)]);
        let b = summary("B", &[("s", 9.99), ("r", 0.2), ("q", 3.14), ("t", 1.0)]);
        assert_eq!(compute_distance(&a, &b), compute_distance(&b, &a));
    }

    #[test]
    fn self_distance_is_zero() {
        let a = summary("A", &[("x", 3.5), ("y", 1.25)]);
        let d = compute_distance(&a, &a);
        assert_eq!(d.value, 0.0);
        assert_eq!(d.overlap, 2);
        assert!(d.has_evidence());
    }

    #[test]
    fn no_overlap_is_zero_without_evidence() {
        let a = summary("A", &[("x", 3.0)]);
        let b = summary("B", &[("y", 8.0)]);
        let d = compute_distance(&a, &b);
        assert_eq!(d.value, 0.0);
        assert_eq!(d.overlap, 0);
        assert!(!d.has_evidence());
    }

    #[test]
    fn never_negative() {
        let a = summary("A", &[("x", -3.0), ("y", 0.0)]);
        let b = summary("B", &[("x", 3.0), ("y", -1.0)]);
        assert!(compute_distance(&a, &b).value >= 0.0);
    }
}
