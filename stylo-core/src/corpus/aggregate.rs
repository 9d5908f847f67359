//! Per-author aggregation.
//!
//! Merges the frequency maps of an author's documents and keeps the `num`
//! n-grams with the highest total count. For each kept n-gram the
//! per-document counts are zero-padded to one entry per document before the
//! mean and population standard deviation are taken, so documents that
//! never use the n-gram pull the mean down instead of being ignored.
//!
//! ## Tie-break
//!
//! N-grams with equal totals keep first-seen order: documents are visited
//! in insertion order and each document's n-grams in first-occurrence
//! order, and the ranking sort is stable.

use core::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use stylo_types::stats::{mean, population_stdev, round2};
use stylo_types::{CorpusError, NgramConfig, NgramStat};
use tracing::debug;

use crate::analyzer::NgramFrequencies;
use crate::corpus::types::Corpus;

type Counts = SmallVec<[u32; 8]>;

struct Tally {
    /// Counts from documents that contain the n-gram, unpadded.
    counts: Counts,
    total: u64,
}

/// Pads `counts` with zeros up to one entry per document.
#[inline]
fn padded(mut counts: Counts, num_documents: usize) -> Counts {
    debug_assert!(counts.len() <= num_documents);
    counts.resize(num_documents, 0);
    counts
}

/// Ranks the n-grams of `documents` and computes their statistics.
///
/// Returns at most `num` entries, highest total first. An empty document
/// list yields an empty result.
///
/// # Example
///
/// ```
/// use stylo_core::analyzer::NgramFrequencies;
/// use stylo_core::corpus::aggregate;
///
/// let a = NgramFrequencies::from_ngrams(["the", "cat", "sat"]);
/// let b = NgramFrequencies::from_ngrams(["the", "cat", "ran"]);
/// let stats = aggregate(&[&a, &b], 5);
///
/// assert_eq!(stats[0].ngram, "the");
/// assert_eq!((stats[0].mean, stats[0].stdev), (1.0, 0.0));
/// assert_eq!((stats[2].mean, stats[2].stdev), (0.5, 0.5));
/// ```
pub fn aggregate(documents: &[&NgramFrequencies], num: usize) -> Vec<NgramStat> {
    let num_documents = documents.len();

    let mut tallies: Vec<(&str, Tally)> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for freq in documents {
        for (ngram, count) in freq.iter() {
            match index.get(ngram) {
                Some(&slot) => {
                    let tally = &mut tallies[slot].1;
                    tally.counts.push(count);
                    tally.total += count as u64;
                }
                None => {
                    index.insert(ngram, tallies.len());
                    tallies.push((
                        ngram,
                        Tally {
                            counts: smallvec::smallvec![count],
                            total: count as u64,
                        },
                    ));
                }
            }
        }
    }

    // Stable: equal totals stay in discovery order.
    tallies.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    tallies.truncate(num);

    tallies
        .into_iter()
        .map(|(ngram, tally)| {
            let counts = padded(tally.counts, num_documents);
            let avg = mean(&counts);
            let stdev = population_stdev(&counts, avg);
            NgramStat {
                ngram: ngram.to_owned(),
                total: tally.total,
                mean: round2(avg),
                stdev: round2(stdev),
            }
        })
        .collect()
}

/// Top-N n-gram statistics of one author under one configuration.
#[derive(Debug, Clone)]
pub struct AuthorSummary {
    author: String,
    config: NgramConfig,
    num_documents: usize,
    stats: Vec<NgramStat>,
    index: FxHashMap<String, usize>,
}

impl AuthorSummary {
    /// Wraps ranked statistics.
    pub fn new(
        author: &str,
        config: NgramConfig,
        num_documents: usize,
        stats: Vec<NgramStat>,
    ) -> Self {
        let index = stats
            .iter()
            .enumerate()
            .map(|(i, s)| (s.ngram.clone(), i))
            .collect();
        Self {
            author: author.to_owned(),
            config,
            num_documents,
            stats,
            index,
        }
    }

    /// Author label.
    #[inline(always)]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Configuration the statistics were computed under.
    #[inline(always)]
    pub fn config(&self) -> NgramConfig {
        self.config
    }

    /// Number of documents the statistics span.
    #[inline(always)]
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Statistics of one n-gram, if it made the top N.
    pub fn get(&self, ngram: &str) -> Option<&NgramStat> {
        self.index.get(ngram).map(|&i| &self.stats[i])
    }

    /// Statistics ranked by total, highest first.
    #[inline(always)]
    pub fn stats(&self) -> &[NgramStat] {
        &self.stats
    }

    /// Iterates the ranked statistics.
    pub fn iter(&self) -> impl Iterator<Item = &NgramStat> + '_ {
        self.stats.iter()
    }

    /// Number of n-grams kept.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns `true` if no n-gram was kept.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl fmt::Display for AuthorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Author: {} ({})", self.author, self.config)?;
        writeln!(f, "---------")?;
        writeln!(f, "ngram,\t\tav_occurrence,\t\tstd_deviation")?;
        for stat in &self.stats {
            writeln!(f, "{:?},\t\t{:.2},\t\t{:.2}", stat.ngram, stat.mean, stat.stdev)?;
        }
        Ok(())
    }
}

impl Corpus {
    /// Computes and stores the top-`num` summary of `author` under the
    /// active configuration.
    ///
    /// The stored summary replaces any earlier one for the same author.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::UnknownAuthor` if no document is attributed to
    /// `author`, and `CorpusError::ModelNotSet` if no configuration has been
    /// activated.
    pub fn summarise(&mut self, author: &str, num: usize) -> Result<&AuthorSummary, CorpusError> {
        self.known_author(author)?;
        let config = self.active.ok_or(CorpusError::ModelNotSet)?;

        // Inserts since the last build drop the cache; rebuild if needed.
        self.set_model(config);
        let model = &self.models[&config];
        let ids = &self.author_docs[author];
        let documents: SmallVec<[&NgramFrequencies; 8]> = ids
            .iter()
            .filter_map(|&id| model.document(id))
            .map(|doc| doc.frequencies())
            .collect();
        debug_assert_eq!(documents.len(), ids.len());

        let stats = aggregate(&documents, num);
        let summary = AuthorSummary::new(author, config, documents.len(), stats);
        debug!(
            author,
            documents = summary.num_documents(),
            kept = summary.len(),
            num,
            "summarised author"
        );

        self.summaries_computed += 1;
        self.summaries.insert(author.to_owned(), summary);
        Ok(&self.summaries[author])
    }

    /// Latest stored summary of `author`, under whatever configuration it
    /// was computed.
    pub fn summary(&self, author: &str) -> Option<&AuthorSummary> {
        self.summaries.get(author)
    }

    /// Summary of `author` computed under the active configuration.
    pub(crate) fn current_summary(&self, author: &str) -> Result<&AuthorSummary, CorpusError> {
        self.known_author(author)?;
        let config = self.active.ok_or(CorpusError::ModelNotSet)?;
        self.summaries
            .get(author)
            .filter(|summary| summary.config() == config)
            .ok_or_else(|| CorpusError::NotSummarised {
                author: author.to_owned(),
            })
    }
}
