//! Configuration sweep.
//!
//! For each granularity (word first) and each length `1..=max_len`, the
//! target author is compared with two candidates. The closer candidate wins
//! the round. A granularity stops at the first length where either
//! comparison shares no n-gram with the target.

use std::fmt;

use stylo_core::Corpus;
use stylo_types::{CorpusError, Distance, Granularity, NgramConfig, DEFAULT_TOP_N};
use tracing::{debug, info};

/// Parameters of one sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub target: String,
    pub candidates: [String; 2],
    pub max_len: usize,
    pub num: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            target: "C".to_owned(),
            candidates: ["A".to_owned(), "B".to_owned()],
            max_len: 20,
            num: DEFAULT_TOP_N,
        }
    }
}

/// Outcome of one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub config: NgramConfig,
    pub distances: [Distance; 2],
    /// Index into `SweepConfig::candidates`.
    pub winner: usize,
    /// Second n-gram of the first loaded document, if it has two.
    pub sample: Option<String>,
}

/// Where a granularity pass ended early for lack of shared n-grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    pub config: NgramConfig,
}

/// Scored rounds and early stops of one sweep, in evaluation order.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub candidates: [String; 2],
    pub target: String,
    pub rounds: Vec<Round>,
    pub cutoffs: Vec<Cutoff>,
}

impl SweepReport {
    /// Rounds won by each candidate.
    pub fn wins(&self) -> [usize; 2] {
        let mut wins = [0; 2];
        for round in &self.rounds {
            wins[round.winner] += 1;
        }
        wins
    }
}

/// Closer candidate wins; an exact tie goes to the second.
fn pick_winner(distances: &[Distance; 2]) -> usize {
    if distances[0].value < distances[1].value {
        0
    } else {
        1
    }
}

/// Second n-gram of document 0 under the active model.
fn sample_ngram(corpus: &Corpus) -> Option<String> {
    corpus.active_model()?.document(0)?.ngrams().get(1).cloned()
}

/// Runs the sweep, leaving the last evaluated configuration active.
///
/// Only the model of the configuration being scored is kept cached; the
/// previous one is dropped before the next is built.
///
/// # Errors
///
/// Fails with `CorpusError::UnknownAuthor` if the target or a candidate has
/// no documents.
pub fn run_sweep(corpus: &mut Corpus, config: &SweepConfig) -> Result<SweepReport, CorpusError> {
    let mut report = SweepReport {
        candidates: config.candidates.clone(),
        target: config.target.clone(),
        rounds: Vec::new(),
        cutoffs: Vec::new(),
    };

    let mut previous = None;
    for granularity in Granularity::ALL {
        for length in 1..=config.max_len {
            let ngram_config = NgramConfig {
                length,
                granularity,
            };
            if let Some(done) = previous.replace(ngram_config) {
                corpus.drop_model(done);
            }
            corpus.set_model(ngram_config);

            corpus.summarise(&config.target, config.num)?;
            for candidate in &config.candidates {
                corpus.summarise(candidate, config.num)?;
            }

            let distances = [
                corpus.distance(&config.target, &config.candidates[0])?,
                corpus.distance(&config.target, &config.candidates[1])?,
            ];

            if !distances.iter().all(Distance::has_evidence) {
                debug!(%ngram_config, "no shared n-grams, skipping longer lengths");
                report.cutoffs.push(Cutoff {
                    config: ngram_config,
                });
                break;
            }

            let winner = pick_winner(&distances);
            info!(
                %ngram_config,
                first = distances[0].value,
                second = distances[1].value,
                winner = %config.candidates[winner],
                "round"
            );
            report.rounds.push(Round {
                config: ngram_config,
                distances,
                winner,
                sample: sample_ngram(corpus),
            });
        }
    }

    Ok(report)
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = &self.candidates;
        for round in &self.rounds {
            writeln!(f, "{}", round.config)?;
            if let Some(sample) = &round.sample {
                writeln!(f, "  sample: {:?}", sample)?;
            }
            writeln!(f, "  {} vs {}: {}", self.target, a, round.distances[0])?;
            writeln!(f, "  {} vs {}: {}", self.target, b, round.distances[1])?;
            writeln!(f, "  closer: {}", self.candidates[round.winner])?;
        }
        for cutoff in &self.cutoffs {
            writeln!(f, "stopped at {}: no shared n-grams", cutoff.config)?;
        }
        let [wa, wb] = self.wins();
        writeln!(f, "---------")?;
        writeln!(f, "{} closer to {}: {} of {}", self.target, a, wa, self.rounds.len())?;
        write!(f, "{} closer to {}: {} of {}", self.target, b, wb, self.rounds.len())
    }
}
