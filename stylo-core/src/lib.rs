//! N-gram stylometry engine.
//!
//! Given documents labelled with an author, Stylo counts word or character
//! n-grams per document, summarises each author's most frequent n-grams as
//! mean and standard deviation of the per-document counts, and measures how
//! far apart two authors' summaries are.
//!
//! ```
//! use stylo_core::Corpus;
//! use stylo_types::NgramConfig;
//!
//! let mut corpus = Corpus::new();
//! corpus.insert("the cat sat", "A").unwrap();
//! corpus.insert("the cat ran", "A").unwrap();
//! corpus.insert("the dog sat", "B").unwrap();
//!
//! corpus.set_model(NgramConfig::word(1));
//! corpus.summarise("A", 20).unwrap();
//! corpus.summarise("B", 20).unwrap();
//!
//! let distance = corpus.distance("A", "B").unwrap();
//! assert!(distance.has_evidence());
//! ```

/// Per-document text processing: normalize, tokenize, extract, count.
pub mod analyzer;

/// Document store, per-configuration models, author summaries, distances.
pub mod corpus;

pub use corpus::{AuthorSummary, Corpus, CorpusStats};
