//! Labelled document store and author statistics.
//!
//! Data flow, per configuration:
//!
//! ```text
//! raw text -> normalize -> extract n-grams -> count      (per document, CorpusModel)
//!          -> aggregate top N, mean / stdev               (per author, AuthorSummary)
//!          -> euclidean distance over shared n-grams      (per author pair, Distance)
//! ```
//!
//! Threading:
//! - [`Corpus`] is a plain owned value with no interior mutability. A
//!   summary becomes visible only once it is fully computed, since it is
//!   inserted in one step under `&mut self`.

mod aggregate;
mod api;
mod distance;
mod model;
mod stats;
mod types;

pub use aggregate::{aggregate, AuthorSummary};
pub use distance::compute_distance;
pub use model::{CorpusModel, DocumentModel};
pub use stats::CorpusStats;
pub use types::{AuthorDocs, Corpus, CorpusMetrics, Document};

#[cfg(test)]
mod tests {
    use super::*;
    use stylo_types::{CorpusError, Granularity, NgramConfig, DEFAULT_TOP_N};

    fn cat_corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.insert("the cat sat", "A").unwrap();
        corpus.insert("the cat ran", "A").unwrap();
        corpus
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut corpus = Corpus::new();
        let ids = corpus
            .insert_batch(&[("one", "A"), ("two", "B"), ("three", "A")])
            .unwrap();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.author_documents("A"), Some(&[0, 2][..]));
        assert_eq!(corpus.author_documents("B"), Some(&[1][..]));
        assert_eq!(corpus.author_documents("C"), None);
        assert_eq!(corpus.authors().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn raw_text_is_retained() {
        let mut corpus = Corpus::new();
        let id = corpus.insert("Hello, World!", "A").unwrap();
        corpus.set_model(NgramConfig::word(1));
        let doc = corpus.get(id).expect("document stored");
        assert_eq!(doc.text(), "Hello, World!");
        assert_eq!(doc.author(), "A");
        assert_eq!(
            corpus.active_model().and_then(|m| m.document(id)).map(|d| d.normalized()),
            Some("hello world")
        );
    }

    #[test]
    fn cat_scenario_frequencies_and_summary() {
        let mut corpus = cat_corpus();
        let model = corpus.set_model(NgramConfig::word(1));

        let first: Vec<_> = model.document(0).unwrap().frequencies().iter().collect();
        let second: Vec<_> = model.document(1).unwrap().frequencies().iter().collect();
        assert_eq!(first, [("the", 1), ("cat", 1), ("sat", 1)]);
        assert_eq!(second, [("the", 1), ("cat", 1), ("ran", 1)]);

        let summary = corpus.summarise("A", 5).expect("author known");
        let rows: Vec<_> = summary
            .iter()
            .map(|s| (s.ngram.as_str(), s.total, s.mean, s.stdev))
            .collect();
        assert_eq!(
            rows,
            [
                ("the", 2, 1.0, 0.0),
                ("cat", 2, 1.0, 0.0),
                ("sat", 1, 0.5, 0.5),
                ("ran", 1, 0.5, 0.5),
            ]
        );
        assert_eq!(summary.num_documents(), 2);
    }

    #[test]
    fn rebuilding_a_model_is_idempotent() {
        let corpus = cat_corpus();
        for g in Granularity::ALL {
            let config = NgramConfig {
                length: 2,
                granularity: g,
            };
            let a = corpus.build_model(config);
            let b = corpus.build_model(config);
            for id in 0..2 {
                assert_eq!(a.document(id), b.document(id));
            }
        }
    }

    #[test]
    fn word_unigram_count_matches_token_count() {
        let mut corpus = Corpus::new();
        corpus
            .insert("It was -- the best of times; it was the worst.", "A")
            .unwrap();
        let model = corpus.set_model(NgramConfig::word(1));
        let doc = model.document(0).unwrap();
        let tokens = doc.normalized().split_whitespace().count();
        assert_eq!(doc.frequencies().total(), tokens as u64);
        assert_eq!(doc.ngrams().len(), tokens);
    }

    #[test]
    fn long_ngrams_yield_empty_maps() {
        let mut corpus = Corpus::new();
        corpus.insert("ab", "A").unwrap();
        let model = corpus.set_model(NgramConfig::char(3));
        let doc = model.document(0).unwrap();
        assert!(doc.ngrams().is_empty());
        assert!(doc.frequencies().is_empty());

        let summary = corpus.summarise("A", DEFAULT_TOP_N).expect("author known");
        assert!(summary.is_empty());
    }

    #[test]
    fn unknown_author_is_an_error() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        assert_eq!(
            corpus.summarise("Z", 5).unwrap_err(),
            CorpusError::UnknownAuthor {
                author: "Z".to_owned()
            }
        );
        assert!(matches!(
            corpus.distance("A", "Z"),
            Err(CorpusError::UnknownAuthor { .. })
        ));
    }

    #[test]
    fn summarise_requires_a_model() {
        let mut corpus = cat_corpus();
        assert_eq!(
            corpus.summarise("A", 5).unwrap_err(),
            CorpusError::ModelNotSet
        );
    }

    #[test]
    fn distance_requires_current_summaries() {
        let mut corpus = cat_corpus();
        corpus.insert("the dog sat", "B").unwrap();
        corpus.set_model(NgramConfig::word(1));
        corpus.summarise("A", 5).unwrap();
        assert!(matches!(
            corpus.distance("A", "B"),
            Err(CorpusError::NotSummarised { .. })
        ));

        corpus.summarise("B", 5).unwrap();
        assert!(corpus.distance("A", "B").is_ok());

        // A summary from another configuration is stale.
        corpus.set_model(NgramConfig::char(2));
        corpus.summarise("A", 5).unwrap();
        assert!(matches!(
            corpus.distance("A", "B"),
            Err(CorpusError::NotSummarised { .. })
        ));
    }

    #[test]
    fn summary_is_replaced_per_configuration() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        corpus.summarise("A", 20).unwrap();
        assert!(corpus.summary("A").unwrap().get("cat").is_some());

        corpus.set_model(NgramConfig::word(2));
        corpus.summarise("A", 20).unwrap();
        let summary = corpus.summary("A").unwrap();
        assert_eq!(summary.config(), NgramConfig::word(2));
        assert!(summary.get("cat").is_none());
        assert!(summary.get("the, cat").is_some());
    }

    #[test]
    fn distance_between_authors() {
        let mut corpus = Corpus::new();
        corpus.insert("a a a b", "A").unwrap();
        corpus.insert("a b b b", "B").unwrap();
        corpus.insert("x y z", "C").unwrap();
        corpus.set_model(NgramConfig::word(1));
        for author in ["A", "B", "C"] {
            corpus.summarise(author, 20).unwrap();
        }

        let ab = corpus.distance("A", "B").unwrap();
        assert_eq!(ab.overlap, 2);
        // (3-1)^2 + (1-3)^2 = 8
        assert_eq!(ab.value, 8f64.sqrt());
        assert_eq!(corpus.distance("B", "A").unwrap(), ab);

        let ac = corpus.distance("A", "C").unwrap();
        assert_eq!(ac.value, 0.0);
        assert!(!ac.has_evidence());

        assert_eq!(corpus.distance("A", "A").unwrap().value, 0.0);
    }

    #[test]
    fn models_are_cached_per_configuration() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        corpus.set_model(NgramConfig::char(3));
        corpus.set_model(NgramConfig::word(1));
        assert_eq!(corpus.metrics().models_built, 2);
        assert_eq!(corpus.active_config(), Some(NgramConfig::word(1)));
        assert!(corpus.model(NgramConfig::char(3)).is_some());
        assert_eq!(corpus.stats().cached_models, 2);
    }

    #[test]
    fn dropped_models_are_rebuilt_on_demand() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        let before = corpus.summarise("A", 5).unwrap().clone();

        assert!(corpus.drop_model(NgramConfig::word(1)));
        assert!(!corpus.drop_model(NgramConfig::word(1)));
        assert_eq!(corpus.stats().cached_models, 0);
        assert!(corpus.active_model().is_none());
        assert_eq!(corpus.active_config(), Some(NgramConfig::word(1)));
        // Summaries outlive the model they came from.
        assert!(corpus.distance("A", "A").is_ok());

        let after = corpus.summarise("A", 5).unwrap();
        assert_eq!(after.stats(), before.stats());
        assert_eq!(corpus.metrics().models_built, 2);
    }

    #[test]
    fn retain_models_filters_cache() {
        let mut corpus = cat_corpus();
        for config in [
            NgramConfig::word(1),
            NgramConfig::word(2),
            NgramConfig::char(3),
        ] {
            corpus.set_model(config);
        }
        corpus.retain_models(|config| config.granularity.is_word());
        assert_eq!(corpus.stats().cached_models, 2);
        assert!(corpus.model(NgramConfig::char(3)).is_none());
        assert!(corpus.model(NgramConfig::word(2)).is_some());
    }

    #[test]
    fn insert_invalidates_models_and_summaries() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        corpus.summarise("A", 5).unwrap();

        corpus.insert("the cat cat", "A").unwrap();
        assert!(corpus.active_model().is_none());
        assert!(corpus.summary("A").is_none());
        assert_eq!(corpus.active_config(), Some(NgramConfig::word(1)));

        let summary = corpus.summarise("A", 5).unwrap();
        assert_eq!(summary.num_documents(), 3);
        assert_eq!(summary.get("cat").map(|s| s.total), Some(4));
    }

    #[test]
    fn stats_display() {
        let mut corpus = cat_corpus();
        corpus.insert("mystery text", "C").unwrap();
        let stats = corpus.stats();
        assert_eq!(stats.num_documents, 3);
        assert_eq!(stats.num_authors(), 2);
        assert_eq!(stats.authors, [("A".to_owned(), 2), ("C".to_owned(), 1)]);

        let text = stats.to_string();
        assert!(text.contains("A:\t\t2"));
        assert!(text.contains("Total:\t\t3"));
    }

    #[test]
    fn metrics_and_clear() {
        let mut corpus = cat_corpus();
        corpus.set_model(NgramConfig::word(1));
        corpus.summarise("A", 5).unwrap();

        let metrics = corpus.metrics();
        assert_eq!(metrics.documents_inserted, 2);
        assert_eq!(metrics.models_built, 1);
        assert_eq!(metrics.summaries_computed, 1);

        corpus.clear();
        assert!(corpus.is_empty());
        assert_eq!(corpus.authors().count(), 0);
        assert_eq!(corpus.active_config(), None);
        assert_eq!(corpus.metrics().documents_inserted, 0);
    }
}
