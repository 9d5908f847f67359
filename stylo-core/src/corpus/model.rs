//! Per-configuration derived data.
//!
//! A [`CorpusModel`] is the result of running normalization, extraction and
//! counting over every stored document for one [`NgramConfig`]. Building it
//! never touches the documents themselves, so models for different
//! configurations can coexist in the corpus cache.

use stylo_types::{DocId, NgramConfig};
use tracing::{debug, trace};

use crate::analyzer::{NgramExtractor, NgramFrequencies, SlidingWindowExtractor, TextNormalizer};
use crate::corpus::types::{Corpus, Document};

/// Derived data of one document under one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentModel {
    normalized: String,
    ngrams: Vec<String>,
    frequencies: NgramFrequencies,
}

impl DocumentModel {
    /// Normalizes `raw`, extracts its n-grams and counts them.
    ///
    /// # Example
    ///
    /// ```
    /// use stylo_core::corpus::DocumentModel;
    /// use stylo_types::NgramConfig;
    ///
    /// let model = DocumentModel::build("The cat, the hat.", NgramConfig::word(1));
    /// assert_eq!(model.normalized(), "the cat the hat");
    /// assert_eq!(model.frequencies().get("the"), 2);
    /// ```
    pub fn build(raw: &str, config: NgramConfig) -> Self {
        let normalized = TextNormalizer::new(config.granularity).normalize(raw);

        let mut ngrams = Vec::new();
        SlidingWindowExtractor::new(config).extract(&normalized, |g| ngrams.push(g.to_owned()));

        let frequencies = NgramFrequencies::from_ngrams(&ngrams);
        Self {
            normalized,
            ngrams,
            frequencies,
        }
    }

    /// Normalized text.
    #[inline(always)]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// N-grams in text order.
    #[inline(always)]
    pub fn ngrams(&self) -> &[String] {
        &self.ngrams
    }

    /// Occurrence counts.
    #[inline(always)]
    pub fn frequencies(&self) -> &NgramFrequencies {
        &self.frequencies
    }
}

/// Derived data of every document under one configuration, indexed by id.
#[derive(Debug, Clone)]
pub struct CorpusModel {
    config: NgramConfig,
    documents: Vec<DocumentModel>,
}

impl CorpusModel {
    pub(crate) fn build(documents: &[Document], config: NgramConfig) -> Self {
        let documents = documents
            .iter()
            .enumerate()
            .map(|(id, doc)| {
                let model = DocumentModel::build(&doc.text, config);
                trace!(
                    doc_id = id,
                    ngrams = model.ngrams.len(),
                    distinct = model.frequencies.len(),
                    "document model built"
                );
                model
            })
            .collect();
        Self { config, documents }
    }

    /// Configuration this model was built for.
    #[inline(always)]
    pub fn config(&self) -> NgramConfig {
        self.config
    }

    /// Derived data for one document.
    #[inline(always)]
    pub fn document(&self, doc_id: DocId) -> Option<&DocumentModel> {
        self.documents.get(doc_id as usize)
    }

    /// Number of documents covered.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the model covers no documents.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Corpus {
    /// Builds the model for `config` without caching or activating it.
    pub fn build_model(&self, config: NgramConfig) -> CorpusModel {
        CorpusModel::build(&self.documents, config)
    }

    /// Activates `config`, building its model unless it is already cached.
    ///
    /// Re-activating a cached configuration is free and yields the same
    /// frequencies as the first build.
    pub fn set_model(&mut self, config: NgramConfig) -> &CorpusModel {
        if !self.models.contains_key(&config) {
            let model = CorpusModel::build(&self.documents, config);
            self.models_built += 1;
            debug!(
                length = config.length,
                granularity = %config.granularity,
                documents = model.len(),
                "built n-gram model"
            );
            self.models.insert(config, model);
        }
        self.active = Some(config);
        &self.models[&config]
    }

    /// Configuration selected by the last [`Corpus::set_model`] call.
    #[inline(always)]
    pub fn active_config(&self) -> Option<NgramConfig> {
        self.active
    }

    /// Model of the active configuration, if it is built.
    pub fn active_model(&self) -> Option<&CorpusModel> {
        self.active.and_then(|config| self.models.get(&config))
    }

    /// Cached model for `config`, if any.
    pub fn model(&self, config: NgramConfig) -> Option<&CorpusModel> {
        self.models.get(&config)
    }

    /// Evicts the cached model for `config`. Returns `true` if one was cached.
    ///
    /// Summaries already computed under `config` stay valid, and the active
    /// configuration is unchanged; its model is rebuilt on the next summary.
    pub fn drop_model(&mut self, config: NgramConfig) -> bool {
        let dropped = self.models.remove(&config).is_some();
        if dropped {
            debug!(%config, "dropped n-gram model");
        }
        dropped
    }

    /// Keeps only the cached models whose configuration satisfies `keep`.
    pub fn retain_models<F>(&mut self, mut keep: F)
    where
        F: FnMut(NgramConfig) -> bool,
    {
        self.models.retain(|&config, _| keep(config));
    }
}
