//! Corpus types.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use stylo_types::{DocId, NgramConfig};

use crate::corpus::aggregate::AuthorSummary;
use crate::corpus::model::CorpusModel;

/// Document ids of one author, in insertion order.
pub type AuthorDocs = SmallVec<[DocId; 8]>;

/// A stored document. The raw text is never modified.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) text: String,
    pub(crate) author: String,
}

impl Document {
    /// The raw text as inserted.
    #[inline(always)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The author label given at insertion.
    #[inline(always)]
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Labelled document collection and the aggregate root of the engine.
///
/// Owns the documents, the author grouping, the derived n-gram models (one
/// per configuration) and the latest summary of each author.
#[derive(Debug, Default)]
pub struct Corpus {
    pub(crate) documents: Vec<Document>,
    pub(crate) author_docs: FxHashMap<String, AuthorDocs>,
    /// Author labels in first-insertion order.
    pub(crate) authors: Vec<String>,
    pub(crate) models: FxHashMap<NgramConfig, CorpusModel>,
    pub(crate) active: Option<NgramConfig>,
    pub(crate) summaries: FxHashMap<String, AuthorSummary>,
    pub(crate) documents_inserted: u64,
    pub(crate) models_built: u64,
    pub(crate) summaries_computed: u64,
}

impl Corpus {
    /// Creates a new, empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in the corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the corpus contains no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Removes all documents, models and summaries.
    pub fn clear(&mut self) {
        self.documents.clear();
        self.author_docs.clear();
        self.authors.clear();
        self.models.clear();
        self.active = None;
        self.summaries.clear();
        self.documents_inserted = 0;
        self.models_built = 0;
        self.summaries_computed = 0;
    }

    /// Returns basic counters about the corpus's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> CorpusMetrics {
        CorpusMetrics {
            documents_inserted: self.documents_inserted,
            models_built: self.models_built,
            summaries_computed: self.summaries_computed,
        }
    }
}

/// Basic operational counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusMetrics {
    /// Documents inserted since creation or the last clear.
    pub documents_inserted: u64,
    /// N-gram models built, cache hits excluded.
    pub models_built: u64,
    /// Author summaries computed.
    pub summaries_computed: u64,
}
