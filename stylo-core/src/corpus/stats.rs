//! Statistics and CorpusStats.

use stylo_types::NgramConfig;

use crate::corpus::types::Corpus;

/// A snapshot of corpus statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of documents in the corpus.
    pub num_documents: usize,
    /// `(author, document count)` in first-insertion order.
    pub authors: Vec<(String, usize)>,
    /// Number of cached n-gram models.
    pub cached_models: usize,
    /// Active configuration, if any.
    pub active: Option<NgramConfig>,
}

impl Corpus {
    /// Returns corpus statistics.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            num_documents: self.documents.len(),
            authors: self
                .authors
                .iter()
                .map(|a| (a.clone(), self.author_docs.get(a).map_or(0, |ids| ids.len())))
                .collect(),
            cached_models: self.models.len(),
            active: self.active,
        }
    }
}

impl CorpusStats {
    /// Number of distinct author labels.
    pub fn num_authors(&self) -> usize {
        self.authors.len()
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Corpus")?;
        writeln!(f, "Author\t\tNumber of documents")?;
        for (author, count) in &self.authors {
            writeln!(f, "{}:\t\t{}", author, count)?;
        }
        write!(f, "Total:\t\t{}", self.num_documents)?;

        if let Some(config) = self.active {
            write!(f, "\nModel:\t\t{} ({} cached)", config, self.cached_models)?;
        }

        Ok(())
    }
}
