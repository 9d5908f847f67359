//! Public API for inserting and retrieving documents.

use stylo_types::{CorpusError, DocId};
use tracing::trace;

use crate::corpus::types::{AuthorDocs, Corpus, Document};

impl Corpus {
    /// Adds a document attributed to `author` and returns its id.
    ///
    /// Derived models and summaries describe the previous document set, so
    /// they are dropped. The active configuration is kept and its model is
    /// rebuilt on the next summary.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::TooManyDocuments` once every `DocId` is taken.
    pub fn insert(
        &mut self,
        text: impl Into<String>,
        author: &str,
    ) -> Result<DocId, CorpusError> {
        let doc_id = next_doc_id(self.documents.len())?;

        self.documents.push(Document {
            text: text.into(),
            author: author.to_owned(),
        });

        match self.author_docs.get_mut(author) {
            Some(ids) => ids.push(doc_id),
            None => {
                self.author_docs
                    .insert(author.to_owned(), smallvec::smallvec![doc_id]);
                self.authors.push(author.to_owned());
            }
        }

        self.models.clear();
        self.summaries.clear();
        self.documents_inserted += 1;

        trace!(doc_id, author, "inserted document");
        Ok(doc_id)
    }

    /// Adds `(text, author)` pairs in order and returns their ids.
    ///
    /// Stops at the first refused document; earlier ones stay inserted.
    pub fn insert_batch(
        &mut self,
        documents: &[(&str, &str)],
    ) -> Result<Vec<DocId>, CorpusError> {
        documents
            .iter()
            .map(|&(text, author)| self.insert(text, author))
            .collect()
    }

    /// Retrieves a stored document by id.
    #[inline(always)]
    pub fn get(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id as usize)
    }

    /// Author labels in the order they were first seen.
    pub fn authors(&self) -> impl Iterator<Item = &str> + '_ {
        self.authors.iter().map(String::as_str)
    }

    /// Document ids attributed to `author`, in insertion order.
    pub fn author_documents(&self, author: &str) -> Option<&[DocId]> {
        self.author_docs.get(author).map(|ids| ids.as_slice())
    }

    /// Document ids of `author`, or `UnknownAuthor` if there are none.
    pub(crate) fn known_author(&self, author: &str) -> Result<&AuthorDocs, CorpusError> {
        match self.author_docs.get(author) {
            Some(ids) if !ids.is_empty() => Ok(ids),
            _ => Err(CorpusError::UnknownAuthor {
                author: author.to_owned(),
            }),
        }
    }
}

/// Id for the document stored after `count` others.
#[inline]
fn next_doc_id(count: usize) -> Result<DocId, CorpusError> {
    DocId::try_from(count).map_err(|_| CorpusError::TooManyDocuments { count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_document_count() {
        assert_eq!(next_doc_id(0), Ok(0));
        assert_eq!(next_doc_id(41), Ok(41));
        assert_eq!(next_doc_id(DocId::MAX as usize), Ok(DocId::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn id_space_exhaustion_is_an_error() {
        let count = DocId::MAX as usize + 1;
        assert_eq!(
            next_doc_id(count),
            Err(CorpusError::TooManyDocuments { count })
        );
    }
}
