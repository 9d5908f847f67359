//! Text analysis pipeline.
//!
//! This module provides the per-document processing components:
//! - **Normalizer**: Cleans raw text according to the n-gram granularity
//! - **Tokenizer**: Splits word-normalized text into words
//! - **Ngram**: Slides a window over words or characters
//! - **Frequency**: Counts n-gram occurrences in one document

pub mod frequency;
pub mod ngram;
pub mod normalizer;
pub mod tokenizer;

pub use frequency::NgramFrequencies;
pub use ngram::{NgramExtractor, SlidingWindowExtractor};
pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;
