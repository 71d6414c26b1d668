//! Natural Language Processing components
//!
//! Collaborator traits plus the built-in tokenizer, stopword filter and
//! distance measures.

pub mod distance;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

pub use traits::{
    Lemmatizer, PosTagger, SegmentUnit, SentenceDistance, TagScheme, TextSegmenter, WordDistance,
};
