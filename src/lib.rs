//! # sketchnote_textrank
//!
//! TextRank keyword extraction and extractive summarization for short,
//! hand-written notes.
//!
//! ## Features
//!
//! - **Keywords**: noun/adjective candidates ranked on a co-occurrence graph,
//!   with adjacent ranked words merged into phrases
//! - **Summaries**: sentences ranked chunk by chunk and kept in note order
//! - **Pluggable**: tagging, lemmatization, segmentation and distances are
//!   collaborator traits; heuristic defaults are built in
//! - **Unicode-aware**: segmentation follows UAX #29
//!
//! ```
//! use sketchnote_textrank::{extract_keywords, summarize};
//!
//! let note = "Sketchnotes combine drawings and words. Drawings help memory.";
//! let keywords = extract_keywords(note, 5, false, true);
//! assert!(!keywords.is_empty());
//!
//! let summary = summarize(note, Some(1), false);
//! assert!(note.contains(&summary));
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{
    Keyword, KeywordConfig, PosTag, RankConfig, SelectedSentence, SummaryConfig, TaggedToken,
};

// Re-export main functionality
pub use graph::{
    builder::{GraphBuilder, SentenceUnit},
    csr::CsrGraph,
};
pub use nlp::{
    distance::NgramDistance, stopwords::StopwordFilter, tokenizer::Tokenizer, Lemmatizer,
    PosTagger, SegmentUnit, SentenceDistance, TagScheme, TextSegmenter, WordDistance,
};
pub use pagerank::{standard::TextRankScorer, PageRankResult, ScoreMap};
pub use phrase::extraction::{extract_keywords, ExtractionResult, KeywordExtractor};
pub use summarizer::selector::{summarize, Summarizer, SummaryResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
