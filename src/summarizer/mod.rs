//! Extractive summarization
//!
//! Sentences are ranked with TextRank in fixed-size chunks and the best of
//! each chunk are kept in their original order.

pub mod selector;
