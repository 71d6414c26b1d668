//! Keyword extraction
//!
//! [`extraction::KeywordExtractor`] ranks candidate words; [`combination`]
//! merges ranked neighbours into multi-word phrases.

pub mod combination;
pub mod extraction;
