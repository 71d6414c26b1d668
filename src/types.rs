//! Core types for sketchnote_textrank
//!
//! This module defines the fundamental data structures used throughout the library,
//! including tagged tokens, ranked results, and configuration.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag is an adjective
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Adjective)
    }

    /// Check if a token with this tag may become a keyword graph vertex
    pub fn is_keyword_class(&self) -> bool {
        self.is_noun() || matches!(self, PosTag::Adjective | PosTag::Other)
    }

    /// Check if this tag can open a Combination (`[adjective|noun][noun]`)
    pub fn can_open_combination(&self) -> bool {
        self.is_noun() || self.is_adjective()
    }

    /// Get the universal POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

// ============================================================================
// Tokens & results
// ============================================================================

/// A token as produced by a part-of-speech tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The surface form
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Position in the tagged sequence
    pub index: usize,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, pos: PosTag, index: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            index,
        }
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Display form (a merged phrase when post-processing found one)
    pub text: String,
    /// The graph vertex this keyword was ranked as
    pub lemma: String,
    /// The TextRank score of the vertex
    pub score: f64,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
}

/// A sentence chosen for a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// The sentence text, verbatim from the note
    pub text: String,
    /// Index of the chunk the sentence belongs to
    pub chunk: usize,
    /// Position of the sentence within the whole note
    pub position: usize,
    /// TextRank score within its chunk (1.0 for chunks that were not ranked)
    pub score: f64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of the iterative scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum iterations before giving up on convergence
    pub max_iterations: usize,
    /// Convergence threshold on the RMS score difference
    pub convergence_threshold: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 30,
            convergence_threshold: 1e-4,
        }
    }
}

impl RankConfig {
    /// Validate the scorer parameters
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Configuration for keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Scorer parameters
    #[serde(default)]
    pub rank: RankConfig,
    /// Window radius for co-occurrence edges
    pub window_size: usize,
    /// Number of keywords to return
    pub top_n: usize,
    /// Weight edges by lexical similarity instead of plain co-occurrence
    pub biased: bool,
    /// Merge adjacent ranked words into phrases
    pub use_post_processing: bool,
    /// Minimum biased edge weight (`2 - distance`) for an edge to be kept
    pub edge_threshold: f64,
    /// Minimum token length in characters
    pub min_token_length: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            rank: RankConfig::default(),
            window_size: 3,
            top_n: 10,
            biased: true,
            use_post_processing: true,
            edge_threshold: 0.65,
            min_token_length: 3,
            language: default_language(),
            stopwords: Vec::new(),
        }
    }
}

impl KeywordConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;

        if self.window_size == 0 {
            return Err(TextRankError::invalid_config("window_size must be >= 1"));
        }

        if !self.edge_threshold.is_finite() {
            return Err(TextRankError::invalid_config(
                "edge_threshold must be a finite number",
            ));
        }

        Ok(())
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.rank.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.rank.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.rank.convergence_threshold = threshold;
        self
    }

    /// Builder method: set window radius
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set number of keywords to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: toggle similarity-biased edges
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Builder method: toggle phrase merging
    pub fn with_post_processing(mut self, enabled: bool) -> Self {
        self.use_post_processing = enabled;
        self
    }

    /// Builder method: set biased edge acceptance threshold
    pub fn with_edge_threshold(mut self, threshold: f64) -> Self {
        self.edge_threshold = threshold;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add custom stopwords
    pub fn with_stopwords(mut self, words: &[&str]) -> Self {
        self.stopwords.extend(words.iter().map(|w| w.to_string()));
        self
    }
}

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Scorer parameters
    #[serde(default)]
    pub rank: RankConfig,
    /// Sentences kept per chunk (`None` = a third of the chunk, at least one)
    #[serde(default)]
    pub top_n: Option<usize>,
    /// Weight edges by sentence distance instead of lemma overlap
    pub biased: bool,
    /// Sentences per independently summarized chunk
    pub chunk_size: usize,
    /// Window radius for sentence edges
    pub window_size: usize,
    /// Minimum biased edge weight (`2 - distance`) for an edge to be kept
    pub edge_threshold: f64,
    /// Language code for stopwords
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            rank: RankConfig::default(),
            top_n: Some(10),
            biased: false,
            chunk_size: 5,
            window_size: 5,
            edge_threshold: 0.65,
            language: default_language(),
            stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;

        if self.chunk_size == 0 {
            return Err(TextRankError::invalid_config("chunk_size must be > 0"));
        }

        if self.window_size == 0 {
            return Err(TextRankError::invalid_config("window_size must be >= 1"));
        }

        if self.top_n == Some(0) {
            return Err(TextRankError::invalid_config(
                "top_n must be > 0 when set",
            ));
        }

        if !self.edge_threshold.is_finite() {
            return Err(TextRankError::invalid_config(
                "edge_threshold must be a finite number",
            ));
        }

        Ok(())
    }

    /// Number of sentences to keep from a chunk of `chunk_len` sentences
    pub fn sentences_for_chunk(&self, chunk_len: usize) -> usize {
        self.top_n.unwrap_or_else(|| (chunk_len / 3).max(1))
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.rank.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.rank.max_iterations = max_iterations;
        self
    }

    /// Builder method: set sentences per chunk (`None` = a third of the chunk)
    pub fn with_top_n(mut self, top_n: Option<usize>) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: toggle distance-biased edges
    pub fn with_biased(mut self, biased: bool) -> Self {
        self.biased = biased;
        self
    }

    /// Builder method: set chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Builder method: set window radius
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_classes() {
        assert!(PosTag::Noun.is_keyword_class());
        assert!(PosTag::ProperNoun.is_keyword_class());
        assert!(PosTag::Adjective.is_keyword_class());
        assert!(PosTag::Other.is_keyword_class());
        assert!(!PosTag::Verb.is_keyword_class());
        assert!(!PosTag::Punctuation.is_keyword_class());

        assert!(PosTag::Adjective.can_open_combination());
        assert!(!PosTag::Other.can_open_combination());
    }

    #[test]
    fn test_keyword_config_defaults() {
        let config = KeywordConfig::default();
        assert_eq!(config.window_size, 3);
        assert_eq!(config.top_n, 10);
        assert!(config.biased);
        assert!(config.use_post_processing);
        assert!((config.edge_threshold - 0.65).abs() < 1e-12);
        assert_eq!(config.rank.max_iterations, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let bad = KeywordConfig::default().with_damping(1.5);
        assert!(bad.validate().is_err());

        let bad = KeywordConfig::default().with_window_size(0);
        assert!(bad.validate().is_err());

        let bad = KeywordConfig::default().with_max_iterations(0);
        assert!(bad.validate().is_err());

        let bad = SummaryConfig::default().with_chunk_size(0);
        assert!(bad.validate().is_err());

        let bad = SummaryConfig::default().with_top_n(Some(0));
        assert!(bad.validate().is_err());

        assert!(SummaryConfig::default().with_top_n(None).validate().is_ok());
    }

    #[test]
    fn test_sentences_for_chunk() {
        let config = SummaryConfig::default().with_top_n(None);
        assert_eq!(config.sentences_for_chunk(5), 1);
        assert_eq!(config.sentences_for_chunk(2), 1);
        assert_eq!(config.sentences_for_chunk(9), 3);

        let config = SummaryConfig::default().with_top_n(Some(2));
        assert_eq!(config.sentences_for_chunk(5), 2);
    }

    #[test]
    fn test_config_json_missing_optional_fields() {
        let json = r#"{
            "window_size": 4,
            "top_n": 5,
            "biased": false,
            "use_post_processing": true,
            "edge_threshold": 0.65,
            "min_token_length": 3
        }"#;
        let config = KeywordConfig::from_json(json).unwrap();
        assert_eq!(config.window_size, 4);
        assert_eq!(config.language, "en");
        assert_eq!(config.rank, RankConfig::default());
        assert!(config.stopwords.is_empty());
    }

    #[test]
    fn test_config_json_rejects_invalid() {
        let json = r#"{
            "rank": {"damping": 2.0, "max_iterations": 30, "convergence_threshold": 0.0001},
            "top_n": 3,
            "biased": false,
            "chunk_size": 5,
            "window_size": 5,
            "edge_threshold": 0.65
        }"#;
        let err = SummaryConfig::from_json(json).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_summary_config_to_json() {
        let json = SummaryConfig::default().to_json().unwrap();
        assert!(json.contains("\"chunk_size\":5"));
    }
}
