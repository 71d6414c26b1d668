//! Keyword extraction
//!
//! Tags the note, keeps noun/adjective candidates, ranks them on a
//! co-occurrence graph and optionally merges ranked neighbours into phrases.

use super::combination::{find_combinations, merge_phrases, CombinationEntry};
use crate::errors::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::distance::NgramDistance;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::nlp::traits::{Lemmatizer, PosTagger, TagScheme, WordDistance};
use crate::pagerank::standard::TextRankScorer;
use crate::types::{Keyword, KeywordConfig, TaggedToken};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info_span};

/// Result of keyword extraction with convergence information
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Ranked keywords, best first
    pub keywords: Vec<Keyword>,
    /// Whether the scorer converged
    pub converged: bool,
    /// Number of scorer iterations
    pub iterations: usize,
}

impl ExtractionResult {
    /// Display strings of the keywords, best first
    pub fn texts(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.text.clone()).collect()
    }
}

/// Extracts ranked keywords from a note
#[derive(Debug, Clone)]
pub struct KeywordExtractor<N = Tokenizer, D = NgramDistance> {
    config: KeywordConfig,
    nlp: N,
    distance: D,
    stopwords: StopwordFilter,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the default config and collaborators
    pub fn new() -> Self {
        Self::with_config(KeywordConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: KeywordConfig) -> Self {
        Self::with_collaborators(config, Tokenizer::new(), NgramDistance::new())
    }

    /// Create with custom config, rejecting invalid settings
    pub fn try_new(config: KeywordConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }
}

impl<N, D> KeywordExtractor<N, D>
where
    N: PosTagger + Lemmatizer,
    D: WordDistance,
{
    /// Create with custom config and host-provided collaborators
    pub fn with_collaborators(config: KeywordConfig, nlp: N, distance: D) -> Self {
        let stopwords = StopwordFilter::with_extra(&config.language, &config.stopwords);
        Self {
            config,
            nlp,
            distance,
            stopwords,
        }
    }

    /// Replace the stopword filter
    pub fn with_stopword_filter(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Get the active config
    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Extract keyword display strings, best first
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_with_info(text).texts()
    }

    /// Extract keywords with scores and convergence information
    pub fn extract_with_info(&self, text: &str) -> ExtractionResult {
        let _span = info_span!("extract_keywords", chars = text.len()).entered();

        let tokens = self.nlp.tag(text, TagScheme::LexicalClass);
        let entries: Vec<CombinationEntry> = tokens
            .iter()
            .map(|token| CombinationEntry::new(token.pos, self.candidate_lemma(token)))
            .collect();
        let candidates: Vec<&str> = entries.iter().filter_map(|e| e.lemma.as_deref()).collect();

        debug!(
            tokens = tokens.len(),
            candidates = candidates.len(),
            "selected keyword candidates"
        );

        if candidates.is_empty() {
            return ExtractionResult {
                keywords: Vec::new(),
                converged: true,
                iterations: 0,
            };
        }

        let builder = GraphBuilder::keyword_graph(
            &candidates,
            self.config.window_size,
            self.config.biased,
            &self.distance,
            self.config.edge_threshold,
        );
        let graph = CsrGraph::from_builder(&builder);
        let pagerank = TextRankScorer::from_config(&self.config.rank).run(&graph);

        let top = pagerank.top_n(self.config.top_n);
        let top_lemmas: Vec<&str> = top.iter().map(|&(id, _)| graph.lemma(id)).collect();

        let displays = if self.config.use_post_processing {
            merge_phrases(&top_lemmas, &find_combinations(&entries))
        } else {
            top_lemmas.iter().map(|l| l.to_string()).collect()
        };

        // Merged phrases repeat for each of their words; keep the first
        let mut seen = FxHashSet::default();
        let keywords: Vec<Keyword> = displays
            .into_iter()
            .zip(top.iter())
            .filter(|(display, _)| seen.insert(display.clone()))
            .enumerate()
            .map(|(i, (display, &(id, score)))| Keyword {
                text: display,
                lemma: graph.lemma(id).to_string(),
                score,
                rank: i + 1,
            })
            .collect();

        ExtractionResult {
            keywords,
            converged: pagerank.converged,
            iterations: pagerank.iterations,
        }
    }

    /// The candidate lemma of a token, or `None` if it cannot be a keyword
    fn candidate_lemma(&self, token: &TaggedToken) -> Option<String> {
        if !token.pos.is_keyword_class()
            || token.text.chars().count() < self.config.min_token_length
            || self.stopwords.is_stopword(&token.text)
        {
            return None;
        }

        let lemma = self.nlp.lemmatize(&token.text)?.to_lowercase();
        if lemma.is_empty() || self.stopwords.is_stopword(&lemma) {
            return None;
        }
        Some(lemma)
    }
}

impl<N, D> KeywordExtractor<N, D>
where
    N: PosTagger + Lemmatizer + Sync,
    D: WordDistance + Sync,
{
    /// Extract keywords from many notes in parallel
    pub fn extract_batch(&self, texts: &[&str]) -> Vec<Vec<String>> {
        texts.par_iter().map(|text| self.extract(text)).collect()
    }
}

/// Extract keywords with the default collaborators
pub fn extract_keywords(
    text: &str,
    number_of_keywords: usize,
    biased: bool,
    use_post_processing: bool,
) -> Vec<String> {
    let config = KeywordConfig::default()
        .with_top_n(number_of_keywords)
        .with_biased(biased)
        .with_post_processing(use_post_processing);
    KeywordExtractor::with_config(config).extract(text)
}
