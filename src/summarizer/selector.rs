//! Chunked TextRank sentence selection
//!
//! The note is split into sentences and the sentences into fixed-size chunks.
//! Each chunk is ranked on its own sentence graph; the best sentences of each
//! chunk are kept in their original order.

use crate::errors::Result;
use crate::graph::builder::{GraphBuilder, SentenceUnit};
use crate::graph::csr::CsrGraph;
use crate::nlp::distance::NgramDistance;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::nlp::traits::{Lemmatizer, SegmentUnit, SentenceDistance, TextSegmenter};
use crate::pagerank::standard::TextRankScorer;
use crate::types::{SelectedSentence, SummaryConfig};
use rayon::prelude::*;
use tracing::{debug, info_span, trace};

/// Result of summarization
#[derive(Debug, Clone, Default)]
pub struct SummaryResult {
    /// Selected sentences in note order
    pub sentences: Vec<SelectedSentence>,
    /// Number of chunks the note was split into
    pub chunks: usize,
}

impl SummaryResult {
    /// The summary text: selected sentences joined by spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer<N = Tokenizer, D = NgramDistance> {
    config: SummaryConfig,
    nlp: N,
    distance: D,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config and collaborators
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SummaryConfig) -> Self {
        Self::with_collaborators(config, Tokenizer::new(), NgramDistance::new())
    }

    /// Create with custom config, rejecting invalid settings
    pub fn try_new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }
}

impl<N, D> Summarizer<N, D>
where
    N: TextSegmenter + Lemmatizer,
    D: SentenceDistance,
{
    /// Create with custom config and host-provided collaborators
    pub fn with_collaborators(config: SummaryConfig, nlp: N, distance: D) -> Self {
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
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize a note
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with_info(text).text()
    }

    /// Summarize a note, keeping per-sentence scores and positions
    pub fn summarize_with_info(&self, text: &str) -> SummaryResult {
        let _span = info_span!("summarize", chars = text.len()).entered();

        let sentences = self.nlp.segment(text, SegmentUnit::Sentence);
        if sentences.is_empty() {
            return SummaryResult::default();
        }

        let chunk_size = self.config.chunk_size.max(1);
        let mut selected = Vec::new();
        let mut chunks = 0;

        for (chunk, group) in sentences.chunks(chunk_size).enumerate() {
            selected.extend(self.summarize_chunk(group, chunk, chunk * chunk_size));
            chunks += 1;
        }

        debug!(
            sentences = sentences.len(),
            chunks,
            selected = selected.len(),
            "summary assembled"
        );

        SummaryResult {
            sentences: selected,
            chunks,
        }
    }

    /// Rank one chunk; `offset` is the note position of its first sentence
    fn summarize_chunk(&self, group: &[String], chunk: usize, offset: usize) -> Vec<SelectedSentence> {
        if group.len() <= 1 {
            trace!(chunk, sentences = group.len(), "chunk kept unranked");
            return group
                .iter()
                .enumerate()
                .map(|(i, text)| SelectedSentence {
                    text: text.clone(),
                    chunk,
                    position: offset + i,
                    score: 1.0,
                })
                .collect();
        }

        let units: Vec<SentenceUnit> = group
            .iter()
            .map(|sentence| SentenceUnit::new(sentence.as_str(), self.content_lemmas(sentence)))
            .collect();

        let builder = GraphBuilder::sentence_graph(
            &units,
            self.config.window_size,
            self.config.biased,
            &self.distance,
            self.config.edge_threshold,
        );
        let graph = CsrGraph::from_builder(&builder);
        let pagerank = TextRankScorer::from_config(&self.config.rank).run(&graph);

        // Repeated sentences share a vertex; it stands at its first position
        let mut first_position = vec![usize::MAX; graph.num_nodes];
        for (i, sentence) in group.iter().enumerate() {
            if let Some(id) = builder.get_node_id(sentence) {
                let slot = &mut first_position[id as usize];
                *slot = (*slot).min(i);
            }
        }

        let keep = self.config.sentences_for_chunk(group.len());
        let mut picked: Vec<SelectedSentence> = pagerank
            .top_n(keep)
            .into_iter()
            .map(|(id, score)| {
                let i = first_position[id as usize];
                SelectedSentence {
                    text: group[i].clone(),
                    chunk,
                    position: offset + i,
                    score,
                }
            })
            .collect();
        picked.sort_by_key(|s| s.position);

        trace!(
            chunk,
            sentences = group.len(),
            kept = picked.len(),
            converged = pagerank.converged,
            "chunk ranked"
        );

        picked
    }

    /// Lowercased lemmas of a sentence's non-stopword words
    fn content_lemmas(&self, sentence: &str) -> Vec<String> {
        self.nlp
            .segment(sentence, SegmentUnit::Word)
            .iter()
            .filter(|word| !self.stopwords.is_stopword(word))
            .filter_map(|word| self.nlp.lemmatize(word))
            .map(|lemma| lemma.to_lowercase())
            .filter(|lemma| !lemma.is_empty() && !self.stopwords.is_stopword(lemma))
            .collect()
    }
}

impl<N, D> Summarizer<N, D>
where
    N: TextSegmenter + Lemmatizer + Sync,
    D: SentenceDistance + Sync,
{
    /// Summarize many notes in parallel
    pub fn summarize_batch(&self, texts: &[&str]) -> Vec<String> {
        texts.par_iter().map(|text| self.summarize(text)).collect()
    }
}

/// Summarize a note with the default collaborators.
///
/// `number_of_sentences` is the number kept per chunk; `None` keeps a third
/// of each chunk (at least one sentence).
pub fn summarize(text: &str, number_of_sentences: Option<usize>, biased: bool) -> String {
    let config = SummaryConfig::default()
        .with_top_n(number_of_sentences)
        .with_biased(biased);
    Summarizer::with_config(config).summarize(text)
}
