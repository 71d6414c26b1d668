//! Iterative TextRank scoring
//!
//! [`standard::TextRankScorer`] runs the weighted, undirected PageRank variant
//! used by TextRank and returns a [`PageRankResult`].

pub mod standard;

use crate::graph::csr::CsrGraph;
use rustc_hash::FxHashMap;

/// Vertex -> score mapping
pub type ScoreMap = FxHashMap<String, f64>;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (RMS difference of the last iteration)
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score
    ///
    /// Ties go to the lower node ID, i.e. the earlier first occurrence.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Key the scores by the graph's candidates
    pub fn score_map(&self, graph: &CsrGraph) -> ScoreMap {
        graph
            .labels
            .iter()
            .zip(self.scores.iter())
            .map(|(lemma, &score)| (lemma.clone(), score))
            .collect()
    }
}
