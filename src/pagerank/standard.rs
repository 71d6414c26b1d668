//! TextRank power iteration
//!
//! Every vertex starts at 1.0. Each sweep computes
//! `new[v] = (1 - d) + d * Σ w(u, v) / W(u) * old[u]` from the previous
//! snapshot, where `W(u)` is the total edge weight of neighbour `u`.
//! Iteration stops once the RMS difference between two sweeps drops below
//! the threshold, or at the iteration cap.

use super::{PageRankResult, ScoreMap};
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;
use tracing::debug;

/// TextRank scorer
#[derive(Debug, Clone)]
pub struct TextRankScorer {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the RMS score difference
    pub threshold: f64,
}

impl Default for TextRankScorer {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl TextRankScorer {
    /// Create a new scorer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer from a [`RankConfig`]
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run TextRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];
        let base = 1.0 - self.damping;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            new_scores.fill(base);

            // Each node pushes its share of the previous snapshot to its neighbours
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight <= 0.0 {
                    continue;
                }
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    new_scores[neighbor as usize] +=
                        self.damping * node_score * weight / total_weight;
                }
            }

            let sum_sq: f64 = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new) * (old - new))
                .sum();
            delta = (sum_sq / n as f64).sqrt();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.threshold {
                break;
            }
        }

        let converged = delta < self.threshold;
        debug!(
            nodes = n,
            edges = graph.num_edges() / 2,
            iterations,
            delta,
            converged,
            "textrank scoring finished"
        );

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// Run TextRank and key the scores by candidate
    pub fn iterate(&self, graph: &CsrGraph) -> ScoreMap {
        self.run(graph).score_map(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_clique(size: usize) -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let ids: Vec<u32> = (0..size)
            .map(|i| builder.get_or_create_node(&format!("n{}", i)))
            .collect();
        for &a in &ids {
            for &b in &ids {
                builder.set_edge(a, b, 1.0);
            }
        }
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        for spoke in ["s1", "s2", "s3"] {
            let id = builder.get_or_create_node(spoke);
            builder.set_edge(hub, id, 1.0);
        }
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_clique_equal_scores() {
        let graph = build_clique(4);
        let result = TextRankScorer::new().run(&graph);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - result.scores[0]).abs() < 1e-4);
        }
    }

    #[test]
    fn test_edgeless_graph_settles_at_base() {
        let mut builder = GraphBuilder::new();
        builder.get_or_create_node("a");
        builder.get_or_create_node("b");
        let graph = CsrGraph::from_builder(&builder);

        let result = TextRankScorer::new().run(&graph);

        assert!(result.converged);
        assert!(result.iterations <= 2);
        for score in &result.scores {
            assert!((score - 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = TextRankScorer::new().run(&graph);

        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_star_graph_fixed_point() {
        // hub = 0.15 + 0.85 * 3 * spoke, spoke = 0.15 + 0.85 * hub / 3
        let graph = build_star_graph();
        let result = TextRankScorer::new()
            .with_max_iterations(500)
            .with_threshold(1e-12)
            .run(&graph);

        let hub = result.scores[0];
        let spoke = result.scores[1];
        assert!((hub - (0.15 + 0.85 * 3.0 * spoke)).abs() < 1e-6);
        assert!((spoke - (0.15 + 0.85 * hub / 3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::default();
        let result = TextRankScorer::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_star_graph();
        let result = TextRankScorer::new()
            .with_max_iterations(1)
            .with_threshold(1e-15)
            .run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_default_iteration_cap() {
        assert_eq!(TextRankScorer::new().max_iterations, 30);
        assert!((TextRankScorer::new().threshold - 1e-4).abs() < 1e-15);
    }

    #[test]
    fn test_zero_weight_edges_are_skipped() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        builder.set_edge(a, b, 0.0);
        let graph = CsrGraph::from_builder(&builder);

        let result = TextRankScorer::new().run(&graph);
        assert!(result.scores.iter().all(|s| (s - 0.15).abs() < 1e-12));
    }

    #[test]
    fn test_iterate_scores_every_vertex() {
        let graph = build_star_graph();
        let scores = TextRankScorer::new().iterate(&graph);

        assert_eq!(scores.len(), 4);
        assert!(scores["hub"] > scores["s1"]);
    }

    #[test]
    fn test_top_n_ties_prefer_earlier_nodes() {
        let graph = build_clique(3);
        let result = TextRankScorer::new().run(&graph);

        let top: Vec<u32> = result.top_n(2).into_iter().map(|(id, _)| id).collect();
        assert_eq!(top, vec![0, 1]);
    }
}
