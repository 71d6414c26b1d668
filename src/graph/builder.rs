//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) edge lookups during construction, and the sliding-window
//! constructions used for keyword and sentence graphs.

use crate::nlp::traits::{SentenceDistance, WordDistance};
use rustc_hash::{FxHashMap, FxHashSet};

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The candidate (lemma or sentence) for this node
    pub lemma: String,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A sentence prepared for the sentence graph
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceUnit {
    /// The sentence text, verbatim
    pub text: String,
    /// Lemmas of the sentence's content words, in order
    pub lemmas: Vec<String>,
}

impl SentenceUnit {
    /// Create a new sentence unit
    pub fn new(text: impl Into<String>, lemmas: Vec<String>) -> Self {
        Self {
            text: text.into(),
            lemmas,
        }
    }

    /// Lemma-overlap similarity normalized by the log of both lengths.
    ///
    /// `|shared lemmas| / (ln|a| + ln|b|)`; when the denominator is not
    /// positive (both units have at most one lemma) the raw overlap is used.
    pub fn overlap_similarity(&self, other: &SentenceUnit) -> f64 {
        let mine: FxHashSet<&str> = self.lemmas.iter().map(String::as_str).collect();
        let theirs: FxHashSet<&str> = other.lemmas.iter().map(String::as_str).collect();
        let overlap = mine.intersection(&theirs).count() as f64;
        if overlap == 0.0 {
            return 0.0;
        }

        let denominator = (self.lemmas.len() as f64).ln() + (other.lemmas.len() as f64).ln();
        if denominator > 0.0 {
            overlap / denominator
        } else {
            overlap
        }
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps candidate -> node ID
    lemma_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            lemma_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            lemma_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given candidate, returning its ID
    ///
    /// IDs are assigned in order of first appearance.
    pub fn get_or_create_node(&mut self, lemma: &str) -> u32 {
        if let Some(&id) = self.lemma_to_id.get(lemma) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.lemma_to_id.insert(lemma.to_string(), id);
        self.nodes.push(BuilderNode::new(lemma));
        id
    }

    /// Set the edge weight between two nodes
    ///
    /// The first weight written for a pair wins; later calls are no-ops.
    /// Self-loops and negative or non-finite weights are ignored.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to || !weight.is_finite() || weight < 0.0 {
            return;
        }
        let n = self.nodes.len() as u32;
        if from >= n || to >= n || self.has_edge(from, to) {
            return;
        }

        self.nodes[from as usize].edges.insert(to, weight);
        self.nodes[to as usize].edges.insert(from, weight);
    }

    /// Check whether an (undirected) edge exists between two nodes
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        let forward = self
            .nodes
            .get(a as usize)
            .is_some_and(|n| n.edges.contains_key(&b));
        let backward = self
            .nodes
            .get(b as usize)
            .is_some_and(|n| n.edges.contains_key(&a));
        forward || backward
    }

    /// Get the weight of the edge between two nodes, if any
    pub fn edge_weight(&self, a: u32, b: u32) -> Option<f64> {
        self.nodes.get(a as usize)?.edges.get(&b).copied()
    }

    /// Build a graph over a candidate sequence using a sliding window.
    ///
    /// Every distinct candidate becomes a vertex. For each position `i`, the
    /// candidates at positions `j` with `0 < |i - j| <= window_size` are
    /// considered. Pairs that map to the same vertex, and pairs already joined
    /// by an edge, are skipped before `weigh` is called. `weigh(a, b)`
    /// returns the edge weight, or `None` to leave the pair unconnected.
    pub fn from_window<S, F>(candidates: &[S], window_size: usize, mut weigh: F) -> Self
    where
        S: AsRef<str>,
        F: FnMut(usize, usize) -> Option<f64>,
    {
        let mut builder = Self::with_capacity(candidates.len());
        let ids: Vec<u32> = candidates
            .iter()
            .map(|c| builder.get_or_create_node(c.as_ref()))
            .collect();

        for i in 0..ids.len() {
            let lo = i.saturating_sub(window_size);
            let hi = std::cmp::min(i.saturating_add(window_size), ids.len().saturating_sub(1));
            for j in lo..=hi {
                if j == i || ids[i] == ids[j] || builder.has_edge(ids[i], ids[j]) {
                    continue;
                }
                if let Some(weight) = weigh(i, j) {
                    builder.set_edge(ids[i], ids[j], weight);
                }
            }
        }

        builder
    }

    /// Build the keyword co-occurrence graph.
    ///
    /// Unbiased edges have weight 1.0. Biased edges weigh `2 - distance` and
    /// are kept only when that exceeds `threshold`.
    pub fn keyword_graph<S, D>(
        candidates: &[S],
        window_size: usize,
        biased: bool,
        distance: &D,
        threshold: f64,
    ) -> Self
    where
        S: AsRef<str>,
        D: WordDistance + ?Sized,
    {
        Self::from_window(candidates, window_size, |i, j| {
            if !biased {
                return Some(1.0);
            }
            let weight = 2.0 - distance.word_distance(candidates[i].as_ref(), candidates[j].as_ref());
            (weight > threshold).then_some(weight)
        })
    }

    /// Build the sentence similarity graph.
    ///
    /// Unbiased edges carry the lemma-overlap similarity. Biased edges weigh
    /// `2 - distance` and are kept only when that exceeds `threshold`.
    pub fn sentence_graph<D>(
        units: &[SentenceUnit],
        window_size: usize,
        biased: bool,
        distance: &D,
        threshold: f64,
    ) -> Self
    where
        D: SentenceDistance + ?Sized,
    {
        let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
        Self::from_window(&texts, window_size, |i, j| {
            if biased {
                let weight = 2.0 - distance.sentence_distance(texts[i], texts[j]);
                (weight > threshold).then_some(weight)
            } else {
                Some(units[i].overlap_similarity(&units[j]))
            }
        })
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by candidate
    pub fn get_node_id(&self, lemma: &str) -> Option<u32> {
        self.lemma_to_id.get(lemma).copied()
    }

    /// Get the candidate for a node ID
    pub fn get_lemma(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.lemma.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
