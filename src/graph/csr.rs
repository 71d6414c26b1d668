//! Frozen adjacency for scoring
//!
//! The scorer walks every vertex's neighbours on each sweep, so the builder's
//! hash-map adjacency is flattened into offset-indexed arrays first.

use super::builder::GraphBuilder;

/// Read-only undirected graph in compressed sparse row layout
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of vertices
    pub num_nodes: usize,
    /// Vertex `v` owns `targets[offsets[v]..offsets[v + 1]]`
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    /// Sum of incident edge weights per vertex
    strength: Vec<f64>,
    /// Word lemma or sentence text per vertex
    pub labels: Vec<String>,
}

impl CsrGraph {
    /// Freeze a builder. Each vertex's neighbours are stored in ascending id
    /// order so score sums are reproducible.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut graph = Self {
            num_nodes,
            offsets: Vec::with_capacity(num_nodes + 1),
            targets: Vec::new(),
            weights: Vec::new(),
            strength: Vec::with_capacity(num_nodes),
            labels: Vec::with_capacity(num_nodes),
        };
        graph.offsets.push(0);

        for (_, node) in builder.nodes() {
            let mut adjacent: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            adjacent.sort_unstable_by_key(|&(target, _)| target);

            graph.strength.push(adjacent.iter().map(|&(_, w)| w).sum());
            let (targets, weights): (Vec<u32>, Vec<f64>) = adjacent.into_iter().unzip();
            graph.targets.extend(targets);
            graph.weights.extend(weights);
            graph.offsets.push(graph.targets.len());
            graph.labels.push(node.lemma.clone());
        }

        graph
    }

    /// Neighbours of `node` with their edge weights
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let span = self.offsets[node as usize]..self.offsets[node as usize + 1];
        self.targets[span.clone()]
            .iter()
            .copied()
            .zip(self.weights[span].iter().copied())
    }

    /// Sum of the weights of the edges touching `node`
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.strength[node as usize]
    }

    pub fn lemma(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Stored adjacency entries; every undirected edge appears twice
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::from_builder(&GraphBuilder::new())
    }
}
