//! Cosine distances over sparse vectors
//!
//! Default [`WordDistance`] / [`SentenceDistance`] collaborator. Words are
//! compared by character bigrams, sentences by bags of lowercase words. Both
//! report `2 * (1 - cosine)`, so the range is `[0, 2]` and a biased edge
//! weight `2 - distance` equals `2 * cosine`.

use super::traits::{SentenceDistance, WordDistance};
use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// A sparse unit-normalized vector
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    /// Non-zero dimensions: feature -> weight
    pub dimensions: FxHashMap<String, f64>,
}

impl SparseVector {
    /// Create from raw feature counts, normalizing to unit length
    pub fn from_counts(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions }
    }

    /// Compute cosine similarity with another vector
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        // Both vectors are normalized, so this is the dot product
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .dimensions
            .iter()
            .filter_map(|(key, value)| large.dimensions.get(key).map(|o| value * o))
            .sum()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Character-bigram / bag-of-words cosine distance
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramDistance;

impl NgramDistance {
    /// Create a new distance collaborator
    pub fn new() -> Self {
        Self
    }

    /// Character bigrams of a lowercased word, padded with boundary markers
    fn bigrams(word: &str) -> SparseVector {
        let chars: Vec<char> = std::iter::once('^')
            .chain(word.to_lowercase().chars())
            .chain(std::iter::once('$'))
            .collect();
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for pair in chars.windows(2) {
            *counts.entry(pair.iter().collect()).or_insert(0.0) += 1.0;
        }
        SparseVector::from_counts(counts)
    }

    fn bag_of_words(sentence: &str) -> SparseVector {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for word in sentence.unicode_words() {
            *counts.entry(word.to_lowercase()).or_insert(0.0) += 1.0;
        }
        SparseVector::from_counts(counts)
    }

    fn distance(a: &SparseVector, b: &SparseVector) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 2.0;
        }
        (2.0 * (1.0 - a.cosine_similarity(b))).clamp(0.0, 2.0)
    }
}

impl WordDistance for NgramDistance {
    fn word_distance(&self, a: &str, b: &str) -> f64 {
        Self::distance(&Self::bigrams(a), &Self::bigrams(b))
    }
}

impl SentenceDistance for NgramDistance {
    fn sentence_distance(&self, a: &str, b: &str) -> f64 {
        Self::distance(&Self::bag_of_words(a), &Self::bag_of_words(b))
    }
}
