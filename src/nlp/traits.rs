//! Collaborator trait definitions.
//!
//! The ranking core never tags, lemmatizes or measures text itself; it asks
//! these collaborators. The host application plugs in its platform services
//! (on-device taggers, word embeddings) and the crate ships heuristic defaults
//! in [`Tokenizer`](super::tokenizer::Tokenizer) and
//! [`NgramDistance`](super::distance::NgramDistance).
//!
//! Implementations must be deterministic for a given input.

use crate::types::TaggedToken;

/// Tagging scheme requested from a [`PosTagger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagScheme {
    /// Plain lexical classes; proper nouns are reported as nouns
    #[default]
    LexicalClass,
    /// Lexical classes, with named entities reported as proper nouns
    NameTypeOrLexicalClass,
}

/// Segmentation unit for a [`TextSegmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentUnit {
    Word,
    Sentence,
}

/// Part-of-speech tagger.
///
/// Returns every token of the text in order (words and punctuation;
/// whitespace omitted), each with a tag and its position in the sequence.
pub trait PosTagger {
    /// Tag `text` with the given scheme.
    fn tag(&self, text: &str, scheme: TagScheme) -> Vec<TaggedToken>;
}

/// Lemmatizer.
///
/// `None` means the collaborator has no lemma for the token; callers skip it.
pub trait Lemmatizer {
    /// Lemmatize a single token.
    fn lemmatize(&self, token: &str) -> Option<String>;
}

/// Lexical distance between two word tokens.
///
/// 0 means identical, larger means more different. Biased keyword graphs
/// weight an edge as `2 - distance`.
pub trait WordDistance {
    /// Distance between `a` and `b`.
    fn word_distance(&self, a: &str, b: &str) -> f64;
}

/// Distance between two sentences, used by biased summarization.
pub trait SentenceDistance {
    /// Distance between `a` and `b`.
    fn sentence_distance(&self, a: &str, b: &str) -> f64;
}

/// Word or sentence segmenter.
pub trait TextSegmenter {
    /// Split `text` into units; units are trimmed and never empty.
    fn segment(&self, text: &str, unit: SegmentUnit) -> Vec<String>;
}

impl<T: PosTagger + ?Sized> PosTagger for &T {
    fn tag(&self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        (**self).tag(text, scheme)
    }
}

impl<T: Lemmatizer + ?Sized> Lemmatizer for &T {
    fn lemmatize(&self, token: &str) -> Option<String> {
        (**self).lemmatize(token)
    }
}

impl<T: WordDistance + ?Sized> WordDistance for &T {
    fn word_distance(&self, a: &str, b: &str) -> f64 {
        (**self).word_distance(a, b)
    }
}

impl<T: SentenceDistance + ?Sized> SentenceDistance for &T {
    fn sentence_distance(&self, a: &str, b: &str) -> f64 {
        (**self).sentence_distance(a, b)
    }
}

impl<T: TextSegmenter + ?Sized> TextSegmenter for &T {
    fn segment(&self, text: &str, unit: SegmentUnit) -> Vec<String> {
        (**self).segment(text, unit)
    }
}
