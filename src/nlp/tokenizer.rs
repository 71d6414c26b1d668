//! Unicode-aware tokenization
//!
//! This module provides UAX #29 compliant word and sentence segmentation
//! together with heuristic POS tagging and lemmatization. It is the default
//! collaborator when the host platform has no tagger of its own.

use super::traits::{Lemmatizer, PosTagger, SegmentUnit, TagScheme, TextSegmenter};
use crate::types::{PosTag, TaggedToken};
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        // Handle last segment
        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }

    /// Basic heuristic POS tagging
    ///
    /// This is intentionally simple; hosts with a real tagger should plug it in
    /// through [`PosTagger`].
    fn guess_pos(&self, word: &str) -> PosTag {
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return if word.chars().all(|c| c.is_ascii_punctuation() || c.is_whitespace()) {
                PosTag::Punctuation
            } else {
                PosTag::Symbol
            };
        }

        let lower = word.to_lowercase();

        if let Some(pos) = self.function_word_pos(&lower) {
            return pos;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        // Capitalized word (might be proper noun or sentence start)
        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
        {
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        let pos = match lower {
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
                PosTag::Determiner
            }
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "though" | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
            | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
            | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us"
            | "them" | "myself" | "yourself" | "ourselves" | "themselves" => PosTag::Pronoun,
            "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "has" | "have"
            | "had" | "do" | "does" | "did" | "can" | "could" | "will" | "would" | "should"
            | "may" | "might" | "must" => PosTag::Verb,
            "not" | "n't" => PosTag::Particle,
            _ => return None,
        };
        Some(pos)
    }

    /// Basic lemmatization
    ///
    /// Handles simple English morphology on the lowercased word.
    fn basic_lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if lower.ends_with("ies") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("es") && lower.len() > 3 {
            let stem = &lower[..lower.len() - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
                || stem.ends_with('o')
            {
                return stem.to_string();
            }
        }
        if lower.ends_with('s')
            && lower.len() > 2
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return lower[..lower.len() - 1].to_string();
        }
        if lower.ends_with("ing") && lower.len() > 5 {
            // Doubled consonant (running -> run)
            return undouble(&lower[..lower.len() - 3]).to_string();
        }
        if lower.ends_with("ed") && lower.len() > 4 {
            if lower.ends_with("ied") {
                return format!("{}y", &lower[..lower.len() - 3]);
            }
            return undouble(&lower[..lower.len() - 2]).to_string();
        }

        lower
    }
}

/// Drop the last character of `stem` when it repeats the one before it
fn undouble(stem: &str) -> &str {
    let mut tail = stem.char_indices().rev();
    match (tail.next(), tail.next()) {
        (Some((last_start, last)), Some((_, prev))) if last == prev => &stem[..last_start],
        _ => stem,
    }
}

impl PosTagger for Tokenizer {
    fn tag(&self, text: &str, scheme: TagScheme) -> Vec<TaggedToken> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .enumerate()
            .map(|(index, segment)| {
                let pos = match (self.guess_pos(segment), scheme) {
                    (PosTag::ProperNoun, TagScheme::LexicalClass) => PosTag::Noun,
                    (pos, _) => pos,
                };
                TaggedToken::new(segment, pos, index)
            })
            .collect()
    }
}

impl Lemmatizer for Tokenizer {
    fn lemmatize(&self, token: &str) -> Option<String> {
        if !token.chars().any(|c| c.is_alphanumeric()) {
            return None;
        }
        Some(self.basic_lemmatize(token))
    }
}

impl TextSegmenter for Tokenizer {
    fn segment(&self, text: &str, unit: SegmentUnit) -> Vec<String> {
        match unit {
            SegmentUnit::Word => text.unicode_words().map(str::to_string).collect(),
            SegmentUnit::Sentence => self
                .sentence_boundaries(text)
                .into_iter()
                .map(|(start, end)| text[start..end].trim().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_segmentation() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("Hello world. This is a test.", SegmentUnit::Sentence);

        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_word_segmentation() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.segment("Café notes, ready!", SegmentUnit::Word);

        assert_eq!(words, vec!["Café", "notes", "ready"]);
    }

    #[test]
    fn test_tag_keeps_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tag("Neural networks. Deep nets", TagScheme::LexicalClass);

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Neural", "networks", ".", "Deep", "nets"]);
        assert_eq!(tokens[2].pos, PosTag::Punctuation);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i);
        }
    }

    #[test]
    fn test_tag_scheme_folds_proper_nouns() {
        let tokenizer = Tokenizer::new();

        let lexical = tokenizer.tag("Paris", TagScheme::LexicalClass);
        assert_eq!(lexical[0].pos, PosTag::Noun);

        let named = tokenizer.tag("Paris", TagScheme::NameTypeOrLexicalClass);
        assert_eq!(named[0].pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_basic_lemmatization() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.basic_lemmatize("running"), "run");
        assert_eq!(tokenizer.basic_lemmatize("cats"), "cat");
        assert_eq!(tokenizer.basic_lemmatize("studies"), "study");
        assert_eq!(tokenizer.basic_lemmatize("boxes"), "box");
        assert_eq!(tokenizer.basic_lemmatize("Status"), "status");
        assert_eq!(tokenizer.basic_lemmatize("analysis"), "analysis");
    }

    #[test]
    fn test_lemmatization_of_multibyte_words() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.basic_lemmatize("Ééing"), "é");
        assert_eq!(tokenizer.basic_lemmatize("naïïed"), "naï");
        assert_eq!(tokenizer.basic_lemmatize("ññed"), "ñ");
        assert_eq!(tokenizer.basic_lemmatize("Ñandúing"), "ñandú");
        assert_eq!(tokenizer.lemmatize("cafés"), Some("café".to_string()));
        assert_eq!(tokenizer.lemmatize("größten"), Some("größten".to_string()));
    }

    #[test]
    fn test_lemmatize_skips_symbols() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.lemmatize("Notes"), Some("note".to_string()));
        assert_eq!(tokenizer.lemmatize("..."), None);
    }

    #[test]
    fn test_pos_guessing() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.guess_pos("beautiful"), PosTag::Adjective);
        assert_eq!(tokenizer.guess_pos("running"), PosTag::Verb);
        assert_eq!(tokenizer.guess_pos("quickly"), PosTag::Adverb);
        assert_eq!(tokenizer.guess_pos("information"), PosTag::Noun);
        assert_eq!(tokenizer.guess_pos("the"), PosTag::Determiner);
        assert_eq!(tokenizer.guess_pos("42"), PosTag::Numeral);
        assert_eq!(tokenizer.guess_pos("!"), PosTag::Punctuation);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.segment("", SegmentUnit::Sentence).is_empty());
        assert!(tokenizer.segment("   ", SegmentUnit::Sentence).is_empty());
        assert!(tokenizer.tag("", TagScheme::LexicalClass).is_empty());
    }

    #[test]
    fn test_emoji_handling() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.segment("Hello 👋 world! How are you? 🎉", SegmentUnit::Sentence);

        assert!(sentences.len() >= 2);
    }
}
