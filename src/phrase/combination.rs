//! Adjective/noun combinations and phrase merging
//!
//! A Combination is a pair of adjacent candidate words matching
//! `[adjective|noun][noun]`. Ranked single-word keywords that appear together
//! in a Combination are shown as the joined phrase instead.

use crate::types::PosTag;
use rustc_hash::FxHashSet;
use tracing::trace;

/// One tagged token as seen by the post-processor
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationEntry {
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Candidate lemma, or `None` when the token was filtered out
    pub lemma: Option<String>,
}

impl CombinationEntry {
    /// Create a new entry
    pub fn new(pos: PosTag, lemma: Option<String>) -> Self {
        Self { pos, lemma }
    }
}

/// Two consecutive candidate lemmas matching `[adjective|noun][noun]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// The lemmas in text order
    pub words: [String; 2],
    /// Position of the first word in the tagged sequence
    pub start: usize,
}

impl Combination {
    /// Check if the combination contains a lemma
    pub fn contains(&self, lemma: &str) -> bool {
        self.words.iter().any(|w| w == lemma)
    }

    /// The other word of the pair, if `lemma` is one of them
    pub fn partner(&self, lemma: &str) -> Option<&str> {
        if self.words[0] == lemma {
            Some(self.words[1].as_str())
        } else if self.words[1] == lemma {
            Some(self.words[0].as_str())
        } else {
            None
        }
    }
}

/// Scan the tagged sequence for Combinations, in text order.
///
/// The accumulator holds the last adjective or noun candidate; a noun candidate
/// following it closes a pair. Any token that is not an adjective/noun
/// candidate resets the accumulator.
pub fn find_combinations(entries: &[CombinationEntry]) -> Vec<Combination> {
    let mut combinations = Vec::new();
    let mut pending: Option<(usize, &str)> = None;

    for (i, entry) in entries.iter().enumerate() {
        let lemma = match entry.lemma.as_deref() {
            Some(lemma) if entry.pos.can_open_combination() => lemma,
            _ => {
                pending = None;
                continue;
            }
        };

        if let Some((start, first)) = pending {
            if entry.pos.is_noun() {
                combinations.push(Combination {
                    words: [first.to_string(), lemma.to_string()],
                    start,
                });
            }
        }
        pending = Some((i, lemma));
    }

    combinations
}

/// Replace ranked keywords by the phrases they form with other ranked keywords.
///
/// For each keyword, a three-word chain (`[x y]` directly followed by `[y z]`,
/// all three distinct ranked keywords) is preferred over a pair. The first
/// match in text order wins. Keywords without a partner keep their own form.
/// The output is parallel to `keywords`.
pub fn merge_phrases<S: AsRef<str>>(keywords: &[S], combinations: &[Combination]) -> Vec<String> {
    let ranked: FxHashSet<&str> = keywords.iter().map(|k| k.as_ref()).collect();

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            if let Some(chain) = find_chain(keyword, combinations, &ranked) {
                trace!(keyword, phrase = %chain, "merged three-word phrase");
                return chain;
            }
            if let Some(pair) = find_pair(keyword, combinations, &ranked) {
                trace!(keyword, phrase = %pair, "merged two-word phrase");
                return pair;
            }
            keyword.to_string()
        })
        .collect()
}

fn find_chain(keyword: &str, combinations: &[Combination], ranked: &FxHashSet<&str>) -> Option<String> {
    combinations.windows(2).find_map(|pair| {
        let (first, second) = (&pair[0], &pair[1]);
        if second.start != first.start + 1 {
            return None;
        }
        let words = [&first.words[0], &first.words[1], &second.words[1]];
        let distinct = words[0] != words[1] && words[1] != words[2] && words[0] != words[2];
        let all_ranked = words.iter().all(|w| ranked.contains(w.as_str()));
        let mentions = words.iter().any(|w| *w == keyword);
        (distinct && all_ranked && mentions).then(|| {
            words
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
    })
}

fn find_pair(keyword: &str, combinations: &[Combination], ranked: &FxHashSet<&str>) -> Option<String> {
    combinations.iter().find_map(|combination| {
        let partner = combination.partner(keyword)?;
        (partner != keyword && ranked.contains(partner)).then(|| combination.words.join(" "))
    })
}
