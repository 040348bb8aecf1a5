//! Tag matching against the lexicon.
//!
//! Matching order:
//! 1. Exact (token-aligned) containment against each profile's keywords, in
//!    profile declaration order. First profile with a hit wins.
//! 2. Exact containment against the common keyword set.
//! 3. Fuzzy containment against profile keywords, then common keywords, for
//!    typo tolerance. A high threshold keeps nonsense input at `NoMatch`.

use strsim::{jaro_winkler, normalized_levenshtein};
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::matcher::normalizer::{contains_phrase, tokenize};

/// Minimum combined similarity for a fuzzy token hit.
const FUZZY_THRESHOLD: f64 = 0.92;

/// Tokens shorter than this must match exactly, never fuzzily.
const MIN_FUZZY_TOKEN_LEN: usize = 4;

/// Outcome of matching one message against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    /// A keyword tied to one specific drug profile matched. `profile` is the
    /// profile's index in declaration order.
    Drug { profile: usize, keyword: String },
    /// An ambiguous keyword shared across profiles matched; the dialogue
    /// routes into the leading-question sequence.
    Common { keyword: String },
    /// Nothing matched.
    NoMatch,
}

/// Matches free text against a lexicon's tag dictionaries.
pub struct TagMatcher<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TagMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Match a raw user message. Total: never fails, never panics.
    pub fn match_message(&self, message: &str) -> TagMatch {
        let tokens = tokenize(message);
        if tokens.is_empty() {
            return TagMatch::NoMatch;
        }

        // Exact passes first: a verbatim keyword always beats a typo guess.
        if let Some(hit) = self.exact_pass(&tokens) {
            return hit;
        }
        if let Some(hit) = self.fuzzy_pass(&tokens) {
            return hit;
        }

        TagMatch::NoMatch
    }

    /// Whether an answer counts as "yes".
    pub fn is_affirmative(&self, message: &str) -> bool {
        const AFFIRMATIVE: &[&str] = &["yes", "yeah", "yep", "ye", "yup", "yea"];
        tokenize(message)
            .iter()
            .any(|t| AFFIRMATIVE.contains(&t.as_str()))
    }

    fn exact_pass(&self, tokens: &[String]) -> Option<TagMatch> {
        for (index, profile) in self.lexicon.profiles.iter().enumerate() {
            for keyword in &profile.keywords {
                if contains_phrase(tokens, &tokenize(keyword)) {
                    debug!(profile = %profile.id, keyword = %keyword, "exact drug tag hit");
                    return Some(TagMatch::Drug {
                        profile: index,
                        keyword: keyword.clone(),
                    });
                }
            }
        }

        for keyword in &self.lexicon.common_keywords {
            if contains_phrase(tokens, &tokenize(keyword)) {
                debug!(keyword = %keyword, "exact common tag hit");
                return Some(TagMatch::Common {
                    keyword: keyword.clone(),
                });
            }
        }

        None
    }

    fn fuzzy_pass(&self, tokens: &[String]) -> Option<TagMatch> {
        for (index, profile) in self.lexicon.profiles.iter().enumerate() {
            for keyword in &profile.keywords {
                if fuzzy_contains_phrase(tokens, &tokenize(keyword)) {
                    debug!(profile = %profile.id, keyword = %keyword, "fuzzy drug tag hit");
                    return Some(TagMatch::Drug {
                        profile: index,
                        keyword: keyword.clone(),
                    });
                }
            }
        }

        for keyword in &self.lexicon.common_keywords {
            if fuzzy_contains_phrase(tokens, &tokenize(keyword)) {
                debug!(keyword = %keyword, "fuzzy common tag hit");
                return Some(TagMatch::Common {
                    keyword: keyword.clone(),
                });
            }
        }

        None
    }
}

/// Phrase containment where individual tokens may differ by a typo.
/// Short tokens still require equality.
fn fuzzy_contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(needle.iter())
            .all(|(have, want)| fuzzy_token_eq(have, want))
    })
}

fn fuzzy_token_eq(have: &str, want: &str) -> bool {
    if have == want {
        return true;
    }
    if have.len() < MIN_FUZZY_TOKEN_LEN || want.len() < MIN_FUZZY_TOKEN_LEN {
        return false;
    }
    fuzzy_match(have, want) >= FUZZY_THRESHOLD
}

/// Combined similarity: Jaro-Winkler for typos and prefix weight,
/// Levenshtein for overall shape.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}
