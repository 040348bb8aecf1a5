//! Message normalization.
//!
//! Handles:
//! - Case folding
//! - Punctuation stripping (mapped to spaces so word boundaries survive)
//! - Whitespace collapsing and tokenization

/// Normalize raw text: lowercase, punctuation to spaces, collapsed whitespace.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and split into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

/// Token-aligned phrase containment: does `haystack` contain `needle` as a
/// consecutive run of whole tokens? This is the word-boundary semantics of
/// matching, so "eat" never fires inside "eating".
pub fn contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Bloodshot   EYES!!"), "bloodshot eyes");
        assert_eq!(normalize("red-eyes, again?"), "red eyes again");
        assert_eq!(normalize("  "), "");
    }

    #[test]
    fn test_normalize_keeps_apostrophes() {
        assert_eq!(normalize("they aren't sleeping"), "they aren't sleeping");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Found a bong under the bed."),
            vec!["found", "a", "bong", "under", "the", "bed"]
        );
    }

    #[test]
    fn test_contains_phrase_whole_tokens_only() {
        let haystack = tokenize("my teen is eating more than usual");

        assert!(contains_phrase(&haystack, &tokenize("eating more")));
        assert!(contains_phrase(&haystack, &tokenize("eating")));
        assert!(!contains_phrase(&haystack, &tokenize("eat")));
        assert!(!contains_phrase(&haystack, &tokenize("more than usual sleep")));
    }

    #[test]
    fn test_contains_phrase_empty_needle() {
        let haystack = tokenize("anything");
        assert!(!contains_phrase(&haystack, &[]));
    }
}
