//! Drug profile and leading question models.

use serde::{Deserialize, Serialize};

/// A single substance the bot can screen for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugProfile {
    /// Stable lowercase identifier (e.g., "marijuana")
    pub id: String,
    /// Human-readable name for display
    pub display_name: String,
    /// Keywords that point at this substance: symptoms, behaviors,
    /// paraphernalia, nicknames. Matched case-insensitively.
    pub keywords: Vec<String>,
    /// Canned advice emitted once this substance is identified
    pub advice: String,
}

impl DrugProfile {
    /// Create a new profile with no keywords and empty advice.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            keywords: Vec::new(),
            advice: String::new(),
        }
    }

    /// Check whether a keyword belongs to this profile (case-insensitive).
    pub fn has_keyword(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        self.keywords.iter().any(|k| k.to_lowercase() == keyword_lower)
    }
}

/// A yes/no question used to disambiguate common symptoms.
///
/// The leading questions form a totally ordered sequence: an affirmative
/// answer to question `i` selects the profile named by `profile_id`, any
/// other answer advances to question `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadingQuestion {
    /// Question text shown to the user
    pub prompt: String,
    /// Id of the [`DrugProfile`] selected when the answer is affirmative
    pub profile_id: String,
}

impl LeadingQuestion {
    pub fn new(prompt: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            profile_id: profile_id.into(),
        }
    }
}
