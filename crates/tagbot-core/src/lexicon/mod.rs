//! Static tag dictionaries driving the dialogue.
//!
//! A [`Lexicon`] bundles:
//! - declaration-ordered [`DrugProfile`]s with their keyword sets,
//! - the flat set of common/ambiguous keywords,
//! - the ordered leading-question sequence used to disambiguate them,
//! - the fixed response texts (greeting, preamble, wrap-up, failure advice).
//!
//! Lexica are immutable once validated. The builtin lexicon is compiled in;
//! a custom one can be loaded from JSON.

mod builtin;

pub use builtin::builtin;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DrugProfile, LeadingQuestion};

/// Lexicon validation errors.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lexicon declares no drug profiles")]
    NoProfiles,

    #[error("Lexicon declares no leading questions")]
    NoQuestions,

    #[error("Duplicate profile id: {0}")]
    DuplicateProfile(String),

    #[error("Profile {0} has a blank keyword")]
    BlankKeyword(String),

    #[error("Question {index} targets unknown profile: {profile_id}")]
    UnknownQuestionTarget { index: usize, profile_id: String },
}

pub type LexiconResult<T> = Result<T, LexiconError>;

/// The complete static dictionary set for one bot persona.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lexicon {
    /// Drug profiles in declaration order. When a message matches keywords
    /// from more than one profile, the first declared profile wins.
    pub profiles: Vec<DrugProfile>,
    /// Keywords shared across profiles; a hit routes into the
    /// leading-question sequence instead of a direct identification
    pub common_keywords: Vec<String>,
    /// Ordered disambiguation questions, walked front to back exactly once
    pub questions: Vec<LeadingQuestion>,
    /// Opening line shown before the first user turn
    pub greeting: String,
    /// Line prefixed to the first leading question
    pub clarify_preamble: String,
    /// Reply for turns arriving after the conversation has ended
    pub wrap_up: String,
    /// Terminal message when every question was answered negatively
    pub failure_advice: String,
}

impl Lexicon {
    /// Validate internal consistency. Called once at construction; the
    /// dialogue engine assumes a valid lexicon and never re-checks.
    pub fn validate(&self) -> LexiconResult<()> {
        if self.profiles.is_empty() {
            return Err(LexiconError::NoProfiles);
        }
        if self.questions.is_empty() {
            return Err(LexiconError::NoQuestions);
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(LexiconError::DuplicateProfile(profile.id.clone()));
            }
            if profile.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(LexiconError::BlankKeyword(profile.id.clone()));
            }
        }

        for (index, question) in self.questions.iter().enumerate() {
            if !seen.contains(question.profile_id.as_str()) {
                return Err(LexiconError::UnknownQuestionTarget {
                    index,
                    profile_id: question.profile_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a lexicon from JSON.
    pub fn from_json(json: &str) -> LexiconResult<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Find a profile's position in declaration order by id.
    pub fn profile_index(&self, id: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    /// Look up a profile by id.
    pub fn profile(&self, id: &str) -> Option<&DrugProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Lexicon {
        let mut profile = DrugProfile::new("marijuana", "Marijuana");
        profile.keywords = vec!["bong".into()];
        profile.advice = "advice".into();

        Lexicon {
            profiles: vec![profile],
            common_keywords: vec!["cough".into()],
            questions: vec![LeadingQuestion::new("Red eyes?", "marijuana")],
            greeting: "hi".into(),
            clarify_preamble: "hmm".into(),
            wrap_up: "bye".into(),
            failure_advice: "see a professional".into(),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        builtin().validate().unwrap();
    }

    #[test]
    fn test_minimal_is_valid() {
        minimal().validate().unwrap();
    }

    #[test]
    fn test_duplicate_profile_rejected() {
        let mut lexicon = minimal();
        lexicon.profiles.push(lexicon.profiles[0].clone());

        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::DuplicateProfile(id)) if id == "marijuana"
        ));
    }

    #[test]
    fn test_dangling_question_target_rejected() {
        let mut lexicon = minimal();
        lexicon
            .questions
            .push(LeadingQuestion::new("Needles?", "opioid"));

        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::UnknownQuestionTarget { index: 1, .. })
        ));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let mut lexicon = minimal();
        lexicon.profiles[0].keywords.push("  ".into());

        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::BlankKeyword(_))
        ));
    }

    #[test]
    fn test_empty_questions_rejected() {
        let mut lexicon = minimal();
        lexicon.questions.clear();
        assert!(matches!(lexicon.validate(), Err(LexiconError::NoQuestions)));
    }

    #[test]
    fn test_json_round_trip() {
        let lexicon = minimal();
        let json = serde_json::to_string(&lexicon).unwrap();
        let parsed = Lexicon::from_json(&json).unwrap();
        assert_eq!(parsed, lexicon);
    }

    #[test]
    fn test_profile_index_follows_declaration_order() {
        let lexicon = builtin();
        assert_eq!(lexicon.profile_index("marijuana"), Some(0));
        assert!(lexicon.profile_index("unknown-substance").is_none());
    }
}
