//! Tagbot Core Library
//!
//! A tag-based screening chatbot: free-text utterances are matched against
//! static keyword dictionaries, and a fixed decision tree of leading yes/no
//! questions narrows the conversation down to one of a small closed set of
//! outcomes.
//!
//! # Architecture
//!
//! ```text
//! User text → Normalization → Tag Matching ──┬─ drug tag ──────► Identified
//!                                            │                   (advice)
//!                                            └─ common tag or
//!                                               no match ───────► Leading
//!                                                                 questions
//!                                                                    │
//!                                                     yes ──► Identified
//!                                                     no  ──► next question
//!                                                     exhausted ──► Failed
//! ```
//!
//! # Core Principle
//!
//! **Every transition is total.** Unrecognized input is never an error; it
//! fail-safes into the leading-question sequence.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DrugProfile, ConversationState, Session, etc.)
//! - [`lexicon`]: Static tag dictionaries, validation, the builtin table
//! - [`matcher`]: Normalization and tag containment with fuzzy fallback
//! - [`dialogue`]: The conversation state machine

pub mod dialogue;
pub mod lexicon;
pub mod matcher;
pub mod models;

// Re-export commonly used types
pub use dialogue::Conversation;
pub use lexicon::{builtin, Lexicon, LexiconError, LexiconResult};
pub use matcher::{TagMatch, TagMatcher};
pub use models::{ConversationState, DrugProfile, LeadingQuestion, Session, Speaker, Turn};
