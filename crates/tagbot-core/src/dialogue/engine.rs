//! Conversation engine: walks the state machine one user turn at a time.

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::matcher::{TagMatch, TagMatcher};
use crate::models::{ConversationState, DrugProfile, Session, Speaker};

/// A single conversation against one lexicon.
///
/// The lexicon is shared and immutable; each conversation carries only its
/// own [`ConversationState`] and [`Session`], so concurrent conversations
/// need nothing beyond independent `Conversation` values.
pub struct Conversation<'a> {
    lexicon: &'a Lexicon,
    matcher: TagMatcher<'a>,
    state: ConversationState,
    session: Session,
}

impl<'a> Conversation<'a> {
    /// Start a conversation in the `Waiting` state. The greeting is
    /// recorded as the opening bot turn.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        let mut session = Session::new();
        session.record(Speaker::Bot, lexicon.greeting.clone());

        Self {
            lexicon,
            matcher: TagMatcher::new(lexicon),
            state: ConversationState::Waiting,
            session,
        }
    }

    /// Opening line to show before the first user turn.
    pub fn greeting(&self) -> &str {
        &self.lexicon.greeting
    }

    /// Current state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Whether the conversation has reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// The session record, including the transcript so far.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The identified profile, once the conversation has reached
    /// `Identified`.
    pub fn identified_profile(&self) -> Option<&DrugProfile> {
        match self.state {
            ConversationState::Identified(index) => self.lexicon.profiles.get(index),
            _ => None,
        }
    }

    /// Respond to one user utterance, applying exactly one state
    /// transition. Total: any input gets a response.
    pub fn respond(&mut self, message: &str) -> String {
        self.session.record(Speaker::User, message);

        let reply = match self.state.clone() {
            ConversationState::Waiting => self.respond_from_waiting(message),
            ConversationState::AskingCommonSymptom(index) => {
                self.respond_from_question(message, index)
            }
            // Terminal states never transition again.
            ConversationState::Identified(_) | ConversationState::Failed => {
                self.lexicon.wrap_up.clone()
            }
        };

        self.session.record(Speaker::Bot, reply.clone());
        reply
    }

    fn respond_from_waiting(&mut self, message: &str) -> String {
        match self.matcher.match_message(message) {
            TagMatch::Drug { profile, keyword } => {
                debug!(keyword = %keyword, "identified from waiting");
                self.identify(profile)
            }
            // A common-symptom hit and unrecognized input both route into
            // the question sequence; unknown input is not an error.
            TagMatch::Common { .. } | TagMatch::NoMatch => {
                self.state = ConversationState::AskingCommonSymptom(0);
                format!(
                    "{} {}",
                    self.lexicon.clarify_preamble, self.lexicon.questions[0].prompt
                )
            }
        }
    }

    fn respond_from_question(&mut self, message: &str, index: usize) -> String {
        if self.matcher.is_affirmative(message) {
            let profile_id = &self.lexicon.questions[index].profile_id;
            // Validation guarantees every question targets a declared profile.
            let profile = self
                .lexicon
                .profile_index(profile_id)
                .unwrap_or_default();
            return self.identify(profile);
        }

        let next = index + 1;
        if next < self.lexicon.questions.len() {
            self.state = ConversationState::AskingCommonSymptom(next);
            self.lexicon.questions[next].prompt.clone()
        } else {
            debug!("question sequence exhausted");
            self.state = ConversationState::Failed;
            self.lexicon.failure_advice.clone()
        }
    }

    fn identify(&mut self, profile: usize) -> String {
        debug!(profile = %self.lexicon.profiles[profile].id, "conversation identified");
        self.state = ConversationState::Identified(profile);
        self.lexicon.profiles[profile].advice.clone()
    }
}
