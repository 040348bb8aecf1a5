//! Property tests for transition totality.

use proptest::prelude::*;

use tagbot_core::lexicon::builtin;
use tagbot_core::models::ConversationState;
use tagbot_core::Conversation;

proptest! {
    /// Any first utterance lands in Identified or at question 0, never
    /// anywhere else, and never panics.
    #[test]
    fn waiting_always_transitions_somewhere_sane(message in "\\PC*") {
        let lexicon = builtin();
        let mut convo = Conversation::new(&lexicon);

        let reply = convo.respond(&message);
        prop_assert!(!reply.is_empty());

        match convo.state() {
            ConversationState::Identified(_)
            | ConversationState::AskingCommonSymptom(0) => {}
            other => prop_assert!(false, "unexpected state {:?}", other),
        }
    }

    /// From the question sequence, any sequence of answers either
    /// identifies a profile or walks every question once and fails.
    #[test]
    fn question_walk_always_terminates(answers in proptest::collection::vec("\\PC*", 0..16)) {
        let lexicon = builtin();
        let mut convo = Conversation::new(&lexicon);
        convo.respond("zzzzqqqq");

        let mut asked = 0usize;
        for answer in &answers {
            if convo.is_finished() {
                break;
            }
            convo.respond(answer);
            asked += 1;
        }

        // At most one transition per answer, and the sequence can't run
        // past the declared question count.
        prop_assert!(asked <= answers.len());
        match convo.state() {
            ConversationState::Identified(_) | ConversationState::Failed => {}
            ConversationState::AskingCommonSymptom(i) => {
                prop_assert!(*i < lexicon.questions.len());
                prop_assert!(*i <= asked);
            }
            ConversationState::Waiting => prop_assert!(false, "walked back to Waiting"),
        }
    }
}
