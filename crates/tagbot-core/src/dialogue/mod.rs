//! Dialogue state machine.
//!
//! States and transitions:
//! - `Waiting` → drug tag hit: `Identified`; common tag hit or no hit:
//!   `AskingCommonSymptom(0)` (fail-safe default).
//! - `AskingCommonSymptom(i)` → affirmative: `Identified` with question i's
//!   profile; otherwise question i+1, or `Failed` once exhausted.
//! - `Identified` / `Failed` are terminal.
//!
//! Every transition is total and synchronous: one utterance in, one
//! response out, no errors surfaced for unrecognized input.

mod engine;

pub use engine::*;
