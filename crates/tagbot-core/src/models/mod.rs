//! Domain models for the tagbot system.

mod profile;
mod session;
mod state;

pub use profile::*;
pub use session::*;
pub use state::*;
