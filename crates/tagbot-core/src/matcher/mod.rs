//! Tag matcher: normalization + dictionary containment.
//!
//! Pipeline: Normalize → Exact containment → Fuzzy fallback

mod normalizer;
mod tagger;

pub use normalizer::*;
pub use tagger::*;
