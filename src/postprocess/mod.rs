//! Postprocess - candidate match validation and noise suppression
//!
//! This module holds the decision logic applied to every candidate secret
//! match after pattern extraction: shape-based confidence classification,
//! placeholder (key-restates-value) detection, and unicode artifact
//! detection. All three predicates are pure and total over arbitrary
//! strings; malformed input is a suppression signal, never an error.

mod core;

pub mod confidence;
pub mod identity;
pub mod pair;
pub mod types;
pub mod unicode;

// Public API exports
pub use confidence::classify;
pub use self::core::Postprocessor;
pub use identity::is_placeholder;
pub use types::{Candidate, Confidence, PostprocessConfig, Verdict};
pub use unicode::{UnicodeArtifact, has_foreign_unicode};
