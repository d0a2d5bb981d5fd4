//! # Noisegate - False-Positive Suppression for Secret Scanners
//!
//! Noisegate sits between a secret scanner's match extraction stage and its
//! reporting stage. The scanner hands over every candidate match (the matched
//! key/value fragment plus the full source line it came from); noisegate
//! decides whether the candidate is noise and how much the scanner should
//! trust it if kept.
//!
//! ## Features
//!
//! - **Shape classification**: confidence tiers and ignore flags from value
//!   shape heuristics (length, variable syntax, call shapes, punctuation)
//! - **Placeholder detection**: suppresses key/value pairs where the value is
//!   just the key name in disguise (`PASSWORD_DB : password_db`)
//! - **Unicode artifact detection**: suppresses localized UI strings that
//!   leak into scans through unicode escape sequences
//! - **Pipeline-ready**: pure, stateless predicates safe for unsynchronized
//!   parallel use, plus a rayon-backed batch evaluator
//!
//! ## Quick Start
//!
//! ```
//! use noisegate::{Candidate, Postprocessor};
//!
//! let engine = Postprocessor::default();
//! let candidate = Candidate::new("password: VeryStrong857#", "password: VeryStrong857#");
//! let verdict = engine.evaluate(&candidate);
//! assert!(!verdict.ignore);
//! ```

pub mod postprocess;

pub use postprocess::{
    Candidate, Confidence, PostprocessConfig, Postprocessor, Verdict, classify,
    has_foreign_unicode, is_placeholder,
};

/// Result type alias for noisegate operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
