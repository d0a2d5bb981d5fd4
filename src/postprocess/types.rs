use serde::{Deserialize, Serialize};

/// Coarse trust tier attached to a kept finding
///
/// Lower numbers mean the scanner should trust the finding more. Tier 1 is
/// reserved for upstream pattern matchers that can vouch for a match (e.g.
/// provider-specific key formats); the shape heuristics here never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Confirmed by a high-precision pattern
    High = 1,
    /// Likely a real finding
    Medium = 2,
    /// Likely noise, kept only for completeness
    Low = 3,
}

impl Confidence {
    /// Numeric tier as reported to scanner output
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Outcome of postprocessing a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Trust tier if the finding is kept
    pub confidence: Confidence,
    /// True means the pipeline must drop the finding regardless of confidence
    pub ignore: bool,
}

impl Verdict {
    pub(crate) const fn keep(confidence: Confidence) -> Self {
        Self {
            confidence,
            ignore: false,
        }
    }

    pub(crate) const fn suppress(confidence: Confidence) -> Self {
        Self {
            confidence,
            ignore: true,
        }
    }
}

/// A candidate secret occurrence handed over by the match extraction stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The matched key/value fragment as it appeared in source
    pub matched_text: String,

    /// The full line containing the match (may equal the fragment)
    pub line_content: String,
}

impl Candidate {
    pub fn new(matched_text: impl Into<String>, line_content: impl Into<String>) -> Self {
        Self {
            matched_text: matched_text.into(),
            line_content: line_content.into(),
        }
    }
}

/// Configuration for the postprocessing engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostprocessConfig {
    /// Minimum trimmed value length for a fragment to survive classification
    pub min_value_length: usize,
    /// Suppress findings where the value restates the key name
    pub check_placeholders: bool,
    /// Suppress findings carrying non-ASCII unicode artifacts
    pub check_unicode: bool,
    /// Extra regex patterns whose matches are always suppressed
    pub ignore_patterns: Vec<String>,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            min_value_length: 3,
            check_placeholders: true,
            check_unicode: true,
            ignore_patterns: vec![],
        }
    }
}
