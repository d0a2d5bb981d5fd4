use crate::postprocess::confidence;
use crate::postprocess::identity;
use crate::postprocess::types::{Candidate, PostprocessConfig, Verdict};
use crate::postprocess::unicode;
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;

/// Postprocessing engine - combines the three predicates into one decision
///
/// The scanner pipeline hands every candidate to `evaluate`, which runs the
/// shape classifier and then ORs in suppression from the placeholder and
/// unicode checks. All predicates read only their arguments, so a single
/// engine can be shared across scanning threads without synchronization;
/// `evaluate_batch` does exactly that via rayon.
pub struct Postprocessor {
    config: PostprocessConfig,
    ignore_patterns: Vec<Regex>,
}

impl Postprocessor {
    /// Create an engine from configuration, compiling any custom ignore
    /// patterns
    pub fn new(config: PostprocessConfig) -> Result<Self> {
        let mut ignore_patterns = Vec::with_capacity(config.ignore_patterns.len());
        for pattern in &config.ignore_patterns {
            let regex = Regex::new(pattern)
                .with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
            ignore_patterns.push(regex);
        }

        tracing::debug!(
            "Postprocessor initialized (min_value_length={}, {} custom ignore patterns)",
            config.min_value_length,
            ignore_patterns.len()
        );

        Ok(Self {
            config,
            ignore_patterns,
        })
    }

    /// Classify a fragment into a confidence tier and ignore flag
    pub fn classify(&self, fragment: &str) -> Verdict {
        confidence::classify_with(fragment, self.config.min_value_length)
    }

    /// Check whether a finding is a placeholder (value restates a key name)
    pub fn is_placeholder(&self, matched_text: &str, line_content: &str) -> bool {
        identity::is_placeholder(matched_text, line_content)
    }

    /// Check whether a fragment carries non-ASCII unicode artifacts
    pub fn has_foreign_unicode(&self, fragment: &str) -> bool {
        unicode::has_foreign_unicode(fragment)
    }

    /// Combined keep/drop decision for one candidate
    ///
    /// The confidence tier always comes from the classifier; the ignore flag
    /// is set as soon as any enabled predicate votes to suppress.
    pub fn evaluate(&self, candidate: &Candidate) -> Verdict {
        let mut verdict = self.classify(&candidate.matched_text);

        if !verdict.ignore
            && self.config.check_placeholders
            && self.is_placeholder(&candidate.matched_text, &candidate.line_content)
        {
            verdict.ignore = true;
        }

        if !verdict.ignore
            && self.config.check_unicode
            && self.has_foreign_unicode(&candidate.matched_text)
        {
            verdict.ignore = true;
        }

        if !verdict.ignore
            && self
                .ignore_patterns
                .iter()
                .any(|regex| regex.is_match(&candidate.matched_text))
        {
            verdict.ignore = true;
        }

        verdict
    }

    /// Evaluate many candidates in parallel, preserving input order
    pub fn evaluate_batch(&self, candidates: &[Candidate]) -> Vec<Verdict> {
        let verdicts: Vec<Verdict> = candidates
            .par_iter()
            .map(|candidate| self.evaluate(candidate))
            .collect();

        tracing::debug!(
            "Postprocessed {} candidates, {} suppressed",
            verdicts.len(),
            verdicts.iter().filter(|verdict| verdict.ignore).count()
        );

        verdicts
    }

    /// The configuration this engine was built with
    pub fn config(&self) -> &PostprocessConfig {
        &self.config
    }
}

impl Default for Postprocessor {
    fn default() -> Self {
        Self {
            config: PostprocessConfig::default(),
            ignore_patterns: vec![],
        }
    }
}
