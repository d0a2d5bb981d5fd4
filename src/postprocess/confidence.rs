use crate::postprocess::pair::ParsedPair;
use crate::postprocess::types::{Confidence, Verdict};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Confidence Filter - shape-based classification of matched fragments
///
/// Responsibilities:
/// - Assign a confidence tier and ignore flag to every candidate fragment
/// - Reject value shapes that cannot be literal secrets (variable
///   references, call expressions, prose, dotted property paths)
/// - Keep syntactically dense JSON-style pairs at the lower trust tier
/// - Stay total over arbitrary input: every string classifies, none error
///
/// The rules live in a fixed-priority table rather than nested branching so
/// precedence is explicit and each rule is independently testable. The first
/// rule whose predicate matches decides the verdict; a fragment that survives
/// the whole table is a real finding at medium confidence.

/// Call-like value shape, e.g. `getPassword()` or `vault.read(path)`
///
/// Shared compiled regex - compiled once, zero-copy access across threads.
static STATIC_CALL_SHAPE_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*\(.*\)$")
            .expect("Failed to compile call shape regex"),
    )
});

/// Values shorter than this are rejected as too short to be secrets
pub(crate) const DEFAULT_MIN_VALUE_LENGTH: usize = 3;

/// Parsed fragment plus the thresholds the rules consult
struct RuleInput<'a> {
    pair: ParsedPair<'a>,
    min_value_length: usize,
}

/// One entry in the ordered classification table
struct Rule {
    name: &'static str,
    applies: fn(&RuleInput<'_>) -> bool,
    verdict: Verdict,
}

/// The classification table, ordered by priority - first match decides
static RULES: &[Rule] = &[
    Rule {
        name: "too-short",
        applies: |input| input.pair.value.len() < input.min_value_length,
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "variable-reference",
        applies: |input| input.pair.value.starts_with('$'),
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "function-call",
        applies: |input| STATIC_CALL_SHAPE_REGEX.is_match(input.pair.value),
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "unquoted-prose",
        applies: |input| {
            input.pair.value.contains(char::is_whitespace) && input.pair.value_quote.is_none()
        },
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "dotted-reference",
        applies: |input| input.pair.value.contains('.') && !input.pair.is_quoted_json(),
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "double-equals",
        applies: |input| input.pair.value.contains("=="),
        verdict: Verdict::suppress(Confidence::Low),
    },
    Rule {
        name: "quoted-json",
        applies: |input| input.pair.is_quoted_json(),
        verdict: Verdict::keep(Confidence::Low),
    },
];

/// Classify a matched fragment into a confidence tier and ignore flag
///
/// Total over all strings, including empty input. A fragment with no
/// recognized delimiter is treated as a bare value with an empty key.
pub fn classify(fragment: &str) -> Verdict {
    classify_with(fragment, DEFAULT_MIN_VALUE_LENGTH)
}

/// Classify with an explicit minimum value length (engine-configured path)
pub(crate) fn classify_with(fragment: &str, min_value_length: usize) -> Verdict {
    let input = RuleInput {
        pair: ParsedPair::parse(fragment),
        min_value_length,
    };

    for rule in RULES {
        if (rule.applies)(&input) {
            tracing::trace!("Classifier rule '{}' decided fragment: {}", rule.name, fragment);
            return rule.verdict;
        }
    }

    Verdict::keep(Confidence::Medium)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_classified(fragment: &str, confidence: u8, ignore: bool) {
        let verdict = classify(fragment);
        assert_eq!(
            verdict.confidence.as_u8(),
            confidence,
            "confidence for {:?}",
            fragment
        );
        assert_eq!(verdict.ignore, ignore, "ignore for {:?}", fragment);
    }

    #[test]
    fn test_skips_short_values() {
        assert_classified("fo", 3, true);
        assert_classified("", 3, true);
        assert_classified("password=ab", 3, true);
    }

    #[test]
    fn test_skips_variable_references() {
        assert_classified("$variable", 3, true);
        assert_classified("password: ${DB_PASSWORD}", 3, true);
    }

    #[test]
    fn test_skips_function_calls() {
        assert_classified("func()", 3, true);
        assert_classified("password: getPassword(user)", 3, true);
    }

    #[test]
    fn test_skips_unquoted_prose() {
        assert_classified("ignore me please", 3, true);
    }

    #[test]
    fn test_skips_dotted_references() {
        assert_classified("password: ignore.me", 3, true);
    }

    #[test]
    fn test_skips_double_equals() {
        assert_classified("password: ignoreme==please", 3, true);
    }

    #[test]
    fn test_keeps_real_findings() {
        assert_classified("VeryStrong857#", 2, false);
        assert_classified("my.property=propertyEqualDelimitedPassword", 2, false);
        assert_classified("my.property:propertyColonDelimitedPassword", 2, false);
        assert_classified("my.property: sampleYmlPassword", 2, false);
    }

    #[test]
    fn test_whitespace_around_delimiter_is_trimmed() {
        assert_classified("my.property    =     propertySpacesAroundDelimited", 2, false);
    }

    #[test]
    fn test_quoted_json_kept_at_low_tier() {
        assert_classified("\"my.property\": \"sample%3YmlPassword\"", 3, false);
    }

    #[test]
    fn test_dotted_key_does_not_disqualify() {
        // Only the value side is checked for dots
        assert_classified("my.property: sampleYmlPassword", 2, false);
    }

    #[test]
    fn test_quoted_values_with_spaces_survive() {
        assert_classified("password: \"two words\"", 2, false);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for fragment in ["fo", "$variable", "VeryStrong857#", "\"a\": \"bcd\""] {
            assert_eq!(classify(fragment), classify(fragment));
        }
    }

    #[test]
    fn test_configured_min_length() {
        // Threshold of zero keeps one-character values
        let verdict = classify_with("x", 0);
        assert!(!verdict.ignore);
        assert_eq!(verdict.confidence, Confidence::Medium);
    }
}
