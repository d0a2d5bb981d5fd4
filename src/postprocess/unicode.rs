/// Unicode Filter - artifact detection for matched fragments
///
/// Responsibilities:
/// - Decode `\u` (four hex digits) and `\U` (eight hex digits) escape
///   sequences embedded in candidate fragments
/// - Flag fragments that are not representable as printable ASCII once
///   decoded - these are localized UI strings, not real secrets
/// - Treat malformed escapes as evidence of non-ASCII origin rather than
///   as an error: decoding never fails, it classifies
///
/// The two suppression causes (decoded-but-non-ASCII and malformed escape)
/// are kept as distinct outcomes so they can be tuned independently later,
/// even though both currently map to the same ignore decision.

/// Printable ASCII range accepted in real secrets
const PRINTABLE_ASCII: std::ops::RangeInclusive<u32> = 0x20..=0x7E;

/// Outcome of inspecting a fragment for unicode artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeArtifact {
    /// Entirely printable ASCII once decoded
    None,
    /// A decoded or literal character falls outside printable ASCII
    NonAscii(char),
    /// An escape sequence that does not decode (wrong digit count or
    /// invalid code point)
    MalformedEscape,
}

/// Inspect a fragment for unicode artifacts, decoding embedded escapes
pub fn inspect(fragment: &str) -> UnicodeArtifact {
    let chars: Vec<char> = fragment.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\\' && i + 1 < chars.len() && matches!(chars[i + 1], 'u' | 'U') {
            let digits = if chars[i + 1] == 'u' { 4 } else { 8 };
            match decode_escape(&chars[i + 2..], digits) {
                Some(decoded) => {
                    if !PRINTABLE_ASCII.contains(&(decoded as u32)) {
                        return UnicodeArtifact::NonAscii(decoded);
                    }
                    i += 2 + digits;
                }
                None => return UnicodeArtifact::MalformedEscape,
            }
        } else {
            if !PRINTABLE_ASCII.contains(&(c as u32)) {
                return UnicodeArtifact::NonAscii(c);
            }
            i += 1;
        }
    }

    UnicodeArtifact::None
}

/// Decode the leading `digits` hex characters into a code point
fn decode_escape(rest: &[char], digits: usize) -> Option<char> {
    if rest.len() < digits {
        return None;
    }
    let mut code_point: u32 = 0;
    for &c in &rest[..digits] {
        code_point = code_point.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
    }
    char::from_u32(code_point)
}

/// True when a fragment carries non-ASCII content, escaped or literal
///
/// Fragments whose escape sequences all decode inside printable ASCII are
/// real secrets that merely used escape notation for symbols and are kept.
pub fn has_foreign_unicode(fragment: &str) -> bool {
    match inspect(fragment) {
        UnicodeArtifact::None => false,
        UnicodeArtifact::NonAscii(c) => {
            tracing::trace!("Non-ASCII character {:?} in fragment: {}", c, fragment);
            true
        }
        UnicodeArtifact::MalformedEscape => {
            tracing::trace!("Malformed unicode escape in fragment: {}", fragment);
            true
        }
    }
}
