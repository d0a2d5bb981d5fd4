use crate::postprocess::pair::ParsedPair;

/// Identity Filter - placeholder detection for key/value findings
///
/// Responsibilities:
/// - Detect findings where the value is just a restatement of a key name
///   (`PASSWORD_DB : password_db`), which marks template/example content
/// - Cross-reference the matched fragment against the full source line,
///   whose key may differ from the fragment's own key
/// - Compare identifiers case-insensitively with formatting stripped, so
///   `DB_PASSWORD`, `db.password` and `dbPassword` all collapse together
///
/// The check is deliberately permissive toward suppression: its job is
/// noise reduction, and it treats undelimited or malformed input as "no
/// match" rather than failing.

/// Reduce a token to its comparable core: lowercase, alphanumerics only
fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Two normalized tokens name the same identifier when either contains the
/// other, which catches prefixed variants like `DB_PASSWORD` vs `password`.
/// Empty tokens never relate to anything.
fn related_tokens(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Detect a placeholder finding: the value restates a key name instead of
/// holding a secret literal
///
/// `matched_text` is the fragment the pattern matcher extracted;
/// `line_content` is the full source line it came from (they may be equal
/// when the match spans the whole line). Both are parsed independently
/// because the line's key may differ from the fragment's key.
pub fn is_placeholder(matched_text: &str, line_content: &str) -> bool {
    let matched = ParsedPair::parse(matched_text);
    let line = ParsedPair::parse(line_content);

    let match_key = normalize(matched.key);
    let match_value = normalize(matched.value);
    let line_key = normalize(line.key);
    let line_value = normalize(line.value);

    // Self-referential pair: key and value collapse to the same token
    if (!match_key.is_empty() && match_key == match_value)
        || (!line_key.is_empty() && line_key == line_value)
    {
        tracing::trace!("Placeholder (key/value identity): {}", matched_text);
        return true;
    }

    // Value restating the other pair's key, e.g. a prefixed alias
    if related_tokens(&match_value, &line_key) || related_tokens(&line_value, &match_key) {
        tracing::trace!("Placeholder (cross-key restatement): {}", matched_text);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_case_and_formatting() {
        assert_eq!(normalize("PASSWORD_DB"), "passworddb");
        assert_eq!(normalize("$db.password"), "dbpassword");
        assert_eq!(normalize("api.appSecret"), "apiappsecret");
        assert_eq!(normalize("_-.$"), "");
    }

    #[test]
    fn test_related_tokens() {
        assert!(related_tokens("dbpassword", "password"));
        assert!(related_tokens("password", "dbpassword"));
        assert!(related_tokens("secret", "secret"));
        assert!(!related_tokens("verystrong857", "password"));
        // Empty tokens never relate, even though contains("") is true
        assert!(!related_tokens("", "password"));
        assert!(!related_tokens("password", ""));
        assert!(!related_tokens("", ""));
    }

    #[test]
    fn test_same_key_value_in_properties_file() {
        assert!(is_placeholder(
            "PASSWORD_DB : password_db",
            "PASSWORD_DB : password_db"
        ));
    }

    #[test]
    fn test_same_key_value_via_line_key() {
        assert!(is_placeholder("PASSWORD : db_password", "DB_PASSWORD : db_password"));
    }

    #[test]
    fn test_alphanumeric_match_through_formatting() {
        assert!(is_placeholder(
            "PASSWORD : $db.password",
            "DB_PASSWORD : $db.password"
        ));
    }

    #[test]
    fn test_same_key_value_secret_in_yaml_line() {
        assert!(is_placeholder("SECRET: api.Secret", "APISECRET: api.Secret"));
    }

    #[test]
    fn test_same_key_value_in_json() {
        assert!(is_placeholder("\"SECRET\": \"SECRET\"", "\"SECRET\": \"SECRET\""));
    }

    #[test]
    fn test_real_password_not_suppressed() {
        assert!(!is_placeholder(
            "password_couchbase: VeryStrong857#",
            "password_couchbase: VeryStrong857#"
        ));
        assert!(!is_placeholder(
            "password: VeryStrong857#",
            "couchbase_password: VeryStrong857#"
        ));
        assert!(!is_placeholder("secret: VeryStrong857#", "secret: VeryStrong857#"));
    }

    #[test]
    fn test_cross_key_restatement_with_differing_pairs() {
        assert!(is_placeholder("Secret=npazAppSecret", "api.appSecret=apiAppSecret"));
    }

    #[test]
    fn test_undelimited_input_never_matches() {
        assert!(!is_placeholder("VeryStrong857#", "VeryStrong857#"));
        assert!(!is_placeholder("", ""));
        assert!(!is_placeholder(":", ":"));
    }

    #[test]
    fn test_symmetric_when_tokens_normalize_identically() {
        // Swapping which input supplies the restated key does not change the outcome
        assert!(is_placeholder("PASSWORD : db_password", "DB_PASSWORD : other"));
        assert!(is_placeholder("DB_PASSWORD : other", "PASSWORD : db_password"));
    }
}
