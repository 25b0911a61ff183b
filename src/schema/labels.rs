//! Normalization of raw label tokens into the canonical binary scheme.

use crate::types::Label;

/// Primary text/zero-one mapping. Covers the textual synonyms seen across
/// public URL/SMS/email datasets plus the literal `0`/`1` encodings.
const PRIMARY: &[(&str, Label)] = &[
    ("ham", Label::Safe),
    ("legitimate", Label::Safe),
    ("safe", Label::Safe),
    ("good", Label::Safe),
    ("0", Label::Safe),
    ("0.0", Label::Safe),
    ("safe email", Label::Safe),
    ("spam", Label::Malicious),
    ("phishing", Label::Malicious),
    ("malicious", Label::Malicious),
    ("bad", Label::Malicious),
    ("1", Label::Malicious),
    ("1.0", Label::Malicious),
    ("phishing email", Label::Malicious),
];

/// Signed-numeric fallback: -1 = malicious, 1 = safe.
///
/// Consulted only when the primary lookup misses. The primary table already
/// claims `1`/`1.0`, so this table's safe entries are unreachable; the
/// precedence must stay this way so the literal `1` keeps meaning malicious.
const SIGNED_FALLBACK: &[(&str, Label)] = &[
    ("-1", Label::Malicious),
    ("-1.0", Label::Malicious),
    ("1", Label::Safe),
    ("1.0", Label::Safe),
];

fn lookup(table: &[(&str, Label)], token: &str) -> Option<Label> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, label)| *label)
}

/// Normalize one raw label token.
///
/// Lower-cases and trims the token, then resolves it through the primary
/// table and, failing that, the signed-numeric fallback. Returns `None` for
/// tokens neither table knows; callers drop such rows rather than guessing a
/// class.
pub fn normalize_token(raw: &str) -> Option<Label> {
    let token = raw.trim().to_lowercase();
    lookup(PRIMARY, &token).or_else(|| lookup(SIGNED_FALLBACK, &token))
}

/// Normalize a whole label column, one outcome per row.
///
/// Never fails; unknown tokens come back as `None`.
pub fn normalize_column<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Option<Label>> {
    values.into_iter().map(normalize_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_synonyms_resolve_to_documented_classes() {
        assert_eq!(normalize_token("ham"), Some(Label::Safe));
        assert_eq!(normalize_token("legitimate"), Some(Label::Safe));
        assert_eq!(normalize_token("safe email"), Some(Label::Safe));
        assert_eq!(normalize_token("spam"), Some(Label::Malicious));
        assert_eq!(normalize_token("phishing email"), Some(Label::Malicious));
        assert_eq!(normalize_token("malicious"), Some(Label::Malicious));
    }

    #[test]
    fn tokens_are_case_and_whitespace_normalized() {
        assert_eq!(normalize_token("PHISHING"), Some(Label::Malicious));
        assert_eq!(normalize_token("  Ham "), Some(Label::Safe));
    }

    #[test]
    fn zero_one_encodings_use_the_primary_convention() {
        assert_eq!(normalize_token("0"), Some(Label::Safe));
        assert_eq!(normalize_token("0.0"), Some(Label::Safe));
        // "1" resolves through the primary table, never the signed fallback.
        assert_eq!(normalize_token("1"), Some(Label::Malicious));
        assert_eq!(normalize_token("1.0"), Some(Label::Malicious));
    }

    #[test]
    fn signed_encoding_reaches_the_fallback_only_on_primary_miss() {
        assert_eq!(normalize_token("-1"), Some(Label::Malicious));
        assert_eq!(normalize_token("-1.0"), Some(Label::Malicious));
    }

    #[test]
    fn unknown_tokens_are_never_defaulted() {
        assert_eq!(normalize_token("maybe"), None);
        assert_eq!(normalize_token(""), None);
        assert_eq!(normalize_token("2"), None);
    }

    #[test]
    fn column_normalization_preserves_row_order() {
        let out = normalize_column(["ham", "maybe", "SPAM"]);
        assert_eq!(
            out,
            vec![Some(Label::Safe), None, Some(Label::Malicious)]
        );
    }
}
