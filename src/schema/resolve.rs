//! Exact-match column resolution.

use crate::types::RawTable;

/// Returns the index of the first column (in file order) whose name exactly
/// equals one of the `vocabulary` entries.
///
/// Column names are assumed already normalized (lower-cased, trimmed) by
/// [`RawTable::new`]. Matching is exact, never substring or fuzzy: a column
/// named `urlish` must not resolve against `url`.
pub fn resolve_column(columns: &[String], vocabulary: &[&str]) -> Option<usize> {
    columns
        .iter()
        .position(|name| vocabulary.contains(&name.as_str()))
}

/// Headerless-file recovery for SMS datasets.
///
/// The common UCI spam collection ships without a header line, so the first
/// data line gets consumed as the header and name-based resolution finds
/// nothing. When the table has at least two columns and the first cell of the
/// first data row case-insensitively contains `ham` or `spam`, treat column 0
/// as the label and column 1 as the text.
///
/// Returns `(label index, text index)`. The consumed header line is lost as
/// data; one row of such a file is the accepted cost of recovering it at all.
pub fn headerless_label_text_fallback(table: &RawTable) -> Option<(usize, usize)> {
    if table.columns().len() < 2 || table.row_count() == 0 {
        return None;
    }
    let first = table.cell(0, 0).to_lowercase();
    if first.contains("ham") || first.contains("spam") {
        Some((0, 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_first_matching_column_in_file_order() {
        let cols = columns(&["id", "website", "url"]);
        assert_eq!(resolve_column(&cols, &["url", "website"]), Some(1));
    }

    #[test]
    fn returns_none_without_exact_match() {
        let cols = columns(&["id", "notes"]);
        assert_eq!(resolve_column(&cols, &["url", "link"]), None);
    }

    #[test]
    fn never_matches_substrings_or_superstrings() {
        // Neither a superstring column name nor a substring one may resolve.
        let cols = columns(&["urlish", "ur", "urlencoded_notes"]);
        assert_eq!(resolve_column(&cols, &["url"]), None);
    }

    #[test]
    fn headerless_fallback_detects_ham_and_spam_leads() {
        let table = RawTable::new(
            columns(&["ham", "go until jurong point"]),
            vec![vec!["spam".to_string(), "free entry in 2 a wkly comp".to_string()]],
        );
        assert_eq!(headerless_label_text_fallback(&table), Some((0, 1)));
    }

    #[test]
    fn headerless_fallback_requires_two_columns_and_a_row() {
        let narrow = RawTable::new(
            columns(&["ham"]),
            vec![vec!["spam".to_string()]],
        );
        assert_eq!(headerless_label_text_fallback(&narrow), None);

        let empty = RawTable::new(columns(&["a", "b"]), vec![]);
        assert_eq!(headerless_label_text_fallback(&empty), None);
    }

    #[test]
    fn headerless_fallback_ignores_unrelated_first_cells() {
        let table = RawTable::new(
            columns(&["a", "b"]),
            vec![vec!["1".to_string(), "hello".to_string()]],
        );
        assert_eq!(headerless_label_text_fallback(&table), None);
    }
}
