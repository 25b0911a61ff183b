//! URL channel validation.

use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;

use crate::error::RejectionReason;
use crate::schema::{normalize_column, Role};
use crate::types::{Channel, RawTable, Record, ValidatedDataset};

use super::{require_column, ChannelValidator};

static SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").expect("static regex"));
static WWW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^www\.").expect("static regex"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\-.]").expect("static regex"));

/// Validates URL list uploads.
///
/// Requires a text column and a label column. URL strings are rewritten so
/// the tokenizer sees words (`paypal com login`) instead of opaque URLs:
/// the leading scheme and `www.` prefix are stripped, and `/`, `-`, `.`
/// become spaces. Datasets larger than `max_rows` are sampled down to exactly
/// `max_rows` with a fixed-seed shuffle so runs stay reproducible.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    /// Row cap applied after label normalization.
    pub max_rows: usize,
    /// Seed for the sampling shuffle.
    pub seed: u64,
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self {
            max_rows: 100_000,
            seed: 42,
        }
    }
}

impl ChannelValidator for UrlValidator {
    fn channel(&self) -> Channel {
        Channel::Url
    }

    fn validate(&self, table: &RawTable) -> Result<ValidatedDataset, RejectionReason> {
        let text_idx = require_column(table, Channel::Url, Role::Text)?;
        let label_idx = require_column(table, Channel::Url, Role::Label)?;

        if !looks_textual(table, text_idx) {
            return Err(RejectionReason::NotText {
                column: table.columns()[text_idx].clone(),
            });
        }

        let labels = normalize_column(table.column_values(label_idx));
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for (row, label) in labels.into_iter().enumerate() {
            match label {
                Some(label) => records.push(Record {
                    text: rewrite_url(table.cell(row, text_idx)),
                    label,
                    source: Channel::Url,
                }),
                None => dropped += 1,
            }
        }

        if records.len() > self.max_rows {
            let mut rng = StdRng::seed_from_u64(self.seed);
            records.shuffle(&mut rng);
            records.truncate(self.max_rows);
        }

        Ok(ValidatedDataset {
            channel: Channel::Url,
            records,
            dropped_unlabeled: dropped,
        })
    }
}

/// Expose URL tokens as words: drop the scheme and `www.` prefix, then turn
/// path separators, hyphens, and dots into spaces.
fn rewrite_url(raw: &str) -> String {
    let stripped = SCHEME.replace(raw, "");
    let stripped = WWW.replace(&stripped, "");
    SEPARATORS.replace_all(&stripped, " ").into_owned()
}

/// Lightweight shape check: sample up to 5 non-empty values and require at
/// least one character outside digits, `.`, and `-`. A column of row ids or
/// scores fails this; real URLs pass.
fn looks_textual(table: &RawTable, col: usize) -> bool {
    table
        .column_values(col)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .take(5)
        .any(|v| {
            v.chars()
                .any(|c| !(c.is_ascii_digit() || c == '.' || c == '-'))
        })
}

#[cfg(test)]
mod tests {
    use super::rewrite_url;

    #[test]
    fn rewrite_strips_scheme_and_www_and_separators() {
        assert_eq!(rewrite_url("http://www.paypal.com/login"), "paypal com login");
        assert_eq!(rewrite_url("https://evil-site.io/a/b"), "evil site io a b");
    }

    #[test]
    fn rewrite_only_strips_leading_prefixes() {
        // Mid-string occurrences are separator-split, not stripped.
        assert_eq!(rewrite_url("example.com/redirect/www.x"), "example com redirect www x");
    }
}
