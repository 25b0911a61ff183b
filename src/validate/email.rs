//! Email channel validation.

use crate::error::RejectionReason;
use crate::schema::{normalize_column, resolve_column, vocabulary, Role};
use crate::types::{Channel, RawTable, Record, ValidatedDataset};

use super::{require_column, ChannelValidator};

/// Validates email corpus uploads.
///
/// Requires a label column plus at least one of a subject or body column.
/// When both are present the record text is `subject + " " + body` (missing
/// cells read as empty strings); otherwise whichever column exists is used
/// alone. Rows with unresolvable labels are dropped and counted so the user
/// learns how much of their file was ignored.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl ChannelValidator for EmailValidator {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn validate(&self, table: &RawTable) -> Result<ValidatedDataset, RejectionReason> {
        let label_idx = require_column(table, Channel::Email, Role::Label)?;

        let subject_idx = resolve_column(table.columns(), vocabulary(Channel::Email, Role::Subject));
        let body_idx = resolve_column(table.columns(), vocabulary(Channel::Email, Role::Body));

        if subject_idx.is_none() && body_idx.is_none() {
            return Err(RejectionReason::MissingTextSource {
                found: table.columns().to_vec(),
            });
        }

        let labels = normalize_column(table.column_values(label_idx));
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for (row, label) in labels.into_iter().enumerate() {
            match label {
                Some(label) => records.push(Record {
                    text: row_text(table, row, subject_idx, body_idx),
                    label,
                    source: Channel::Email,
                }),
                None => dropped += 1,
            }
        }

        Ok(ValidatedDataset {
            channel: Channel::Email,
            records,
            dropped_unlabeled: dropped,
        })
    }
}

fn row_text(table: &RawTable, row: usize, subject: Option<usize>, body: Option<usize>) -> String {
    match (subject, body) {
        (Some(s), Some(b)) => format!("{} {}", table.cell(row, s), table.cell(row, b)),
        (Some(s), None) => table.cell(row, s).to_string(),
        (None, Some(b)) => table.cell(row, b).to_string(),
        (None, None) => unreachable!("validated above"),
    }
}
