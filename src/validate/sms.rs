//! SMS channel validation.

use crate::error::RejectionReason;
use crate::schema::{headerless_label_text_fallback, normalize_column, resolve_column, vocabulary, Role};
use crate::types::{Channel, RawTable, Record, ValidatedDataset};

use super::ChannelValidator;

/// Validates SMS collection uploads.
///
/// Requires a text column and a label column. When neither resolves by name,
/// the headerless-file heuristic is tried: common UCI-style dumps ship
/// without headers, and are recovered by treating column 0 as the label and
/// column 1 as the text. The text is kept verbatim; only labels are
/// normalized.
#[derive(Debug, Clone, Default)]
pub struct SmsValidator;

impl ChannelValidator for SmsValidator {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    fn validate(&self, table: &RawTable) -> Result<ValidatedDataset, RejectionReason> {
        let text_vocab = vocabulary(Channel::Sms, Role::Text);
        let label_vocab = vocabulary(Channel::Sms, Role::Label);

        let mut text_idx = resolve_column(table.columns(), text_vocab);
        let mut label_idx = resolve_column(table.columns(), label_vocab);

        if text_idx.is_none() && label_idx.is_none() {
            if let Some((label, text)) = headerless_label_text_fallback(table) {
                label_idx = Some(label);
                text_idx = Some(text);
            }
        }

        let text_idx = text_idx.ok_or_else(|| RejectionReason::MissingColumn {
            role: Role::Text,
            found: table.columns().to_vec(),
            accepted: text_vocab,
        })?;
        let label_idx = label_idx.ok_or_else(|| RejectionReason::MissingColumn {
            role: Role::Label,
            found: table.columns().to_vec(),
            accepted: label_vocab,
        })?;

        let labels = normalize_column(table.column_values(label_idx));
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for (row, label) in labels.into_iter().enumerate() {
            match label {
                Some(label) => records.push(Record {
                    text: table.cell(row, text_idx).to_string(),
                    label,
                    source: Channel::Sms,
                }),
                None => dropped += 1,
            }
        }

        Ok(ValidatedDataset {
            channel: Channel::Sms,
            records,
            dropped_unlabeled: dropped,
        })
    }
}
