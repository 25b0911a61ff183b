//! Per-channel table validation.
//!
//! A validator takes one untyped [`RawTable`] and either produces a
//! [`ValidatedDataset`] of `{text, label, source}` records or rejects the
//! table with a reason precise enough for the user to fix the file. Channel
//! specifics live in the submodules:
//!
//! - [`url`]: URL lists; rejects numeric-only columns, rewrites URLs into
//!   tokens, caps oversized datasets by deterministic sampling
//! - [`sms`]: SMS collections; recovers common headerless files
//! - [`email`]: email corpora; joins subject and body
//!
//! Shared policy: required columns are resolved by exact-match vocabulary
//! lookup, labels are normalized into the canonical binary scheme, and rows
//! whose label resolves to neither class are dropped, never guessed.

pub mod email;
pub mod sms;
pub mod url;

use crate::error::RejectionReason;
use crate::schema::{resolve_column, vocabulary, Role};
use crate::types::{Channel, RawTable, ValidatedDataset};

pub use email::EmailValidator;
pub use sms::SmsValidator;
pub use url::UrlValidator;

/// A channel-specific table validator.
pub trait ChannelValidator {
    /// The channel this validator handles.
    fn channel(&self) -> Channel;

    /// Validate one uploaded table into a per-channel dataset.
    fn validate(&self, table: &RawTable) -> Result<ValidatedDataset, RejectionReason>;
}

/// Resolve a required role or reject with the columns seen and the accepted
/// names for correction.
pub(crate) fn require_column(
    table: &RawTable,
    channel: Channel,
    role: Role,
) -> Result<usize, RejectionReason> {
    let accepted = vocabulary(channel, role);
    resolve_column(table.columns(), accepted).ok_or_else(|| RejectionReason::MissingColumn {
        role,
        found: table.columns().to_vec(),
        accepted,
    })
}
