//! Per-channel acquisition loop.
//!
//! Each channel runs a small state machine: Awaiting-Input, Rejected-Retry,
//! and the terminal Accepted/Skipped. An attempt that fails to parse or
//! validate surfaces its [`RejectionReason`] to the observer and loops back;
//! the loop never gives up on its own, only the user can skip.

use std::fmt;
use std::sync::Arc;

use crate::corpus::merge;
use crate::error::CorpusError;
use crate::types::{UnifiedCorpus, ValidatedDataset};
use crate::validate::{ChannelValidator, EmailValidator, SmsValidator, UrlValidator};

use super::observability::{AcquisitionObserver, DatasetStats};
use super::transport::UploadTransport;

/// Options controlling acquisition behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct AcquireOptions {
    /// Optional observer for user guidance/logging.
    pub observer: Option<Arc<dyn AcquisitionObserver>>,
}

impl fmt::Debug for AcquireOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcquireOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Acquire one channel's dataset through an upload-validate-retry loop.
///
/// On each attempt the transport supplies a table source; `None` skips the
/// channel (returns `None`, a valid outcome). A parse or validation failure
/// is reported to the observer and the loop asks again. A successful
/// validation returns the dataset.
pub fn acquire(
    validator: &dyn ChannelValidator,
    transport: &mut dyn UploadTransport,
    options: &AcquireOptions,
) -> Option<ValidatedDataset> {
    let channel = validator.channel();
    let mut attempt = 0usize;

    loop {
        attempt += 1;
        if let Some(obs) = options.observer.as_ref() {
            obs.on_requested(channel, attempt);
        }

        let Some(source) = transport.next_attempt(channel) else {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_skipped(channel);
            }
            return None;
        };

        match source.read_table().and_then(|t| validator.validate(&t)) {
            Ok(dataset) => {
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_accepted(
                        channel,
                        DatasetStats {
                            rows: dataset.records.len(),
                            dropped_unlabeled: dataset.dropped_unlabeled,
                        },
                    );
                }
                return Some(dataset);
            }
            Err(reason) => {
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_rejected(channel, &reason);
                }
            }
        }
    }
}

/// Acquire all three channels in order and merge the accepted datasets.
///
/// Channels are acquired fully (including retries) one after another; skipped
/// channels are simply absent from the merge. Fails with
/// [`CorpusError::NoData`] only when every channel was skipped. The final
/// distribution (and a single-class warning, when applicable) is reported to
/// the observer.
pub fn load_unified_corpus(
    transport: &mut dyn UploadTransport,
    options: &AcquireOptions,
) -> Result<UnifiedCorpus, CorpusError> {
    let url = UrlValidator::default();
    let sms = SmsValidator::default();
    let email = EmailValidator::default();
    let validators: [&dyn ChannelValidator; 3] = [&url, &sms, &email];

    let mut accepted = Vec::new();
    for validator in validators {
        if let Some(dataset) = acquire(validator, transport, options) {
            accepted.push(dataset);
        }
    }

    let corpus = merge(accepted)?;

    if let Some(obs) = options.observer.as_ref() {
        let balance = corpus.balance();
        obs.on_corpus_ready(corpus.len(), balance);
        if balance.is_single_class() {
            obs.on_single_class(balance);
        }
    }

    Ok(corpus)
}
