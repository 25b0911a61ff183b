use std::fmt;
use std::sync::Arc;

use crate::error::RejectionReason;
use crate::types::{Channel, ClassBalance};

/// Minimal stats reported when a channel's dataset is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    /// Number of validated rows.
    pub rows: usize,
    /// Rows excluded for unresolvable labels.
    pub dropped_unlabeled: usize,
}

/// Observer interface for acquisition outcomes.
///
/// Implementors can print user guidance, record metrics, or log. Everything
/// here is informational; the acquisition loop's semantics are carried
/// entirely by its return values.
pub trait AcquisitionObserver: Send + Sync {
    /// Called before each upload attempt for a channel.
    fn on_requested(&self, _channel: Channel, _attempt: usize) {}

    /// Called when the user declines to supply data for a channel.
    fn on_skipped(&self, _channel: Channel) {}

    /// Called when an attempt is rejected; the loop will ask again.
    fn on_rejected(&self, _channel: Channel, _reason: &RejectionReason) {}

    /// Called when a channel's dataset is accepted.
    fn on_accepted(&self, _channel: Channel, _stats: DatasetStats) {}

    /// Called after the merge with the final corpus size and class balance.
    fn on_corpus_ready(&self, _rows: usize, _balance: ClassBalance) {}

    /// Called when the merged corpus contains only one class.
    fn on_single_class(&self, _balance: ClassBalance) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn AcquisitionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn AcquisitionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl AcquisitionObserver for CompositeObserver {
    fn on_requested(&self, channel: Channel, attempt: usize) {
        for o in &self.observers {
            o.on_requested(channel, attempt);
        }
    }

    fn on_skipped(&self, channel: Channel) {
        for o in &self.observers {
            o.on_skipped(channel);
        }
    }

    fn on_rejected(&self, channel: Channel, reason: &RejectionReason) {
        for o in &self.observers {
            o.on_rejected(channel, reason);
        }
    }

    fn on_accepted(&self, channel: Channel, stats: DatasetStats) {
        for o in &self.observers {
            o.on_accepted(channel, stats);
        }
    }

    fn on_corpus_ready(&self, rows: usize, balance: ClassBalance) {
        for o in &self.observers {
            o.on_corpus_ready(rows, balance);
        }
    }

    fn on_single_class(&self, balance: ClassBalance) {
        for o in &self.observers {
            o.on_single_class(balance);
        }
    }
}

/// Logs acquisition events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl AcquisitionObserver for StdErrObserver {
    fn on_requested(&self, channel: Channel, attempt: usize) {
        eprintln!("[acquire][request] channel={channel} attempt={attempt}");
    }

    fn on_skipped(&self, channel: Channel) {
        eprintln!("[acquire][skip] channel={channel}");
    }

    fn on_rejected(&self, channel: Channel, reason: &RejectionReason) {
        eprintln!("[acquire][rejected] channel={channel} reason={reason}");
    }

    fn on_accepted(&self, channel: Channel, stats: DatasetStats) {
        eprintln!(
            "[acquire][ok] channel={channel} rows={} dropped_unlabeled={}",
            stats.rows, stats.dropped_unlabeled
        );
    }

    fn on_corpus_ready(&self, rows: usize, balance: ClassBalance) {
        eprintln!(
            "[corpus][ready] rows={rows} safe={} malicious={}",
            balance.safe, balance.malicious
        );
    }

    fn on_single_class(&self, balance: ClassBalance) {
        eprintln!(
            "[corpus][WARNING] only one class present (safe={} malicious={}); stratified splits will fail",
            balance.safe, balance.malicious
        );
    }
}
