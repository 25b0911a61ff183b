//! Upload transport abstraction.
//!
//! The acquisition loop never touches a console, browser widget, or any other
//! environment-specific upload mechanism directly. It asks an
//! [`UploadTransport`] for the next attempt, which keeps the loop testable and
//! lets hosts (local CLI, notebook, service) plug in their own source of
//! files.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use crate::error::ValidationResult;
use crate::types::{Channel, RawTable};

use super::csv::{read_table_from_bytes, read_table_from_path};

/// One upload attempt: a filesystem path or already-read bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Read the table from this path.
    Path(PathBuf),
    /// Parse the table from these raw bytes.
    Bytes(Vec<u8>),
}

impl TableSource {
    /// Parse this source into a [`RawTable`].
    pub fn read_table(&self) -> ValidationResult<RawTable> {
        match self {
            TableSource::Path(path) => read_table_from_path(path),
            TableSource::Bytes(bytes) => read_table_from_bytes(bytes),
        }
    }
}

/// Supplies upload attempts to the acquisition loop.
pub trait UploadTransport {
    /// The next attempt for `channel`.
    ///
    /// `None` means the user declined to supply data for this channel; the
    /// channel is skipped. That is a valid terminal outcome, not an error.
    fn next_attempt(&mut self, channel: Channel) -> Option<TableSource>;
}

/// A transport backed by pre-queued attempts per channel.
///
/// Useful for scripted/batch runs and tests: queue the files to offer, and
/// once a channel's queue runs dry further requests read as a skip.
#[derive(Debug, Default)]
pub struct QueuedTransport {
    queues: HashMap<Channel, VecDeque<TableSource>>,
}

impl QueuedTransport {
    /// Create an empty transport (every channel skips).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an attempt for `channel`.
    pub fn push(&mut self, channel: Channel, source: TableSource) {
        self.queues.entry(channel).or_default().push_back(source);
    }
}

impl UploadTransport for QueuedTransport {
    fn next_attempt(&mut self, channel: Channel) -> Option<TableSource> {
        self.queues.get_mut(&channel).and_then(|q| q.pop_front())
    }
}

/// A transport that delegates to a prompt function returning a path.
///
/// This is the shape interactive hosts use: the function asks the user for a
/// path and returns `None` when they decline.
pub struct PromptTransport<F> {
    prompt: F,
}

impl<F> PromptTransport<F>
where
    F: FnMut(Channel) -> Option<PathBuf>,
{
    /// Wrap a prompt function.
    pub fn new(prompt: F) -> Self {
        Self { prompt }
    }
}

impl<F> UploadTransport for PromptTransport<F>
where
    F: FnMut(Channel) -> Option<PathBuf>,
{
    fn next_attempt(&mut self, channel: Channel) -> Option<TableSource> {
        (self.prompt)(channel).map(TableSource::Path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_transport_drains_then_skips() {
        let mut transport = QueuedTransport::new();
        transport.push(Channel::Sms, TableSource::Bytes(b"a,b\n".to_vec()));

        assert!(transport.next_attempt(Channel::Sms).is_some());
        assert!(transport.next_attempt(Channel::Sms).is_none());
        assert!(transport.next_attempt(Channel::Url).is_none());
    }

    #[test]
    fn prompt_transport_maps_paths_and_declines() {
        let mut answers = vec![Some(PathBuf::from("sms.csv")), None].into_iter();
        let mut transport = PromptTransport::new(|_| answers.next().flatten());

        assert_eq!(
            transport.next_attempt(Channel::Sms),
            Some(TableSource::Path(PathBuf::from("sms.csv")))
        );
        assert_eq!(transport.next_attempt(Channel::Sms), None);
    }
}
