//! Acquisition of per-channel datasets from untrusted uploads.
//!
//! Most callers should use [`load_unified_corpus`], which:
//!
//! - drives the upload-validate-retry loop for each channel via an
//!   [`UploadTransport`]
//! - validates each attempt with the channel's validator
//! - merges everything accepted into a [`crate::types::UnifiedCorpus`]
//! - optionally reports progress/guidance to an [`AcquisitionObserver`]
//!
//! The pieces are also available individually:
//! - [`csv`]: CSV reading into an untyped table
//! - [`transport`]: the upload source abstraction
//! - [`acquire`]: the per-channel acquisition state machine

pub mod acquire;
pub mod csv;
pub mod observability;
pub mod transport;

pub use acquire::{acquire, load_unified_corpus, AcquireOptions};
pub use observability::{AcquisitionObserver, CompositeObserver, DatasetStats, StdErrObserver};
pub use transport::{PromptTransport, QueuedTransport, TableSource, UploadTransport};
