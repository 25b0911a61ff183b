//! `phish-corpus` unifies heterogeneous, user-supplied tabular datasets (URL
//! lists, SMS collections, email corpora) with unknown, inconsistent schemas
//! into a single labeled text corpus for binary phishing/spam classification.
//!
//! The primary entrypoint is [`ingestion::load_unified_corpus`], which drives
//! an upload-validate-retry loop per channel and merges everything accepted
//! into a [`types::UnifiedCorpus`].
//!
//! ## What the pipeline does
//!
//! For each uploaded CSV with unknown column names and label encodings:
//!
//! - locates text/label (and subject/body) columns by exact-match lookup
//!   against per-channel vocabularies ([`schema`])
//! - normalizes heterogeneous label tokens (`ham`/`spam`, `legitimate`/
//!   `phishing`, `0`/`1`, signed codes) into the canonical 0 = safe,
//!   1 = malicious scheme, dropping rows it cannot resolve rather than
//!   guessing ([`schema::labels`])
//! - applies channel-specific text handling (URL token rewriting, subject +
//!   body joining) and caps oversized URL datasets by deterministic sampling
//!   ([`validate`])
//! - rejects malformed or mis-shaped files with a reason naming the missing
//!   role and the columns actually seen, so the user can fix the file and
//!   retry ([`error::RejectionReason`])
//! - tags every surviving row with its channel of origin and merges all
//!   accepted datasets, warning when only one class is present ([`corpus`])
//!
//! ## Quick example
//!
//! ```rust
//! use phish_corpus::ingestion::{
//!     load_unified_corpus, AcquireOptions, QueuedTransport, TableSource,
//! };
//! use phish_corpus::types::Channel;
//!
//! # fn main() -> Result<(), phish_corpus::CorpusError> {
//! // Scripted transport: one SMS file, URL and email channels skipped.
//! let mut transport = QueuedTransport::new();
//! transport.push(
//!     Channel::Sms,
//!     TableSource::Bytes(b"v1,v2\nham,See you at lunch\nspam,WINNER! Claim now\n".to_vec()),
//! );
//!
//! let corpus = load_unified_corpus(&mut transport, &AcquireOptions::default())?;
//! assert_eq!(corpus.len(), 2);
//!
//! // Aligned arrays for the feature-extraction/training collaborator.
//! let (texts, labels) = corpus.training_arrays();
//! assert_eq!(texts.len(), labels.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Validating a single table
//!
//! ```rust
//! use phish_corpus::ingestion::csv::read_table_from_bytes;
//! use phish_corpus::validate::{ChannelValidator, UrlValidator};
//!
//! let table = read_table_from_bytes(
//!     b"url,label\nhttp://www.paypal.com/login,phishing\n",
//! ).unwrap();
//!
//! let dataset = UrlValidator::default().validate(&table).unwrap();
//! assert_eq!(dataset.records[0].text, "paypal com login");
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV reading, the upload transport abstraction, the
//!   per-channel acquisition state machine, and acquisition observability
//! - [`schema`]: column vocabularies, exact-match resolution, label
//!   normalization
//! - [`validate`]: the per-channel validators (url/sms/email)
//! - [`corpus`]: merging and NDJSON export
//! - [`types`]: the core data model
//! - [`text`]: text normalization for feature extraction
//! - [`model`]: classifier and persistence collaborator contracts
//! - [`error`]: error types used across the pipeline

pub mod corpus;
pub mod error;
pub mod ingestion;
pub mod model;
pub mod schema;
pub mod text;
pub mod types;
pub mod validate;

pub use error::{CorpusError, ModelError, RejectionReason, ValidationResult};
