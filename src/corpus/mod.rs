//! Corpus assembly and export.
//!
//! - [`merge`]: concatenate accepted per-channel datasets into a
//!   [`crate::types::UnifiedCorpus`]
//! - [`export`]: write a corpus as NDJSON for downstream training tools

pub mod export;
pub mod merge;

pub use export::{write_ndjson, write_ndjson_to_path};
pub use merge::merge;
