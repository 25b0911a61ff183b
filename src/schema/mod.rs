//! Schema detection over untyped tables.
//!
//! Uploaded datasets arrive with unknown, inconsistent column names and label
//! encodings. This module holds the pieces that make sense of them:
//!
//! - [`vocab`]: per-channel accepted column names for each semantic role
//! - [`resolve`]: exact-match column resolution (plus the headerless SMS
//!   recovery heuristic)
//! - [`labels`]: normalization of heterogeneous raw label tokens into the
//!   canonical binary scheme

pub mod labels;
pub mod resolve;
pub mod vocab;

pub use labels::{normalize_column, normalize_token};
pub use resolve::{headerless_label_text_fallback, resolve_column};
pub use vocab::{vocabulary, Role};
