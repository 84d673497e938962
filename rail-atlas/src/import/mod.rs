//! Network document importer.
//!
//! Validates a loosely-typed network description (a `serde_json::Value`,
//! typically loaded from plain or comment-tolerant JSON) and transforms it
//! into a [`crate::domain::Network`]. Decoding into the raw DTOs is the
//! schema-validation step; [`import`] then builds the graph, derives
//! per-connection costs, and resolves display names.
//!
//! Validation is all-or-nothing: any structural violation aborts the
//! import with an [`ImportError`], and a partial network is never
//! returned.

mod convert;
mod cost;
mod error;
mod types;

pub use convert::import;
pub use error::ImportError;
pub use types::{RawDimensions, RawLine, RawNames, RawNetwork, RawStop, RawTransfer};
