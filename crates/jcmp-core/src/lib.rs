//! Diff engine for jcmp.
//!
//! Compares two JSON documents structurally. Each document is flattened
//! into the set of paths it contains, and every path is classified as
//! added, removed, or changed; two documents with no classified paths are
//! identical. Paths use a dot/bracket grammar (`user.addresses[0].city`)
//! shared by enumeration, rendering, and parsing.
//!
//! # Key Types
//!
//! - [`Path`] / [`PathSegment`] -- dot/bracket address into a JSON document
//! - [`DocumentDiff`] / [`ChangedValue`] -- classified comparison result
//! - [`diff_documents`] / [`enumerate_paths`] / [`deep_equal`] -- the engine

pub mod diff;
pub mod enumerate;
pub mod error;
pub mod path;

pub use diff::{deep_equal, diff_documents, ChangedValue, DocumentDiff};
pub use enumerate::enumerate_paths;
pub use error::PathError;
pub use path::{Path, PathSegment};

#[cfg(test)]
mod proptests;
