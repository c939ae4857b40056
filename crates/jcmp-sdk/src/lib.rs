//! Client library for jcmp.
//!
//! Provides the two comparison entry points: [`compare_urls`] fetches both
//! documents over HTTP concurrently, [`compare_direct`] parses two pasted
//! texts. Both feed the jcmp-core diff engine and return a [`Comparison`]
//! carrying the parsed documents, the classified differences, and an
//! `identical` flag.

pub mod compare;
pub mod error;
pub mod source;

pub use compare::{compare_direct, compare_urls, Comparator, Comparison};
pub use error::{CompareError, CompareResult, InputLabel};

// Re-export key types
pub use jcmp_core::{
    deep_equal, diff_documents, enumerate_paths, ChangedValue, DocumentDiff, Path, PathSegment,
};
