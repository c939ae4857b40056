//! The two comparison entry points: by URL and by direct text.

use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use jcmp_core::{diff_documents, DocumentDiff};

use crate::error::{CompareResult, InputLabel};
use crate::source::{fetch_json, parse_json, validate_url};

/// Timeout applied by the default client.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The complete result of one comparison.
///
/// Carries both parsed documents alongside the classified differences, so
/// a caller can render values in context without refetching anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// The first document, as parsed.
    pub json1: Value,
    /// The second document, as parsed.
    pub json2: Value,
    /// Added, removed, and changed paths.
    pub differences: DocumentDiff,
    /// `true` if no differences were found.
    pub identical: bool,
}

impl Comparison {
    fn from_documents(json1: Value, json2: Value) -> Self {
        let differences = diff_documents(&json1, &json2);
        let identical = differences.is_empty();
        Self {
            json1,
            json2,
            differences,
            identical,
        }
    }
}

/// Compares documents fetched over HTTP.
///
/// Wraps a `reqwest::Client`; clones are cheap and share the underlying
/// connection pool.
#[derive(Clone, Debug)]
pub struct Comparator {
    client: reqwest::Client,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator {
    /// A comparator with the default client and a 30 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// A comparator whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jcmp/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// A comparator over a caller-supplied client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch both URLs and compare the documents.
    ///
    /// Both URLs are validated before any I/O starts. The two fetches run
    /// concurrently; the first failure fails the whole comparison without
    /// waiting for the other fetch.
    pub async fn compare_urls(&self, url1: &str, url2: &str) -> CompareResult<Comparison> {
        let url1 = validate_url(url1)?;
        let url2 = validate_url(url2)?;

        let (json1, json2) = tokio::try_join!(
            fetch_json(&self.client, &url1),
            fetch_json(&self.client, &url2),
        )?;

        info!(url1 = %url1, url2 = %url2, "comparing fetched documents");
        Ok(Comparison::from_documents(json1, json2))
    }
}

/// Compare two documents fetched from URLs, using a shared default client.
pub async fn compare_urls(url1: &str, url2: &str) -> CompareResult<Comparison> {
    static DEFAULT: OnceLock<Comparator> = OnceLock::new();
    DEFAULT
        .get_or_init(Comparator::new)
        .compare_urls(url1, url2)
        .await
}

/// Compare two documents supplied directly as text.
///
/// Each input is parsed independently; the first parse failure is
/// reported with its input's label.
pub fn compare_direct(text1: &str, text2: &str) -> CompareResult<Comparison> {
    let json1 = parse_json(text1, InputLabel::First)?;
    let json2 = parse_json(text2, InputLabel::Second)?;
    Ok(Comparison::from_documents(json1, json2))
}
