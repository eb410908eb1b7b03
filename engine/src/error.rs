//! Load-path failures.
//!
//! All variants are caught at the loader boundary, logged, and swallowed;
//! nothing here ever reaches the rendered page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("network failure fetching `{url}`: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetching `{url}` returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON.
    #[error("bundle at `{url}` is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
