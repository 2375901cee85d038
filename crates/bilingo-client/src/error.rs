//! Client error type.

/// Errors raised while loading the artifact or addressing the page.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Page has no element matching {0}")]
    MissingRegion(&'static str),
}
