//! Retrieval of the built artifact.

use async_trait::async_trait;

use crate::error::ClientError;

/// Source of the artifact's HTML.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the document at `location` as text.
    async fn fetch(&self, location: &str) -> Result<String, ClientError>;
}

/// Append the cache-busting version to the artifact location.
///
/// The build and the page read `version` from the same configuration, so both
/// sides agree on the exact URL.
pub fn artifact_url(base: &str, version: Option<&str>) -> String {
    match version.map(str::trim).filter(|v| !v.is_empty()) {
        Some(version) => {
            let join = if base.contains('?') { '&' } else { '?' };
            format!("{}{}v={}", base, join, version)
        }
        None => base.to_string(),
    }
}

/// Fetches over HTTP(S). Any non-2xx answer is an error.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ClientError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ClientError::Request {
            url: url.to_string(),
            source,
        })
    }
}

/// Reads the artifact from disk, ignoring any query suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<String, ClientError> {
        let path = location.split('?').next().unwrap_or(location);

        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ClientError::Io {
                path: path.to_string(),
                source,
            })
    }
}

/// Picks HTTP for `http://` and `https://` locations, the filesystem otherwise.
#[derive(Debug, Clone, Default)]
pub struct AutoFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl AutoFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for AutoFetcher {
    async fn fetch(&self, location: &str) -> Result<String, ClientError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            self.http.fetch(location).await
        } else {
            self.file.fetch(location).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn appends_version() {
        assert_eq!(artifact_url("/dest/content.html", Some("42")), "/dest/content.html?v=42");
        assert_eq!(artifact_url("/c.html?lang=zh", Some("42")), "/c.html?lang=zh&v=42");
    }

    #[test]
    fn blank_version_leaves_url_alone() {
        assert_eq!(artifact_url("/dest/content.html", None), "/dest/content.html");
        assert_eq!(artifact_url("/dest/content.html", Some("  ")), "/dest/content.html");
    }

    #[tokio::test]
    async fn file_fetcher_ignores_query() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.html");
        std::fs::write(&path, "<h1>Hi</h1>").unwrap();

        let location = artifact_url(path.to_str().unwrap(), Some("7"));
        let html = FileFetcher.fetch(&location).await.unwrap();

        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope.html");

        let err = AutoFetcher::new().fetch(path.to_str().unwrap()).await.unwrap_err();

        assert!(matches!(err, ClientError::Io { .. }));
    }
}
