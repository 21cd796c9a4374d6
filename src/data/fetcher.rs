//! CSV Fetcher Module
//! Downloads raw delimited text from the configured data URLs.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("Response from {url} is not text (content-type: {content_type})")]
    NotText { url: String, content_type: String },
}

/// Blocking HTTP client for the dashboard CSV files.
pub struct DataFetcher {
    client: Client,
}

impl Default for DataFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Fetch one CSV file as raw text.
    ///
    /// Fails on network errors, non-success status codes and non-text
    /// content types. Row-level problems are not this layer's concern.
    pub fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Static file servers often omit the header; only an explicit
        // non-text type is rejected.
        if let Some(content_type) = resp.headers().get(reqwest::header::CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or("").to_ascii_lowercase();
            if !is_text_like(&content_type) {
                return Err(FetchError::NotText {
                    url: url.to_string(),
                    content_type,
                });
            }
        }

        resp.text().map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch two CSV files in parallel.
    ///
    /// Either failure aborts the pair; there is no partial-result path.
    pub fn fetch_pair(&self, url_a: &str, url_b: &str) -> Result<(String, String), FetchError> {
        let (a, b) = rayon::join(|| self.fetch_text(url_a), || self.fetch_text(url_b));
        Ok((a?, b?))
    }
}

fn is_text_like(content_type: &str) -> bool {
    content_type.is_empty()
        || content_type.starts_with("text/")
        || content_type.contains("csv")
        || content_type.contains("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_csv_content_types() {
        assert!(is_text_like("text/csv; charset=utf-8"));
        assert!(is_text_like("text/plain"));
        assert!(is_text_like("application/csv"));
        assert!(is_text_like("application/octet-stream"));
        assert!(is_text_like(""));
    }

    #[test]
    fn rejects_non_text_content_types() {
        assert!(!is_text_like("image/png"));
        assert!(!is_text_like("application/json"));
        assert!(!is_text_like("application/pdf"));
    }
}
