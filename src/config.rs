//! Data source configuration.
//! The base URL for the CSV files is read from the environment so the same
//! build can point at a local export or the published data directory.

/// Environment variable overriding the default data location.
pub const DATA_URL_VAR: &str = "MACRODASH_DATA_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/data";

/// Resolved location of the dashboard CSV files.
#[derive(Debug, Clone)]
pub struct DataSources {
    base_url: String,
}

impl DataSources {
    /// Read the base URL from the environment (`.env` supported), falling
    /// back to the local default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(DATA_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Full URL for one CSV file name.
    pub fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_file_names() {
        let sources = DataSources::new("http://example.com/data/");
        assert_eq!(
            sources.url_for("negocios.csv"),
            "http://example.com/data/negocios.csv"
        );
        assert_eq!(
            sources.url_for("/EGDI_EPI.csv"),
            "http://example.com/data/EGDI_EPI.csv"
        );
    }
}
