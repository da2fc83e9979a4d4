use crate::client::ApiClient;
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Settings shared by every command that talks to the API.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: Url,
    pub timeout: Duration,
}

impl GlobalArgs {
    /// # Errors
    /// Returns an error if `api_url` is not an absolute http(s) URL.
    pub fn new(api_url: &str, timeout_secs: u64) -> Result<Self> {
        let api_url =
            Url::parse(api_url.trim()).with_context(|| format!("invalid API URL: {api_url}"))?;

        if !matches!(api_url.scheme(), "http" | "https") {
            anyhow::bail!("API URL must use http or https, got: {api_url}");
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Base URL without a trailing slash, as the endpoint builder expects.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(self.base_url(), self.timeout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() -> Result<()> {
        let args = GlobalArgs::new("https://api.carpool.dev/", 5)?;
        assert_eq!(args.base_url(), "https://api.carpool.dev");
        assert_eq!(args.timeout, Duration::from_secs(5));

        let args = GlobalArgs::new("http://localhost:5000/api", 10)?;
        assert_eq!(args.base_url(), "http://localhost:5000/api");
        Ok(())
    }

    #[test]
    fn test_global_args_rejects_bad_urls() {
        assert!(GlobalArgs::new("not a url", 10).is_err());
        assert!(GlobalArgs::new("ftp://files.carpool.dev", 10).is_err());
    }
}
