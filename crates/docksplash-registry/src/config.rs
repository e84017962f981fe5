//! Configuration types for registry client.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::RegistryError;

/// Configuration for the registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry base URL without trailing slash (e.g., "<http://registry.example.com:5000>").
    pub url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// TLS configuration for registries with private certificates.
    pub tls: Option<TlsConfig>,

    /// User agent string.
    pub user_agent: String,
}

impl RegistryConfig {
    /// Creates a new registry configuration with the given base URL.
    ///
    /// Trailing slashes are stripped so API paths can be appended directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use docksplash_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("http://localhost:5000/");
    /// assert_eq!(config.url, "http://localhost:5000");
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            tls: None,
            user_agent: format!("docksplash-registry/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TLS configuration.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Parses and checks the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] if the URL does not parse, has no
    /// host, or uses a scheme other than `http` or `https`.
    pub fn endpoint(&self) -> Result<Url, RegistryError> {
        let invalid = || RegistryError::InvalidUrl {
            url: self.url.clone(),
        };

        let url = Url::parse(&self.url).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }
        Ok(url)
    }

    /// Returns the full URL for an API path below `/v2/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docksplash_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("http://localhost:5000");
    /// assert_eq!(config.api_url("_catalog"), "http://localhost:5000/v2/_catalog");
    /// ```
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.url, path.trim_start_matches('/'))
    }
}

/// TLS configuration for registries served with private certificates.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Path to an additional CA certificate file (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Whether to skip certificate verification (NOT recommended for production).
    pub insecure_skip_verify: bool,
}

impl TlsConfig {
    /// Creates a new TLS configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ca_cert: None,
            insecure_skip_verify: false,
        }
    }

    /// Sets the CA certificate path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    /// Enables insecure mode (skips certificate verification).
    ///
    /// # Warning
    ///
    /// This should only be used against trusted local registries.
    #[must_use]
    pub const fn insecure(mut self) -> Self {
        self.insecure_skip_verify = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = RegistryConfig::new("http://localhost:5000");
        assert_eq!(config.url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.tls.is_none());
        assert!(config.user_agent.starts_with("docksplash-registry/"));
    }

    #[test]
    fn test_config_strips_trailing_slashes() {
        let config = RegistryConfig::new("https://registry.example.com//");
        assert_eq!(config.url, "https://registry.example.com");
    }

    #[test]
    fn test_config_with_timeout() {
        let config = RegistryConfig::new("http://localhost:5000")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_api_url() {
        let config = RegistryConfig::new("http://localhost:5000/");
        assert_eq!(
            config.api_url("library/nginx/tags/list"),
            "http://localhost:5000/v2/library/nginx/tags/list"
        );
    }

    #[test]
    fn test_endpoint_accepts_http_and_https() {
        assert!(RegistryConfig::new("http://localhost:5000").endpoint().is_ok());
        assert!(RegistryConfig::new("https://registry.example.com")
            .endpoint()
            .is_ok());
    }

    #[test]
    fn test_endpoint_rejects_bad_urls() {
        for url in ["localhost:5000", "ftp://registry.example.com", "not a url", ""] {
            let err = RegistryConfig::new(url).endpoint().unwrap_err();
            assert!(matches!(err, RegistryError::InvalidUrl { .. }), "{url}");
        }
    }

    #[test]
    fn test_tls_config() {
        let tls = TlsConfig::new().with_ca_cert("/path/to/ca.crt");
        assert_eq!(tls.ca_cert, Some(PathBuf::from("/path/to/ca.crt")));
        assert!(!tls.insecure_skip_verify);
        assert!(tls.insecure().insecure_skip_verify);
    }
}
