//! Docker Registry HTTP API v2 client.
//!
//! This module provides the read-only queries used to browse a registry:
//! the catalog, the tag list of a repository, and the digest of a tag.

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::oci::{Catalog, Digest, ErrorResponse, MediaType, TagList};
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};

/// Client for browsing a Docker-compatible registry.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Creates a new registry client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, TLS material cannot be loaded,
    /// or the HTTP client cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use docksplash_registry::{RegistryClient, RegistryConfig};
    ///
    /// let config = RegistryConfig::new("http://localhost:5000");
    /// let client = RegistryClient::new(config)?;
    /// # Ok::<(), docksplash_registry::RegistryError>(())
    /// ```
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.endpoint()?;
        let http = Self::build_http_client(&config)?;

        Ok(Self { config, http })
    }

    /// Returns the registry configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Lists all repositories in the registry catalog, in registry order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the registry answers with a
    /// non-success status, or the body lacks a `repositories` array.
    pub async fn list_repositories(&self) -> Result<Vec<String>, RegistryError> {
        let url = self.config.api_url("_catalog");
        tracing::debug!(%url, "Listing repositories");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response, "catalog").await?;

        let body = response.bytes().await?;
        let catalog: Catalog =
            serde_json::from_slice(&body).map_err(|source| RegistryError::Parse {
                context: "catalog response",
                source,
            })?;

        Ok(catalog.repositories)
    }

    /// Lists all tags of a repository, in registry order.
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository name as returned by the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the repository does not exist,
    /// and [`RegistryError::Parse`] if the body lacks a `tags` field.
    pub async fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        let url = self.config.api_url(&format!("{repository}/tags/list"));
        tracing::debug!(%url, repository, "Listing tags");

        let response = self.http.get(&url).send().await?;
        let response = Self::check_status(response, repository).await?;

        let body = response.bytes().await?;
        let tag_list: TagList =
            serde_json::from_slice(&body).map_err(|source| RegistryError::Parse {
                context: "tag list response",
                source,
            })?;

        Ok(tag_list.tags)
    }

    /// Resolves a tag to the digest of its schema 2 manifest.
    ///
    /// The digest is read from the `Docker-Content-Digest` response header;
    /// the manifest body is not inspected.
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository name.
    /// * `tag` - Tag within the repository.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the tag does not exist and
    /// [`RegistryError::BadResponse`] if the digest header is missing or
    /// malformed.
    pub async fn get_digest(&self, repository: &str, tag: &str) -> Result<Digest, RegistryError> {
        let url = self.config.api_url(&format!("{repository}/manifests/{tag}"));
        tracing::debug!(%url, repository, tag, "Resolving digest");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, MediaType::DOCKER_MANIFEST_V2)
            .send()
            .await?;
        let response = Self::check_status(response, &format!("{repository}:{tag}")).await?;

        let header = response
            .headers()
            .get(MediaType::CONTENT_DIGEST_HEADER)
            .ok_or_else(|| RegistryError::BadResponse {
                message: format!(
                    "{} header missing for {repository}:{tag}",
                    MediaType::CONTENT_DIGEST_HEADER
                ),
            })?;

        let value = header.to_str().map_err(|_| RegistryError::BadResponse {
            message: format!("{} header is not valid text", MediaType::CONTENT_DIGEST_HEADER),
        })?;

        Digest::parse(value).ok_or_else(|| RegistryError::BadResponse {
            message: format!("malformed digest '{value}'"),
        })
    }

    /// Maps non-success statuses onto the error taxonomy.
    async fn check_status(response: Response, resource: &str) -> Result<Response, RegistryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound {
                resource: resource.to_string(),
            });
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) if !body.errors.is_empty() => body.summary(),
            _ => text.trim().to_string(),
        };

        Err(RegistryError::ServerError {
            status: status.as_u16(),
            message,
        })
    }

    /// Builds the HTTP client with proper configuration.
    fn build_http_client(config: &RegistryConfig) -> Result<reqwest::Client, RegistryError> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);

        if let Some(ref tls) = config.tls {
            if tls.insecure_skip_verify {
                builder = builder.danger_accept_invalid_certs(true);
            }

            if let Some(ref ca_cert) = tls.ca_cert {
                let cert_pem = std::fs::read(ca_cert).map_err(|e| RegistryError::Io {
                    path: ca_cert.clone(),
                    source: e,
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
                    RegistryError::Tls {
                        message: format!("Invalid CA certificate: {e}"),
                    }
                })?;
                builder = builder.add_root_certificate(cert);
            }
        }

        builder.build().map_err(|e| RegistryError::ConnectionFailed {
            url: config.url.clone(),
            source: e,
        })
    }
}
