//! Registry seam used by the navigator.

use docksplash_registry::{Digest, RegistryClient, RegistryError};
use tokio::runtime::{Builder, Runtime};

/// Synchronous registry queries the navigator issues.
///
/// Each call blocks until the registry answers or the request fails, so at
/// most one request is ever in flight.
pub trait Registry {
    /// Base URL of the registry, shown in every view.
    fn endpoint(&self) -> &str;

    /// Lists repositories in catalog order.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the catalog cannot be fetched or parsed.
    fn list_repositories(&self) -> Result<Vec<String>, RegistryError>;

    /// Lists the tags of `repository` in registry order.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the tag list cannot be fetched or parsed.
    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;

    /// Resolves `repository:tag` to its manifest digest.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the manifest cannot be resolved.
    fn get_digest(&self, repository: &str, tag: &str) -> Result<Digest, RegistryError>;
}

/// Runs an async [`RegistryClient`] on a private current-thread runtime.
#[derive(Debug)]
pub struct BlockingRegistry {
    client: RegistryClient,
    runtime: Runtime,
}

impl BlockingRegistry {
    /// Wraps `client` with its own runtime.
    ///
    /// Must not be called from within an async context.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be created.
    pub fn new(client: RegistryClient) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { client, runtime })
    }

    /// Returns the wrapped client.
    #[must_use]
    pub const fn client(&self) -> &RegistryClient {
        &self.client
    }
}

impl Registry for BlockingRegistry {
    fn endpoint(&self) -> &str {
        &self.client.config().url
    }

    fn list_repositories(&self) -> Result<Vec<String>, RegistryError> {
        self.runtime.block_on(self.client.list_repositories())
    }

    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        self.runtime.block_on(self.client.list_tags(repository))
    }

    fn get_digest(&self, repository: &str, tag: &str) -> Result<Digest, RegistryError> {
        self.runtime.block_on(self.client.get_digest(repository, tag))
    }
}
