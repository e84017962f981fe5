//! In-memory registry for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use docksplash_registry::{Digest, RegistryError};

use crate::registry::Registry;

#[derive(Debug, Default)]
pub struct StubRegistry {
    repositories: Vec<String>,
    tags: HashMap<String, Vec<String>>,
    digests: HashMap<(String, String), String>,
    catalog_fails: bool,
    next_failure: RefCell<Option<String>>,
    tag_requests: Cell<usize>,
    digest_requests: Cell<usize>,
}

impl StubRegistry {
    pub fn new(repositories: &[&str]) -> Self {
        Self {
            repositories: repositories.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, repository: &str, tags: &[&str]) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub fn with_digest(mut self, repository: &str, tag: &str, digest: &str) -> Self {
        self.digests
            .insert((repository.to_string(), tag.to_string()), digest.to_string());
        self
    }

    pub fn failing_catalog(mut self) -> Self {
        self.catalog_fails = true;
        self
    }

    /// Makes the next tag or digest request fail with a server error.
    pub fn fail_next(&self, message: &str) {
        *self.next_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn tag_requests(&self) -> usize {
        self.tag_requests.get()
    }

    pub fn digest_requests(&self) -> usize {
        self.digest_requests.get()
    }

    fn injected_failure(&self) -> Result<(), RegistryError> {
        match self.next_failure.borrow_mut().take() {
            Some(message) => Err(RegistryError::ServerError {
                status: 500,
                message,
            }),
            None => Ok(()),
        }
    }
}

impl Registry for StubRegistry {
    fn endpoint(&self) -> &str {
        "http://stub.registry:5000"
    }

    fn list_repositories(&self) -> Result<Vec<String>, RegistryError> {
        if self.catalog_fails {
            return Err(RegistryError::ServerError {
                status: 503,
                message: "catalog unavailable".to_string(),
            });
        }
        Ok(self.repositories.clone())
    }

    fn list_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        self.tag_requests.set(self.tag_requests.get() + 1);
        self.injected_failure()?;
        self.tags
            .get(repository)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                resource: repository.to_string(),
            })
    }

    fn get_digest(&self, repository: &str, tag: &str) -> Result<Digest, RegistryError> {
        self.digest_requests.set(self.digest_requests.get() + 1);
        self.injected_failure()?;
        self.digests
            .get(&(repository.to_string(), tag.to_string()))
            .and_then(|d| Digest::parse(d))
            .ok_or_else(|| RegistryError::NotFound {
                resource: format!("{repository}:{tag}"),
            })
    }
}
