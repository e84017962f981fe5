//! # Docksplash Registry
//!
//! Read-only client for the Docker Registry HTTP API v2.
//!
//! The client covers exactly the three queries an interactive registry
//! browser needs:
//!
//! - **Catalog**: `GET /v2/_catalog` lists repositories
//! - **Tags**: `GET /v2/<repository>/tags/list` lists tags of one repository
//! - **Digest**: `GET /v2/<repository>/manifests/<tag>` resolves a tag to the
//!   digest reported in the `Docker-Content-Digest` response header
//!
//! No credentials are sent and no responses are cached; every call hits the
//! registry and returns a fresh snapshot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docksplash_registry::{RegistryClient, RegistryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegistryConfig::new("http://registry.example.com:5000");
//!     let client = RegistryClient::new(config)?;
//!
//!     for repository in client.list_repositories().await? {
//!         println!("{repository}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod client;
mod config;
mod error;
mod oci;

pub use client::RegistryClient;
pub use config::{RegistryConfig, TlsConfig};
pub use error::RegistryError;
pub use oci::{Catalog, Digest, ErrorResponse, MediaType, RegistryApiError, TagList};
