//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use docksplash_registry::{RegistryConfig, TlsConfig};

/// Browse repositories, tags, and digests of a Docker registry.
///
/// Keys: j/down next, k/up previous, l/enter select, h/q back or quit.
#[derive(Parser, Debug)]
#[command(name = "docksplash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Registry URL (e.g., `http://registry.example.com:5000`)
    #[arg(env = "DOCKSPLASH_REGISTRY_URL")]
    pub registry_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Additional CA certificate (PEM) to trust
    #[arg(long)]
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,
}

impl Cli {
    /// Builds the registry client configuration from the arguments.
    pub fn registry_config(&self) -> RegistryConfig {
        let config = RegistryConfig::new(&self.registry_url)
            .with_timeout(Duration::from_secs(self.timeout));

        if self.ca_cert.is_none() && !self.insecure {
            return config;
        }

        let mut tls = TlsConfig::new();
        if let Some(ref path) = self.ca_cert {
            tls = tls.with_ca_cert(path);
        }
        if self.insecure {
            tls = tls.insecure();
        }
        config.with_tls(tls)
    }
}
