//! Interactive browsing session.

use anyhow::{Context, Result};
use docksplash_navigator::{BlockingRegistry, Navigator};
use docksplash_registry::RegistryClient;
use tracing::info;

use crate::cli::Cli;
use crate::terminal::Terminal;

/// Fetches the catalog, then hands the terminal to the navigator.
///
/// # Errors
///
/// Returns an error if the client cannot be configured, the initial catalog
/// fetch fails, or the terminal cannot be driven.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.registry_config();
    info!(registry = %config.url, timeout = ?config.timeout, "Browsing registry");

    let client = RegistryClient::new(config).context("Failed to create registry client")?;
    let registry = BlockingRegistry::new(client).context("Failed to create async runtime")?;

    // Fetched before raw mode so a failure prints as a normal error.
    let mut navigator = Navigator::start(registry)
        .with_context(|| format!("Failed to list repositories at {}", cli.registry_url))?;

    let mut terminal = Terminal::enter()?;
    docksplash_navigator::run(&mut navigator, &mut terminal)
}
