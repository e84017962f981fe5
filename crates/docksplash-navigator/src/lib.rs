//! # Docksplash Navigator
//!
//! Keyboard-driven browser state machine for a container registry.
//!
//! The navigator holds a stack of views. The bottom view is always the
//! repository list; selecting a repository pushes its tag list, selecting a
//! tag pushes its digest. Going back pops one view, so the cursor of the view
//! underneath is exactly where the operator left it.
//!
//! ```text
//!  Repositories ──select──▶ Tags ──select──▶ Digest
//!       ▲                    │  ▲               │
//!       └───────back─────────┘  └───any key─────┘
//! ```
//!
//! ## Components
//!
//! - [`Navigator`]: the state machine, driven by [`Key`]s
//! - [`render`]: turns the current state into a [`Screen`]
//! - [`Console`] and [`run`]: the synchronous draw/read/apply loop
//! - [`Registry`] and [`BlockingRegistry`]: the registry seam, backed by
//!   [`docksplash_registry::RegistryClient`]

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod console;
mod keys;
mod list;
mod navigator;
mod registry;
mod render;

#[cfg(test)]
mod testing;

pub use console::{run, Console};
pub use keys::Key;
pub use list::ListView;
pub use navigator::{Flow, Level, Navigator, View};
pub use registry::{BlockingRegistry, Registry};
pub use render::{render, Screen, SELECTED_PREFIX, SELECTED_SUFFIX};
