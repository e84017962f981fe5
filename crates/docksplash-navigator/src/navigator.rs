//! The navigation state machine.

use docksplash_registry::{Digest, RegistryError};

use crate::keys::Key;
use crate::list::ListView;
use crate::registry::Registry;

/// Which level of the hierarchy a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The catalog.
    Repositories,
    /// Tags of one repository.
    Tags,
    /// Digest of one tag.
    DigestView,
}

/// One entry of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Repository list from the catalog.
    Repositories(ListView),
    /// Tag list of a repository.
    Tags {
        /// Repository the tags belong to.
        repository: String,
        /// Tags with their cursor.
        tags: ListView,
    },
    /// Digest resolved for a tag.
    Digest {
        /// Repository name.
        repository: String,
        /// Tag name.
        tag: String,
        /// Manifest digest.
        digest: Digest,
    },
}

impl View {
    /// Returns the level of this view.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Repositories(_) => Level::Repositories,
            Self::Tags { .. } => Level::Tags,
            Self::Digest { .. } => Level::DigestView,
        }
    }

    /// Returns the list this view navigates, if it has one.
    #[must_use]
    pub const fn list(&self) -> Option<&ListView> {
        match self {
            Self::Repositories(list) | Self::Tags { tags: list, .. } => Some(list),
            Self::Digest { .. } => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut ListView> {
        match self {
            Self::Repositories(list) | Self::Tags { tags: list, .. } => Some(list),
            Self::Digest { .. } => None,
        }
    }
}

/// Whether the control loop keeps going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw and read the next key.
    Continue,
    /// Leave the program.
    Quit,
}

/// Registry browser state machine.
///
/// The root view is always the repository list; `stack` holds the views
/// drilled into from it.
#[derive(Debug)]
pub struct Navigator<R> {
    registry: R,
    root: View,
    stack: Vec<View>,
    error: Option<String>,
}

impl<R: Registry> Navigator<R> {
    /// Fetches the catalog and opens the repository list.
    ///
    /// # Errors
    ///
    /// Returns the registry error if the catalog cannot be fetched. There is
    /// no level above the repository list to fall back to.
    pub fn start(registry: R) -> Result<Self, RegistryError> {
        let repositories = registry.list_repositories()?;
        tracing::debug!(count = repositories.len(), "Loaded catalog");
        Ok(Self::with_repositories(registry, repositories))
    }

    /// Opens the repository list with an already fetched catalog.
    #[must_use]
    pub fn with_repositories(registry: R, repositories: Vec<String>) -> Self {
        Self {
            registry,
            root: View::Repositories(ListView::new(repositories)),
            stack: Vec::new(),
            error: None,
        }
    }

    /// Returns the registry the navigator queries.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Returns the view currently on screen.
    #[must_use]
    pub fn view(&self) -> &View {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Returns the level currently on screen.
    #[must_use]
    pub fn level(&self) -> Level {
        self.view().level()
    }

    /// Returns the error waiting to be acknowledged, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Applies one key to the state machine.
    ///
    /// A pending error swallows the next key as its acknowledgement. On the
    /// digest view any key goes back. Select blocks on the registry.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        if key == Key::Interrupt {
            return Flow::Quit;
        }

        if self.error.take().is_some() {
            return Flow::Continue;
        }

        if self.level() == Level::DigestView {
            self.stack.pop();
            return Flow::Continue;
        }

        match key {
            Key::Down => {
                if let Some(list) = self.view_mut().list_mut() {
                    list.move_down();
                }
            }
            Key::Up => {
                if let Some(list) = self.view_mut().list_mut() {
                    list.move_up();
                }
            }
            Key::Select => self.select(),
            Key::Back => {
                if self.stack.pop().is_none() {
                    return Flow::Quit;
                }
            }
            Key::Interrupt | Key::Other => {}
        }

        Flow::Continue
    }

    fn view_mut(&mut self) -> &mut View {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Fetches the child of the selected item and pushes it.
    fn select(&mut self) {
        let next = match self.view() {
            View::Repositories(repositories) => {
                let Some(repository) = repositories.selected() else {
                    return;
                };
                self.registry
                    .list_tags(repository)
                    .map(|tags| View::Tags {
                        repository: repository.to_string(),
                        tags: ListView::new(tags),
                    })
            }
            View::Tags { repository, tags } => {
                let Some(tag) = tags.selected() else {
                    return;
                };
                self.registry
                    .get_digest(repository, tag)
                    .map(|digest| View::Digest {
                        repository: repository.clone(),
                        tag: tag.to_string(),
                        digest,
                    })
            }
            View::Digest { .. } => return,
        };

        match next {
            Ok(view) => self.stack.push(view),
            Err(e) => {
                tracing::warn!(error = %e, level = ?self.level(), "Registry request failed");
                self.error = Some(e.to_string());
            }
        }
    }
}
