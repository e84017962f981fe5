//! Rendering of the current navigator state.

use std::fmt;

use crate::list::ListView;
use crate::navigator::{Level, Navigator, View};
use crate::registry::Registry;

/// Marker drawn before the selected item.
pub const SELECTED_PREFIX: &str = "-> ";

/// Marker drawn after the selected item.
pub const SELECTED_SUFFIX: &str = " <-";

const UNSELECTED_PREFIX: &str = "   ";

/// A full frame of text, one entry per terminal line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<String>,
}

impl Screen {
    /// Returns the lines of the frame.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the lines carrying the selection marker.
    #[must_use]
    pub fn selected_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.starts_with(SELECTED_PREFIX) && line.ends_with(SELECTED_SUFFIX))
            .map(String::as_str)
            .collect()
    }

    /// Returns `true` if any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Draws the current view: header, endpoint, body, optional error, key help.
#[must_use]
pub fn render<R: Registry>(navigator: &Navigator<R>) -> Screen {
    let mut screen = Screen::default();

    match navigator.view() {
        View::Repositories(repositories) => {
            screen.push("Docker Registry Explorer");
            screen.push(navigator.registry().endpoint());
            screen.blank();
            push_list(&mut screen, repositories);
        }
        View::Tags { repository, tags } => {
            screen.push(format!("Tags for {repository}"));
            screen.push(navigator.registry().endpoint());
            screen.blank();
            push_list(&mut screen, tags);
        }
        View::Digest {
            repository,
            tag,
            digest,
        } => {
            screen.push(format!("Digest for {repository}:{tag}"));
            screen.push(navigator.registry().endpoint());
            screen.blank();
            screen.push(format!("{UNSELECTED_PREFIX}{digest}"));
        }
    }

    screen.blank();
    if let Some(error) = navigator.error() {
        screen.push(format!("Error: {error}"));
        screen.blank();
        screen.push("Press any key to continue.");
    } else {
        screen.push(key_help(navigator.level()));
    }

    screen
}

fn push_list(screen: &mut Screen, list: &ListView) {
    if list.is_empty() {
        screen.push(format!("{UNSELECTED_PREFIX}(no items)"));
        return;
    }

    for (i, item) in list.items().iter().enumerate() {
        if i == list.cursor() {
            screen.push(format!("{SELECTED_PREFIX}{item}{SELECTED_SUFFIX}"));
        } else {
            screen.push(format!("{UNSELECTED_PREFIX}{item}"));
        }
    }
}

const fn key_help(level: Level) -> &'static str {
    match level {
        Level::Repositories => "Use arrow keys (j/k) to navigate, (l/enter) to select, (h/q) to quit.",
        Level::Tags => "Use arrow keys (j/k) to navigate, (l/enter) to select, (h/q) to go back.",
        Level::DigestView => "Press any key to go back.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Key;
    use crate::testing::StubRegistry;

    fn navigator() -> Navigator<StubRegistry> {
        let registry = StubRegistry::new(&["alpine", "nginx", "redis"])
            .with_tags("nginx", &["latest", "1.25"])
            .with_tags("redis", &[])
            .with_digest("nginx", "latest", "sha256:deadbeef");
        Navigator::start(registry).unwrap()
    }

    #[test]
    fn test_repository_view_layout() {
        let screen = render(&navigator());
        assert_eq!(
            screen.lines(),
            [
                "Docker Registry Explorer",
                "http://stub.registry:5000",
                "",
                "-> alpine <-",
                "   nginx",
                "   redis",
                "",
                "Use arrow keys (j/k) to navigate, (l/enter) to select, (h/q) to quit.",
            ]
        );
    }

    #[test]
    fn test_marker_tracks_cursor() {
        let mut navigator = navigator();
        for expected in ["nginx", "redis", "alpine", "nginx"] {
            navigator.handle_key(Key::Down);
            let screen = render(&navigator);
            assert_eq!(screen.selected_lines(), [format!("-> {expected} <-")]);
        }
    }

    #[test]
    fn test_tags_view_header_and_help() {
        let mut navigator = navigator();
        navigator.handle_key(Key::Down);
        navigator.handle_key(Key::Select);

        let screen = render(&navigator);
        assert_eq!(screen.lines()[0], "Tags for nginx");
        assert_eq!(screen.selected_lines(), ["-> latest <-"]);
        assert!(screen.contains("(h/q) to go back"));
    }

    #[test]
    fn test_empty_tags_show_no_items() {
        let mut navigator = navigator();
        navigator.handle_key(Key::Up);
        navigator.handle_key(Key::Select);

        let screen = render(&navigator);
        assert_eq!(screen.lines()[0], "Tags for redis");
        assert!(screen.contains("(no items)"));
        assert!(screen.selected_lines().is_empty());
    }

    #[test]
    fn test_digest_view() {
        let mut navigator = navigator();
        navigator.handle_key(Key::Down);
        navigator.handle_key(Key::Select);
        navigator.handle_key(Key::Select);

        let screen = render(&navigator);
        assert_eq!(screen.lines()[0], "Digest for nginx:latest");
        assert!(screen.contains("sha256:deadbeef"));
        assert!(screen.contains("Press any key to go back."));
    }

    #[test]
    fn test_error_annotates_current_view() {
        let mut navigator = navigator();
        navigator.handle_key(Key::Select);

        let screen = render(&navigator);
        assert_eq!(screen.lines()[0], "Docker Registry Explorer");
        assert_eq!(screen.selected_lines(), ["-> alpine <-"]);
        assert!(screen.contains("Error: Not found: alpine"));
        assert!(screen.contains("Press any key to continue."));
        assert!(!screen.contains("(l/enter) to select"));
    }

    #[test]
    fn test_display_joins_lines() {
        let screen = render(&navigator());
        let text = screen.to_string();
        assert!(text.starts_with("Docker Registry Explorer\n"));
        assert_eq!(text.lines().count(), screen.lines().len());
    }
}
