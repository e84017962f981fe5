//! Ordered list with a wrapping selection cursor.

/// A fetched sequence of names plus the index of the selected one.
///
/// The cursor is always in `[0, len)`, or `0` for an empty list. Moving past
/// either end wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    items: Vec<String>,
    cursor: usize,
}

impl ListView {
    /// Creates a list with the cursor on the first item.
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Returns the items in display order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there is nothing to select.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item under the cursor, or `None` for an empty list.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor to the next item, wrapping to the first.
    pub fn move_down(&mut self) {
        if !self.is_empty() {
            self.cursor = (self.cursor + 1) % self.len();
        }
    }

    /// Moves the cursor to the previous item, wrapping to the last.
    pub fn move_up(&mut self) {
        if !self.is_empty() {
            self.cursor = (self.cursor + self.len() - 1) % self.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> ListView {
        ListView::new(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_new_starts_at_first_item() {
        let view = list(&["alpine", "nginx"]);
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.selected(), Some("alpine"));
    }

    #[test]
    fn test_move_down_wraps_to_first() {
        let mut view = list(&["alpine", "nginx"]);
        view.move_down();
        assert_eq!(view.selected(), Some("nginx"));
        view.move_down();
        assert_eq!(view.selected(), Some("alpine"));
    }

    #[test]
    fn test_move_up_wraps_to_last() {
        let mut view = list(&["alpine", "nginx", "redis"]);
        view.move_up();
        assert_eq!(view.cursor(), 2);
        assert_eq!(view.selected(), Some("redis"));
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut view = list(&["alpine"]);
        view.move_down();
        assert_eq!(view.cursor(), 0);
        view.move_up();
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut view = list(&[]);
        view.move_down();
        view.move_up();
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.selected(), None);
        assert!(view.is_empty());
    }

    /// Strategy for a non-empty list and a starting cursor inside it.
    fn list_and_cursor() -> impl Strategy<Value = (Vec<String>, usize)> {
        prop::collection::vec("[a-z][a-z0-9-]{0,12}", 1..40)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 0..len)
            })
    }

    proptest! {
        #[test]
        fn prop_len_moves_down_return_to_start((items, start) in list_and_cursor()) {
            let mut view = ListView::new(items);
            for _ in 0..start {
                view.move_down();
            }
            prop_assert_eq!(view.cursor(), start);

            for _ in 0..view.len() {
                view.move_down();
            }
            prop_assert_eq!(view.cursor(), start);
        }

        #[test]
        fn prop_len_moves_up_return_to_start((items, start) in list_and_cursor()) {
            let mut view = ListView::new(items);
            for _ in 0..start {
                view.move_down();
            }

            for _ in 0..view.len() {
                view.move_up();
            }
            prop_assert_eq!(view.cursor(), start);
        }

        #[test]
        fn prop_cursor_stays_in_range(
            items in prop::collection::vec("[a-z]{1,8}", 0..10),
            moves in prop::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut view = ListView::new(items);
            for down in moves {
                if down { view.move_down() } else { view.move_up() }
                if view.is_empty() {
                    prop_assert_eq!(view.cursor(), 0);
                } else {
                    prop_assert!(view.cursor() < view.len());
                    prop_assert!(view.selected().is_some());
                }
            }
        }
    }
}
