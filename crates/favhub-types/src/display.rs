use serde::{Deserialize, Serialize};

use crate::user::User;

/// View mode: raw paginated search results or the locally stored favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Search,
    Favorites,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Search
    }
}

/// The minimal renderable unit handed to the presentation layer.
///
/// Rebuilt on every state change, never persisted. `key` gives each row a
/// stable identity so a renderer can diff consecutive row sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    /// Group header on the favorites tab (the uppercased initial)
    Header { label: String },

    /// A user row, annotated with favorite membership
    User { user: User, is_favorite: bool },
}

impl DisplayRow {
    pub fn header(label: impl Into<String>) -> Self {
        DisplayRow::Header {
            label: label.into(),
        }
    }

    pub fn user(user: User, is_favorite: bool) -> Self {
        DisplayRow::User { user, is_favorite }
    }

    /// Stable identity for incremental list diffing: the user id for user
    /// rows, the label for headers.
    pub fn key(&self) -> String {
        match self {
            DisplayRow::Header { label } => format!("header:{}", label),
            DisplayRow::User { user, .. } => format!("user:{}", user.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_are_stable() {
        let header = DisplayRow::header("A");
        let user = DisplayRow::user(User::new(3, "ash", ""), true);

        assert_eq!(header.key(), "header:A");
        assert_eq!(user.key(), "user:3");

        // Favorite annotation does not change identity
        let toggled = DisplayRow::user(User::new(3, "ash", ""), false);
        assert_eq!(user.key(), toggled.key());
    }

    #[test]
    fn test_row_serialization_is_tagged() {
        let row = DisplayRow::user(User::new(1, "alice", ""), true);
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["kind"], "user");
        assert_eq!(json["user"]["login"], "alice");
        assert_eq!(json["is_favorite"], true);
    }
}
