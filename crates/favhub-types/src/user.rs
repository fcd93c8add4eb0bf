use serde::{Deserialize, Serialize};

// NOTE: Identity Semantics
//
// Why id-only equality (not derived structural equality)?
// - GitHub user ids are unique and stable; logins can be renamed
// - Favorite membership is a set lookup keyed by id, so equality and hash
//   must agree on id alone
// - A stored favorite with a stale avatar URL still matches the freshly
//   fetched copy of the same account

/// A GitHub user as carried through the whole stack.
///
/// Created from a remote decode or from the persisted store; never mutated
/// in place, only replaced.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable numeric account id
    pub id: u64,

    /// Account login (renameable, display/grouping key)
    pub login: String,

    /// Avatar image URL (GitHub wire name)
    pub avatar_url: String,
}

impl User {
    pub fn new(id: u64, login: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_by_id_only() {
        let a = User::new(1, "alice", "https://example.com/a.png");
        let b = User::new(1, "renamed-alice", "");
        let c = User::new(2, "alice", "https://example.com/a.png");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_membership_tracks_id() {
        let favorites: HashSet<User> = [User::new(7, "old-login", "")].into_iter().collect();

        assert!(favorites.contains(&User::new(7, "new-login", "x")));
        assert!(!favorites.contains(&User::new(8, "old-login", "")));
    }

    #[test]
    fn test_wire_deserialization() {
        let json = r#"{"id": 42, "login": "octocat", "avatar_url": "https://example.com/42.png"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.login, "octocat");
        assert_eq!(user.avatar_url, "https://example.com/42.png");
    }
}
