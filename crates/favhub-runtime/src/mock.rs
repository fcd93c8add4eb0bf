//! In-memory fakes for the fetcher and store seams, used by the runtime's
//! own tests and by downstream consumers that want a network-free app.

use std::collections::HashMap;
use std::sync::Mutex;

use favhub_types::{SearchPage, User};

use crate::traits::{FavoriteStorage, UserFetcher};

/// Fetcher backed by a (query, page) -> users table. An error string, when
/// set, makes every call fail with that message.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<(String, u32), Vec<User>>,
    error: Option<String>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, query: &str, page: u32, users: Vec<User>) -> Self {
        self.pages.insert((query.to_string(), page), users);
        self
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            pages: HashMap::new(),
            error: Some(message.into()),
        }
    }
}

impl UserFetcher for StubFetcher {
    async fn search_users(&self, query: &str, page: u32) -> Result<SearchPage, String> {
        if let Some(message) = &self.error {
            return Err(message.clone());
        }

        let items = self
            .pages
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_default();

        Ok(SearchPage {
            total_count: items.len() as u64,
            items,
            page,
        })
    }
}

/// Favorite store kept in a plain Vec, preserving insertion order like the
/// SQLite store does. `fail_all` makes every operation report a failure.
#[derive(Default)]
pub struct MemoryStore {
    favorites: Mutex<Vec<User>>,
    fail_all: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites(favorites: Vec<User>) -> Self {
        Self {
            favorites: Mutex::new(favorites),
            fail_all: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            favorites: Mutex::new(Vec::new()),
            fail_all: true,
        }
    }
}

impl FavoriteStorage for MemoryStore {
    fn list(&self) -> Result<Vec<User>, String> {
        if self.fail_all {
            return Err("Failed to read favorites: store offline".to_string());
        }
        Ok(self.favorites.lock().expect("store poisoned").clone())
    }

    fn save(&self, user: &User) -> Result<bool, String> {
        if self.fail_all {
            return Err("Failed to save favorite: store offline".to_string());
        }
        let mut favorites = self.favorites.lock().expect("store poisoned");
        if let Some(existing) = favorites.iter_mut().find(|e| e.id == user.id) {
            *existing = user.clone();
        } else {
            favorites.push(user.clone());
        }
        Ok(true)
    }

    fn delete(&self, id: u64) -> Result<bool, String> {
        if self.fail_all {
            return Err("Failed to delete favorite: store offline".to_string());
        }
        let mut favorites = self.favorites.lock().expect("store poisoned");
        let before = favorites.len();
        favorites.retain(|existing| existing.id != id);
        Ok(favorites.len() < before)
    }
}
