use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use favhub_types::User;

use crate::error::{Error, Result};

// Schema version (increment when changing table definitions)
const SCHEMA_VERSION: i32 = 1;

// NOTE: Store Design Rationale
//
// Why a full row per favorite (not just ids)?
// - The favorites tab renders without any network access; login and avatar
//   must survive offline
// - A favorite is a snapshot of the user at save time; a later fetch of the
//   same id replaces nothing here
//
// Why insertion-ordered listing?
// - Grouping preserves encounter order within each initial, so the list
//   order is the order favorites were added in
//
// Why is delete-of-absent not an error?
// - Toggling off something already gone is a no-op from the user's view;
//   callers that care get `false` back

/// CRUD over the locally persisted favorite set, keyed by user id.
pub struct FavoriteStore {
    conn: Connection,
}

impl FavoriteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|e| Error::Read(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Read(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS favorites (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    id INTEGER NOT NULL UNIQUE,
                    login TEXT NOT NULL,
                    avatar_url TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_favorites_id ON favorites(id);
                "#,
            )
            .map_err(|e| Error::EntityNotFound(format!("favorites: {}", e)))?;

        self.conn
            .execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])
            .map_err(|e| Error::EntityNotFound(format!("favorites: {}", e)))?;

        Ok(())
    }

    /// The full favorite set, in insertion order.
    pub fn list(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(
                r#"
                SELECT id, login, avatar_url
                FROM favorites
                ORDER BY seq
                "#,
            )
            .map_err(|e| Error::Read(e.to_string()))?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get::<_, i64>(0)? as u64,
                    login: row.get(1)?,
                    avatar_url: row.get(2)?,
                })
            })
            .map_err(|e| Error::Read(e.to_string()))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Read(e.to_string()))?;

        Ok(users)
    }

    /// Persist a favorite. Saving an already-stored id refreshes its login
    /// and avatar but keeps its original position.
    pub fn save(&self, user: &User) -> Result<bool> {
        self.conn
            .execute(
                r#"
                INSERT INTO favorites (id, login, avatar_url, created_at)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(id) DO UPDATE SET
                    login = ?2,
                    avatar_url = ?3
                "#,
                params![
                    user.id as i64,
                    &user.login,
                    &user.avatar_url,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| Error::Save(e.to_string()))?;

        log::debug!("saved favorite {} ({})", user.login, user.id);
        Ok(true)
    }

    /// Remove a favorite by id. Returns false when nothing was stored under
    /// that id.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM favorites WHERE id = ?1", params![id as i64])
            .map_err(|e| Error::Delete(e.to_string()))?;

        Ok(deleted > 0)
    }

    /// Whether an id is currently stored as a favorite.
    pub fn contains(&self, id: u64) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM favorites WHERE id = ?1",
                params![id as i64],
                |row| row.get(0),
            )
            .map_err(|e| Error::Read(e.to_string()))?;

        Ok(count > 0)
    }
}
