use std::future::Future;

use favhub_types::{SearchPage, User};

// NOTE: Why errors cross this seam as strings
//
// The engine converts every failure into a display-ready message at the
// point of the call (there is no retry layer that would want the typed
// error back). Keeping the seam message-level also keeps test fakes down
// to a few lines.

/// The remote side of the app: one page of user search results per call.
pub trait UserFetcher: Send {
    fn search_users(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, String>> + Send;
}

/// The persistence side of the app: CRUD over the favorite set.
///
/// Calls are blocking from the app's perspective; the single-owner command
/// loop means there is never a concurrent writer.
pub trait FavoriteStorage: Send {
    fn list(&self) -> Result<Vec<User>, String>;
    fn save(&self, user: &User) -> Result<bool, String>;
    fn delete(&self, id: u64) -> Result<bool, String>;
}

impl UserFetcher for favhub_client::SearchClient {
    async fn search_users(&self, query: &str, page: u32) -> Result<SearchPage, String> {
        favhub_client::SearchClient::search_users(self, query, page)
            .await
            .map_err(|e| e.to_string())
    }
}

impl FavoriteStorage for favhub_store::FavoriteStore {
    fn list(&self) -> Result<Vec<User>, String> {
        favhub_store::FavoriteStore::list(self).map_err(|e| e.to_string())
    }

    fn save(&self, user: &User) -> Result<bool, String> {
        favhub_store::FavoriteStore::save(self, user).map_err(|e| e.to_string())
    }

    fn delete(&self, id: u64) -> Result<bool, String> {
        favhub_store::FavoriteStore::delete(self, id).map_err(|e| e.to_string())
    }
}
