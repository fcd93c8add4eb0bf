use std::collections::VecDeque;

use favhub_engine::{derive_rows, reduce, AppState, Command, Effect};
use favhub_types::DisplayRow;

use crate::events::AppEvent;
use crate::traits::{FavoriteStorage, UserFetcher};

// NOTE: Effect Loop Rationale
//
// One `handle` call drains commands to quiescence: the incoming command is
// reduced, its effects are executed in order, and every effect result is
// fed back as a further command on the same queue. This is what gives the
// strict sequencing the store requires (a save completes or fails before
// the favorites re-query command is even created) without any locking.
//
// The fetch is awaited inline. Commands are processed in arrival order by
// contract, so a slow fetch delays later commands rather than racing them;
// the generation token makes any response that outlives its query harmless.

/// Single owner of the mutable app state.
pub struct App<F, S> {
    state: AppState,
    fetcher: F,
    store: S,
}

impl<F: UserFetcher, S: FavoriteStorage> App<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            state: AppState::new(),
            fetcher,
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The current display sequence, derived fresh from state.
    pub fn rows(&self) -> Vec<DisplayRow> {
        derive_rows(&self.state)
    }

    /// Handle one command and everything it causes.
    ///
    /// Always ends with a `RowsChanged` event; `Error` events precede it
    /// when a fetch or store operation failed along the way.
    pub async fn handle(&mut self, command: Command) -> Vec<AppEvent> {
        let mut queue = VecDeque::from([command]);
        let mut events = Vec::new();

        while let Some(command) = queue.pop_front() {
            for effect in reduce(&mut self.state, command) {
                match effect {
                    Effect::FetchPage {
                        query,
                        page,
                        generation,
                    } => {
                        let outcome = self.fetcher.search_users(&query, page).await;
                        queue.push_back(Command::FetchArrived {
                            generation,
                            page,
                            outcome,
                        });
                    }

                    Effect::LoadFavorites => {
                        queue.push_back(Command::FavoritesLoaded(self.store.list()));
                    }

                    Effect::PersistFavorite(user) => {
                        let outcome = self.store.save(&user).map(|_| ());
                        queue.push_back(Command::FavoriteSaved(outcome));
                    }

                    Effect::RemoveFavorite(id) => {
                        let outcome = self.store.delete(id).map(|_| ());
                        queue.push_back(Command::FavoriteDeleted(outcome));
                    }

                    Effect::SurfaceError(message) => {
                        events.push(AppEvent::Error(message));
                    }
                }
            }
        }

        events.push(AppEvent::RowsChanged(derive_rows(&self.state)));
        events
    }
}
