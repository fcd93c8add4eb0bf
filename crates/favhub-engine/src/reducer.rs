use favhub_types::{SearchPage, Tab, User};

use crate::state::AppState;

// NOTE: Command/Effect Split Rationale
//
// Why a reducer (not reactive streams)?
// - With push-based streams the ordering guarantees live in the stream
//   wiring and are easy to break
// - command -> (state, effects) keeps every transition synchronous and
//   inspectable; the effect runner feeds results back as further commands
// - Sequencing falls out for free: a favorite save completes (or fails)
//   before the favorites re-query command even exists
//
// Why a generation token on fetches?
// - There is no cancellation of in-flight requests; a stale page-1 response
//   for a superseded query must not repopulate the list
// - Every query change bumps the generation; arrivals carrying an older
//   token are dropped

/// Inputs to the reducer: user intents plus effect results fed back by the
/// runtime. Processed strictly in arrival order.
#[derive(Debug, Clone)]
pub enum Command {
    /// Search text changed ("" resets the favorites view to unfiltered)
    QueryChanged(String),

    /// Near-end-of-list prefetch trigger for the next page
    LoadMore,

    /// View mode switched; re-derives rows from cached state only
    TabSelected(Tab),

    /// Favorite toggled on
    SaveFavorite(User),

    /// Favorite toggled off, by id
    DeleteFavorite(u64),

    /// Result of a `FetchPage` effect
    FetchArrived {
        generation: u64,
        page: u32,
        outcome: Result<SearchPage, String>,
    },

    /// Result of a `LoadFavorites` effect
    FavoritesLoaded(Result<Vec<User>, String>),

    /// Result of a `PersistFavorite` effect
    FavoriteSaved(Result<(), String>),

    /// Result of a `RemoveFavorite` effect
    FavoriteDeleted(Result<(), String>),
}

/// Work the runtime must perform on behalf of the reducer. Errors are
/// surfaced as display-ready message strings, never panics.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPage {
        query: String,
        page: u32,
        generation: u64,
    },
    LoadFavorites,
    PersistFavorite(User),
    RemoveFavorite(u64),
    SurfaceError(String),
}

/// Apply one command to the state, returning the effects to run next.
pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
    match command {
        Command::QueryChanged(query) => {
            // Any in-flight response belongs to the superseded query now
            state.generation += 1;
            state.query = query;

            if state.query.is_empty() {
                state.fetch_in_flight = false;
                vec![Effect::LoadFavorites]
            } else {
                state.page = 1;
                state.fetch_in_flight = true;
                // Favorites first: the fetch is the only suspending effect
                // and must not hold up reconciliation of local state
                vec![
                    Effect::LoadFavorites,
                    Effect::FetchPage {
                        query: state.query.clone(),
                        page: state.page,
                        generation: state.generation,
                    },
                ]
            }
        }

        Command::LoadMore => {
            if state.tab != Tab::Search || state.query.is_empty() || state.fetch_in_flight {
                return Vec::new();
            }

            state.page += 1;
            state.fetch_in_flight = true;
            vec![Effect::FetchPage {
                query: state.query.clone(),
                page: state.page,
                generation: state.generation,
            }]
        }

        Command::TabSelected(tab) => {
            state.tab = tab;
            Vec::new()
        }

        Command::SaveFavorite(user) => vec![Effect::PersistFavorite(user)],

        Command::DeleteFavorite(id) => vec![Effect::RemoveFavorite(id)],

        Command::FetchArrived {
            generation,
            page,
            outcome,
        } => {
            if generation != state.generation {
                log::debug!(
                    "discarding stale fetch response (generation {} != {})",
                    generation,
                    state.generation
                );
                return Vec::new();
            }

            state.fetch_in_flight = false;
            match outcome {
                Ok(result) => {
                    if page == 1 {
                        state.fetched = result.items;
                    } else {
                        // Later pages append; overlap duplicates are kept
                        state.fetched.extend(result.items);
                    }
                    Vec::new()
                }
                Err(message) => vec![Effect::SurfaceError(message)],
            }
        }

        Command::FavoritesLoaded(outcome) => match outcome {
            Ok(users) => {
                state.favorites_filtered = if state.query.is_empty() {
                    users.clone()
                } else {
                    users
                        .iter()
                        .filter(|user| user.login.contains(&state.query))
                        .cloned()
                        .collect()
                };
                state.favorites_all = users;
                Vec::new()
            }
            Err(message) => vec![Effect::SurfaceError(message)],
        },

        Command::FavoriteSaved(outcome) | Command::FavoriteDeleted(outcome) => match outcome {
            Ok(()) => vec![Effect::LoadFavorites],
            Err(message) => vec![Effect::SurfaceError(message)],
        },
    }
}
