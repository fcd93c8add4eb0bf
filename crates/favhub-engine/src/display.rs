use favhub_types::{DisplayRow, Tab};

use crate::reconcile::{group_by_initial, mark_favorites};
use crate::state::AppState;

/// Derive the full row sequence from the current state.
///
/// Pure recomputation, not an incremental diff: the runtime calls this
/// after every command, and identical states always produce identical rows.
pub fn derive_rows(state: &AppState) -> Vec<DisplayRow> {
    match state.tab {
        Tab::Search => mark_favorites(&state.fetched, &state.favorites_all)
            .into_iter()
            .map(|(user, is_favorite)| DisplayRow::user(user, is_favorite))
            .collect(),

        Tab::Favorites => {
            let mut rows = Vec::new();
            for (initial, users) in group_by_initial(&state.favorites_filtered) {
                rows.push(DisplayRow::header(initial));
                rows.extend(
                    users
                        .into_iter()
                        .map(|user| DisplayRow::user(user, true)),
                );
            }
            rows
        }
    }
}
