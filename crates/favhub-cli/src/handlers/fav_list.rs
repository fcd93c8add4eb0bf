use anyhow::Result;

use favhub_engine::{derive_rows, AppState};
use favhub_types::Tab;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

/// Grouped favorites view, optionally filtered by a login substring
/// (case-sensitive, same containment rule the session applies).
pub fn handle(ctx: &ExecutionContext, query: Option<&str>, format: OutputFormat) -> Result<()> {
    let favorites = ctx.store()?.list()?;

    let filtered = match query {
        Some(q) if !q.is_empty() => favorites
            .into_iter()
            .filter(|user| user.login.contains(q))
            .collect(),
        _ => favorites,
    };

    let state = AppState {
        tab: Tab::Favorites,
        favorites_filtered: filtered,
        ..AppState::default()
    };

    output::print_rows(&derive_rows(&state), format)
}
