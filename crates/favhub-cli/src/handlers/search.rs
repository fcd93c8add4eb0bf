use anyhow::Result;

use favhub_engine::mark_favorites;
use favhub_types::DisplayRow;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

/// One-shot search: fetch a page, annotate it against the stored
/// favorites, print the rows.
pub async fn handle(
    ctx: &ExecutionContext,
    query: &str,
    page: u32,
    format: OutputFormat,
) -> Result<()> {
    if query.is_empty() {
        anyhow::bail!("search query cannot be empty");
    }

    let client = ctx.search_client()?;
    let result = client.search_users(query, page).await?;

    let favorites = ctx.store()?.list()?;

    let rows: Vec<DisplayRow> = mark_favorites(&result.items, &favorites)
        .into_iter()
        .map(|(user, is_favorite)| DisplayRow::user(user, is_favorite))
        .collect();

    output::print_rows(&rows, format)?;

    if format == OutputFormat::Plain {
        println!(
            "page {}: {} of {} matches",
            page,
            result.items.len(),
            result.total_count
        );
    }

    Ok(())
}
