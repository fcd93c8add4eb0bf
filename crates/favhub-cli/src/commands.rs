use anyhow::Result;

use crate::args::{Cli, Commands, FavCommand};
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_async(cli))
}

async fn run_async(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.token.clone())?;

    match cli.command {
        Commands::Search { query, page } => {
            handlers::search::handle(&ctx, &query, page, cli.format).await
        }

        Commands::Fav { command } => match command {
            FavCommand::List { query } => {
                handlers::fav_list::handle(&ctx, query.as_deref(), cli.format)
            }
            FavCommand::Add {
                id,
                login,
                avatar_url,
            } => handlers::fav_add::handle(&ctx, id, &login, &avatar_url),
            FavCommand::Remove { id } => handlers::fav_remove::handle(&ctx, id),
        },

        Commands::Session => handlers::session::handle(&ctx, cli.format).await,
    }
}
