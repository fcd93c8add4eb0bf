use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use favhub_engine::Command;
use favhub_runtime::{AppEvent, AppService};
use favhub_store::FavoriteStore;
use favhub_types::{DisplayRow, Tab, User};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::output;

/// Interactive session driving the full command loop.
///
/// Plain lines are query text; `:`-prefixed lines are controls. Each input
/// produces exactly one rendered row batch (errors are printed as they
/// arrive, before the rows).
pub async fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let client = ctx.search_client()?;
    // The service owns its store connection; the context keeps its own for
    // the one-shot handlers
    let store = FavoriteStore::open(&ctx.data_dir().join("favhub.db"))?;

    let (commands, mut events) = AppService::spawn(client, store);

    println!("favhub session");
    println!("  <text>       search users");
    println!("  :tab api|fav switch view");
    println!("  :more        load next page");
    println!("  :fav <id>    favorite a user from the current view");
    println!("  :unfav <id>  remove a favorite");
    println!("  :quit        exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_rows: Vec<DisplayRow> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(line.trim(), &last_rows) {
            Ok(Some(command)) => command,
            Ok(None) => break,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        if commands.send(command).await.is_err() {
            break;
        }

        while let Some(event) = events.recv().await {
            match event {
                AppEvent::Error(message) => eprintln!("Error: {}", message),
                AppEvent::RowsChanged(rows) => {
                    output::print_rows(&rows, format)?;
                    last_rows = rows;
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Map one input line to a command. `Ok(None)` means quit; favorites can
/// only be toggled on for users present in the current view, since that is
/// where the full user record comes from.
fn parse_line(line: &str, last_rows: &[DisplayRow]) -> Result<Option<Command>, String> {
    if !line.starts_with(':') {
        return Ok(Some(Command::QueryChanged(line.to_string())));
    }

    let mut parts = line.split_whitespace();
    let control = parts.next().unwrap_or_default();

    match control {
        ":quit" | ":q" => Ok(None),

        ":more" => Ok(Some(Command::LoadMore)),

        ":tab" => match parts.next() {
            Some("api") => Ok(Some(Command::TabSelected(Tab::Search))),
            Some("fav") => Ok(Some(Command::TabSelected(Tab::Favorites))),
            _ => Err("usage: :tab api|fav".to_string()),
        },

        ":fav" => {
            let id = parse_id(parts.next())?;
            match find_user(last_rows, id) {
                Some(user) => Ok(Some(Command::SaveFavorite(user))),
                None => Err(format!("no user #{} in the current view", id)),
            }
        }

        ":unfav" => Ok(Some(Command::DeleteFavorite(parse_id(parts.next())?))),

        other => Err(format!("unknown control: {}", other)),
    }
}

fn parse_id(arg: Option<&str>) -> Result<u64, String> {
    arg.ok_or_else(|| "expected a user id".to_string())?
        .parse()
        .map_err(|_| "expected a numeric user id".to_string())
}

fn find_user(rows: &[DisplayRow], id: u64) -> Option<User> {
    rows.iter().find_map(|row| match row {
        DisplayRow::User { user, .. } if user.id == id => Some(user.clone()),
        _ => None,
    })
}
