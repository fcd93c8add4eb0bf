use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use favhub_types::DisplayRow;

use crate::args::OutputFormat;

/// Print a row sequence in the selected format.
///
/// Plain output colors group headers and favorite marks when stdout is a
/// terminal; JSON output is the serialized row sequence itself, stable
/// identities included.
pub fn print_rows(rows: &[DisplayRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Plain => print_plain(rows),
    }
    Ok(())
}

fn print_plain(rows: &[DisplayRow]) {
    if rows.is_empty() {
        println!("(no entries)");
        return;
    }

    let colored = std::io::stdout().is_terminal();

    for row in rows {
        match row {
            DisplayRow::Header { label } => {
                if colored {
                    println!("{}", label.cyan().bold());
                } else {
                    println!("{}", label);
                }
            }
            DisplayRow::User { user, is_favorite } => {
                let mark = if *is_favorite { "*" } else { " " };
                if colored && *is_favorite {
                    println!("  {} {}  #{}", mark.yellow(), user.login, user.id);
                } else {
                    println!("  {} {}  #{}", mark, user.login, user.id);
                }
            }
        }
    }
}
