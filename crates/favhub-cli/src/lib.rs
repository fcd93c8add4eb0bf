// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `fav` groups the three store operations under one noun; `search` and
//   `session` stand alone
// - One-shot subcommands (search, fav *) talk to the client/store/engine
//   directly; only `session` spins up the full command loop

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod output;

pub use args::{Cli, Commands, FavCommand, OutputFormat};
pub use commands::run;
