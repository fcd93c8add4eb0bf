use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "favhub")]
#[command(about = "Search GitHub users and keep a locally persisted favorites list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (FAVHUB_PATH and the XDG data dir are consulted when
    /// omitted)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// GitHub API token; falls back to config.toml, then GITHUB_TOKEN
    #[arg(long, env = "GITHUB_TOKEN", global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search GitHub users, annotated with local favorite marks
    Search {
        /// Search text (GitHub user search syntax)
        query: String,

        /// 1-based result page
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Operate on the locally persisted favorites
    Fav {
        #[command(subcommand)]
        command: FavCommand,
    },

    /// Interactive session: type a query, switch tabs, toggle favorites
    Session,
}

#[derive(Subcommand)]
pub enum FavCommand {
    /// List favorites grouped by initial
    List {
        /// Only favorites whose login contains this text (case-sensitive)
        #[arg(long)]
        query: Option<String>,
    },

    /// Save a favorite
    Add {
        id: u64,
        login: String,
        #[arg(long, default_value = "")]
        avatar_url: String,
    },

    /// Remove a favorite by id
    Remove { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
