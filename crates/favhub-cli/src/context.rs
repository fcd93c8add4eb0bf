use std::path::{Path, PathBuf};

use anyhow::Result;
use once_cell::sync::OnceCell;

use favhub_client::SearchClient;
use favhub_store::FavoriteStore;

use crate::config::Config;

/// Lazily opened resources shared by the subcommand handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    token_override: Option<String>,
    store: OnceCell<FavoriteStore>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, token_override: Option<String>) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            data_dir,
            token_override,
            store: OnceCell::new(),
            config: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> Result<&FavoriteStore> {
        self.store.get_or_try_init(|| {
            let db_path = self.data_dir.join("favhub.db");
            FavoriteStore::open(&db_path).map_err(anyhow::Error::from)
        })
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }

    /// Build a search client honoring --token, then config.toml.
    pub fn search_client(&self) -> Result<SearchClient> {
        let config = self.config()?;

        let mut client = SearchClient::new()
            .map_err(anyhow::Error::from)?
            .per_page(config.per_page);

        let token = self.token_override.as_ref().or(config.token.as_ref());
        if let Some(token) = token {
            client = client.token(token);
        }

        Ok(client)
    }
}
