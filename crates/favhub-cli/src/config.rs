use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FAVHUB_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.favhub (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FAVHUB_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("favhub"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".favhub"));
    }

    anyhow::bail!("Could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_per_page() -> u8 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API token (optional; unauthenticated search is rate-limited)
    #[serde(default)]
    pub token: Option<String>,

    /// Search results per page (1..=100)
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            per_page: default_per_page(),
        }
    }
}

impl Config {
    /// Load config.toml from the data dir; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.per_page, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"token = "ghp_abc""#).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.per_page, 30);
    }

    #[test]
    fn test_explicit_path_wins_over_environment() {
        let resolved = resolve_data_dir(Some("/tmp/favhub-test")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/favhub-test"));
    }
}
