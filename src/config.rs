//! Configuration for recvault paths.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (RECVAULT_HOME)
//! 2. Config file (.recvault/config.yaml)
//! 3. Default (~/.recvault)
//!
//! Config file discovery:
//! - Searches current directory and parents for .recvault/config.yaml
//! - Paths in config file are relative to the config file's directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Vault home directory (relative to config file)
    pub home: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the vault home
    pub home: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".recvault").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".recvault");

    let config_file = find_config_file();

    let home = if let Ok(env_home) = std::env::var("RECVAULT_HOME") {
        PathBuf::from(env_home)
    } else if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;
        let vault_dir = config_path.parent().unwrap_or(Path::new("."));

        match config.paths.home {
            Some(ref home_path) => resolve_path(vault_dir, home_path),
            None => default_home,
        }
    } else {
        default_home
    };

    Ok(ResolvedConfig { home, config_file })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the catalog path ($RECVAULT_HOME/catalog.json)
pub fn catalog_path() -> Result<PathBuf> {
    Ok(config()?.home.join("catalog.json"))
}
