//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.docseek/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The document root has no default. It must come from the CLI, the
//! `DOCSEEK_ROOT` env var, or `general.root` in the config file.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DocseekConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
}

/// Color names as understood by ratatui (`"red"`, `"#ff8800"`, `"212"`).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub item_fg: Option<String>,
    pub cursor_fg: Option<String>,
    pub border_fg: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_EXTENSION: &str = "md";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub extension: String,
    pub theme: ThemeConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(
        "no document root given (pass a directory, set DOCSEEK_ROOT, or set general.root in the config file)"
    )]
    MissingRoot,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.docseek/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".docseek").join("config.toml"))
}

/// Load config from `~/.docseek/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DocseekConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DocseekConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(DocseekConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DocseekConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DocseekConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: DocseekConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r##"# docseek configuration
# All settings are optional. Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# root = "/path/to/notes"            # Or pass a directory, or set DOCSEEK_ROOT
# extension = "md"                   # Or --ext, or DOCSEEK_EXTENSION

# [theme]
# Colors accept names ("magenta"), hex ("#5f5fff") or 256-color indices ("63").
# selected_fg = "0"
# selected_bg = "63"
# item_fg = "212"
# cursor_fg = "212"
# border_fg = "darkgray"
"##;

/// Writes the commented-out default config file. Failures are logged, not fatal.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub extension: Option<String>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DocseekConfig, cli: CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &DocseekConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Root: CLI → env → config, no default
    let root = cli
        .root
        .or_else(|| env("DOCSEEK_ROOT").map(PathBuf::from))
        .or_else(|| config.general.root.clone())
        .ok_or(ConfigError::MissingRoot)?;

    // Extension: CLI → env → config → default
    let extension = cli
        .extension
        .or_else(|| env("DOCSEEK_EXTENSION"))
        .or_else(|| config.general.extension.clone())
        .filter(|ext| !ext.trim_start_matches('.').is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    Ok(ResolvedConfig {
        root,
        extension,
        theme: config.theme.clone(),
    })
}
