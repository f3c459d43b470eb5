//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jokebox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::jokes::DEFAULT_CATEGORY;
use crate::jokes::jokeapi::DEFAULT_JOKEAPI_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JokeboxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub jokeapi: JokeApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JokeApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub category: String,
    pub base_url: String,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jokebox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jokebox").join("config.toml"))
}

/// Load config from `~/.jokebox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JokeboxConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JokeboxConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JokeboxConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as `load_config` but for an explicit path.
pub fn load_config_from(path: &Path) -> Result<JokeboxConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(JokeboxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JokeboxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Jokebox Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "Spooky"        # Or set JOKEBOX_CATEGORY env var

# [jokeapi]
# base_url = "https://v2.jokeapi.dev" # Or set JOKEBOX_BASE_URL env var
"#;

/// Generates a commented-out default config file at the given path.
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &JokeboxConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable env lookup so tests don't touch process env.
fn resolve_with_env(
    config: &JokeboxConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Category: CLI → env → config → default
    let category = cli
        .category
        .clone()
        .or_else(|| env("JOKEBOX_CATEGORY"))
        .or_else(|| config.general.default_category.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("JOKEBOX_BASE_URL"))
        .or_else(|| config.jokeapi.base_url.clone())
        .unwrap_or_else(|| DEFAULT_JOKEAPI_BASE_URL.to_string());

    ResolvedConfig { category, base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&JokeboxConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.category, "Spooky");
        assert_eq!(resolved.base_url, DEFAULT_JOKEAPI_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = JokeboxConfig {
            general: GeneralConfig {
                default_category: Some("Programming".to_string()),
            },
            jokeapi: JokeApiConfig {
                base_url: Some("http://localhost:9000".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.category, "Programming");
        assert_eq!(resolved.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = JokeboxConfig {
            general: GeneralConfig {
                default_category: Some("Programming".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "JOKEBOX_CATEGORY").then(|| "Pun".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.category, "Pun");
        assert_eq!(resolved.base_url, DEFAULT_JOKEAPI_BASE_URL);
    }

    #[test]
    fn test_cli_wins_over_everything() {
        let config = JokeboxConfig {
            general: GeneralConfig {
                default_category: Some("Programming".to_string()),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            category: Some("Dark".to_string()),
            base_url: Some("http://cli.example".to_string()),
        };
        let env = |_: &str| Some("from-env".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.category, "Dark");
        assert_eq!(resolved.base_url, "http://cli.example");
    }

    #[test]
    fn test_unknown_category_is_not_validated() {
        let cli = CliOverrides {
            category: Some("Knock-knock".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&JokeboxConfig::default(), &cli, no_env);
        assert_eq!(resolved.category, "Knock-knock");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
default_category = "Christmas"
"#;
        let config: JokeboxConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_category.as_deref(), Some("Christmas"));
        assert!(config.jokeapi.base_url.is_none());
    }

    #[test]
    fn test_generated_default_is_all_comments() {
        let config: JokeboxConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.default_category.is_none());
        assert!(config.jokeapi.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("jokebox-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ndefault_category = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("jokebox-config-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_category.is_none());
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
