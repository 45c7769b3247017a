//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.tickdown/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Only logging is configurable; the countdown itself has no knobs.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TickdownConfig {
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Path of the log file. Logging is disabled when unset.
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    /// None disables file logging entirely.
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.tickdown/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tickdown").join("config.toml"))
}

/// Load config from `~/.tickdown/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TickdownConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TickdownConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TickdownConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(TickdownConfig::default());
    }

    read_config(&path)
}

/// Load and parse a config file at a specific path.
fn read_config(path: &Path) -> Result<TickdownConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TickdownConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# tickdown configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [log]
# level = "info"           # "off", "error", "warn", "info", "debug", "trace"
# file = "tickdown.log"    # Enables file logging. Or set TICKDOWN_LOG_FILE.
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &TickdownConfig) -> ResolvedConfig {
    resolve_from(
        config,
        std::env::var("TICKDOWN_LOG_LEVEL").ok(),
        std::env::var("TICKDOWN_LOG_FILE").ok(),
    )
}

/// Resolution logic with the environment lookups passed in as values.
fn resolve_from(
    config: &TickdownConfig,
    env_level: Option<String>,
    env_file: Option<String>,
) -> ResolvedConfig {
    // Log level: env → config → default
    let level_text = env_level.or_else(|| config.log.level.clone());
    let log_level = match level_text {
        Some(text) => text.parse().unwrap_or_else(|_| {
            warn!(
                "Unrecognized log level {:?}, using {}",
                text, DEFAULT_LOG_LEVEL
            );
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: env → config → none (file logging disabled)
    let log_file = env_file
        .or_else(|| config.log.file.clone())
        .map(PathBuf::from);

    ResolvedConfig {
        log_level,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = TickdownConfig::default();
        assert!(config.log.level.is_none());
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[log]
level = "debug"
"#;
        let config: TickdownConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("debug"));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[log]
level = "trace"
file = "/tmp/tickdown.log"
"#;
        let config: TickdownConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("trace"));
        assert_eq!(config.log.file.as_deref(), Some("/tmp/tickdown.log"));
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TickdownConfig::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert!(resolved.log_file.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TickdownConfig {
            log: LogConfig {
                level: Some("trace".to_string()),
                file: Some("custom.log".to_string()),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.log_file.as_deref(), Some(Path::new("custom.log")));
    }

    #[test]
    fn test_resolve_env_overrides_config_values() {
        let config = TickdownConfig {
            log: LogConfig {
                level: Some("error".to_string()),
                file: Some("from_config.log".to_string()),
            },
        };
        let resolved = resolve_from(
            &config,
            Some("trace".to_string()),
            Some("from_env.log".to_string()),
        );
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(
            resolved.log_file.as_deref(),
            Some(Path::new("from_env.log"))
        );
    }

    #[test]
    fn test_resolve_env_level_applies_without_config() {
        let resolved = resolve_from(
            &TickdownConfig::default(),
            Some("debug".to_string()),
            None,
        );
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(resolved.log_file.is_none());
    }

    #[test]
    fn test_resolve_falls_back_on_unknown_level() {
        let config = TickdownConfig {
            log: LogConfig {
                level: Some("verbose".to_string()),
                file: None,
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[log]\nlevel = \"warn\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.log.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_read_config_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[log\nlevel = ").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_read_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_generated_default_is_fully_commented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".tickdown").join("config.toml");
        generate_default_config(&path);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(
            contents
                .lines()
                .filter(|l| !l.trim().is_empty())
                .all(|l| l.starts_with('#'))
        );
        // The template must parse as an empty config once uncommenting starts
        let config: TickdownConfig = toml::from_str(&contents).unwrap();
        assert!(config.log.level.is_none());
    }
}
