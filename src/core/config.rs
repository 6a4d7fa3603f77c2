//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.hawkadvisor/config.toml`. It is only ever read; a
//! missing file simply means defaults.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::{Route, RouteError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HawkConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding majors.json, careers.json, electives.json, professors.json.
    pub data_dir: Option<String>,
    /// One of error, warn, info, debug, trace.
    pub log_level: Option<String>,
    /// Route path to open on startup, e.g. "majors".
    pub start_route: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub start_route: Option<String>,
}

/// Environment variables consulted by [`resolve`].
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("HAWKADVISOR_DATA_DIR").ok(),
            log_level: std::env::var("HAWKADVISOR_LOG_LEVEL").ok(),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "hawkadvisor.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means use the resources compiled into the binary.
    pub data_dir: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub start_route: Route,
    /// Problems found while resolving. Resolution runs before the logger
    /// exists, so the caller reports these once logging is up.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Route(RouteError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Route(e) => write!(f, "invalid start route: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Route(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.hawkadvisor/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".hawkadvisor").join("config.toml"))
}

/// Load config from `~/.hawkadvisor/config.toml`.
///
/// Returns `HawkConfig::default()` if the file (or the home directory) does
/// not exist. A file that exists but is malformed is a `ConfigError::Parse`.
pub fn load_config() -> Result<HawkConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(HawkConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<HawkConfig, ConfigError> {
    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(HawkConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HawkConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Only the start route can fail to resolve; an unknown log level falls back
/// to the default and is recorded in `warnings`.
pub fn resolve(
    config: &HawkConfig,
    env: &EnvOverrides,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    // Data dir: CLI → env → config → bundled
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| env.data_dir.as_ref().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_ref().map(PathBuf::from));

    // Log level: CLI → env → config → default
    let mut warnings = Vec::new();
    let log_level = match cli
        .log_level
        .as_deref()
        .or(env.log_level.as_deref())
        .or(config.general.log_level.as_deref())
    {
        Some(raw) => parse_level(raw).unwrap_or_else(|| {
            warnings.push(format!(
                "Unknown log level {:?}, using {}",
                raw, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Start route: CLI → config → landing
    let start_route = match cli
        .start_route
        .as_deref()
        .or(config.general.start_route.as_deref())
    {
        Some(path) => Route::from_path(path).map_err(ConfigError::Route)?,
        None => Route::Landing,
    };

    Ok(ResolvedConfig {
        data_dir,
        log_level,
        start_route,
        warnings,
    })
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let resolved = resolve(
            &HawkConfig::default(),
            &EnvOverrides::default(),
            &CliOverrides::default(),
        )
        .unwrap();
        assert_eq!(resolved.data_dir, None);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.start_route, Route::Landing);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: HawkConfig = toml::from_str("[general]\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.general.data_dir, None);

        let empty: HawkConfig = toml::from_str("").unwrap();
        assert!(empty.general.start_route.is_none());
    }

    #[test]
    fn test_override_order() {
        let config: HawkConfig = toml::from_str(
            "[general]\ndata_dir = \"/from/config\"\nlog_level = \"warn\"\nstart_route = \"majors\"\n",
        )
        .unwrap();
        let env = EnvOverrides {
            data_dir: Some("/from/env".to_string()),
            log_level: Some("debug".to_string()),
        };

        let resolved = resolve(&config, &env, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.data_dir, Some(PathBuf::from("/from/env")));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.start_route, Route::Majors);

        let cli = CliOverrides {
            data_dir: Some(PathBuf::from("/from/cli")),
            log_level: Some("trace".to_string()),
            start_route: Some("electives/Nurse".to_string()),
        };
        let resolved = resolve(&config, &env, &cli).unwrap();
        assert_eq!(resolved.data_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.start_route, Route::electives("Nurse"));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&HawkConfig::default(), &EnvOverrides::default(), &cli).unwrap();
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("loud"));
    }

    #[test]
    fn test_known_log_level_has_no_warnings() {
        let env = EnvOverrides {
            log_level: Some(" Warning ".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&HawkConfig::default(), &env, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_bad_start_route_is_error() {
        let cli = CliOverrides {
            start_route: Some("settings".to_string()),
            ..Default::default()
        };
        let err = resolve(&HawkConfig::default(), &EnvOverrides::default(), &cli).unwrap_err();
        assert!(matches!(err, ConfigError::Route(_)));
    }

    #[test]
    fn test_load_config_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nlog_level = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
