//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.concentration/config.toml`. If missing on first run,
//! a commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::card::DEFAULT_PAIRS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConcentrationConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub pairs: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub columns: Option<usize>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub pairs: Option<usize>,
    pub columns: Option<usize>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COLUMNS: usize = 5;
pub const MAX_PAIRS: usize = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pairs: usize,
    pub columns: usize,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// A resolved value is outside what the game can deal or draw.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.concentration/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".concentration").join("config.toml"))
}

/// Load config from `~/.concentration/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ConcentrationConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ConcentrationConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ConcentrationConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ConcentrationConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ConcentrationConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Concentration Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# pairs = 10                 # 1..=50, or CONCENTRATION_PAIRS / --pairs
# seed = 42                  # fixed shuffle, or CONCENTRATION_SEED / --seed

# [display]
# columns = 5                # cards per row, or CONCENTRATION_COLUMNS / --columns
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &ConcentrationConfig,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let pairs = cli
        .pairs
        .or_else(|| env_value("CONCENTRATION_PAIRS"))
        .or(config.game.pairs)
        .unwrap_or(DEFAULT_PAIRS);

    let columns = cli
        .columns
        .or_else(|| env_value("CONCENTRATION_COLUMNS"))
        .or(config.display.columns)
        .unwrap_or(DEFAULT_COLUMNS);

    let seed = cli
        .seed
        .or_else(|| env_value("CONCENTRATION_SEED"))
        .or(config.game.seed);

    if !(1..=MAX_PAIRS).contains(&pairs) {
        return Err(ConfigError::Invalid(format!(
            "pairs must be between 1 and {MAX_PAIRS}, got {pairs}"
        )));
    }
    if columns == 0 {
        return Err(ConfigError::Invalid("columns must be at least 1".into()));
    }

    Ok(ResolvedConfig {
        pairs,
        columns,
        seed,
    })
}

/// Read and parse an env var, ignoring (with a warning) values that don't parse.
fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_empty() {
        let config = ConcentrationConfig::default();
        assert!(config.game.pairs.is_none());
        assert!(config.display.columns.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ConcentrationConfig {
            game: GameConfig {
                pairs: Some(6),
                seed: Some(11),
            },
            display: DisplayConfig { columns: Some(4) },
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        // Env vars may legitimately override these, so only check when unset.
        if std::env::var("CONCENTRATION_PAIRS").is_err() {
            assert_eq!(resolved.pairs, 6);
        }
        if std::env::var("CONCENTRATION_COLUMNS").is_err() {
            assert_eq!(resolved.columns, 4);
        }
        if std::env::var("CONCENTRATION_SEED").is_err() {
            assert_eq!(resolved.seed, Some(11));
        }
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ConcentrationConfig {
            game: GameConfig {
                pairs: Some(6),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            pairs: Some(3),
            columns: Some(2),
            seed: Some(5),
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.pairs, 3);
        assert_eq!(resolved.columns, 2);
        assert_eq!(resolved.seed, Some(5));
    }

    #[test]
    fn test_resolve_rejects_out_of_range_pairs() {
        let cli = CliOverrides {
            pairs: Some(MAX_PAIRS + 1),
            ..Default::default()
        };
        let err = resolve(&ConcentrationConfig::default(), &cli).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("pairs"));

        let cli = CliOverrides {
            pairs: Some(0),
            ..Default::default()
        };
        assert!(resolve(&ConcentrationConfig::default(), &cli).is_err());
    }

    #[test]
    fn test_resolve_rejects_zero_columns() {
        let cli = CliOverrides {
            pairs: Some(2),
            columns: Some(0),
            ..Default::default()
        };
        assert!(resolve(&ConcentrationConfig::default(), &cli).is_err());
    }

    #[test]
    fn test_mismatch_delay_key_is_not_a_setting() {
        // The flip-back window is fixed; a stray key in the file changes nothing.
        let config = parse_config("[game]\nmismatch_delay_ms = 10\n").unwrap();
        let cli = CliOverrides {
            pairs: Some(2),
            columns: Some(2),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.pairs, 2);
        assert_eq!(crate::core::state::MISMATCH_DELAY, Duration::from_secs(1));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[game]
pairs = 8
seed = 1234

[display]
columns = 4
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.game.pairs, Some(8));
        assert_eq!(config.game.seed, Some(1234));
        assert_eq!(config.display.columns, Some(4));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
columns = 3
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.display.columns, Some(3));
        assert!(config.game.pairs.is_none());
        assert!(config.game.seed.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[game]\npairs = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
