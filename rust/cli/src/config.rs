//! Layered configuration for the `roshambo` binary.
//!
//! Values resolve in order default → TOML file (`ROSHAMBO_CONFIG`) →
//! environment (`ROSHAMBO_*`); command-line flags of `play` override the
//! result. Every field remembers where its value came from so `roshambo cfg`
//! can show it.

use crate::animation::{DEFAULT_SPINS, MAX_SPINS};
use roshambo_engine::game::{DEFAULT_BEST_OF, validate_best_of};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "ROSHAMBO_CONFIG";
pub const BEST_OF_ENV: &str = "ROSHAMBO_BEST_OF";
pub const SEED_ENV: &str = "ROSHAMBO_SEED";
pub const ANIMATION_ENV: &str = "ROSHAMBO_ANIMATION";
pub const SPINS_ENV: &str = "ROSHAMBO_SPINS";
pub const ASCII_ENV: &str = "ROSHAMBO_ASCII";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub best_of: u32,
    pub seed: Option<u64>,
    pub animation: bool,
    pub spins: u8,
    pub ascii: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub best_of: ValueSource,
    pub seed: ValueSource,
    pub animation: ValueSource,
    pub spins: ValueSource,
    pub ascii: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            best_of: ValueSource::Default,
            seed: ValueSource::Default,
            animation: ValueSource::Default,
            spins: ValueSource::Default,
            ascii: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            best_of: DEFAULT_BEST_OF,
            seed: None,
            animation: true,
            spins: DEFAULT_SPINS,
            ascii: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve the configuration `play` starts from.
///
/// `best_of` is left unchecked: `--best-of` may still replace it, and the
/// match engine validates whichever value wins.
pub fn load() -> Result<Config, ConfigError> {
    resolve().map(|resolved| resolved.config)
}

/// Resolve and fully validate the configuration, keeping each value's source.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let resolved = resolve()?;
    check_best_of(resolved.config.best_of)?;
    Ok(resolved)
}

fn resolve() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.best_of {
            cfg.best_of = v;
            sources.best_of = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.animation {
            cfg.animation = v;
            sources.animation = ValueSource::File;
        }
        if let Some(v) = f.spins {
            cfg.spins = v;
            sources.spins = ValueSource::File;
        }
        if let Some(v) = f.ascii {
            cfg.ascii = v;
            sources.ascii = ValueSource::File;
        }
    }

    if let Ok(best_of) = std::env::var(BEST_OF_ENV)
        && !best_of.is_empty()
    {
        cfg.best_of = best_of
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", BEST_OF_ENV, best_of)))?;
        sources.best_of = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(anim) = std::env::var(ANIMATION_ENV)
        && !anim.is_empty()
    {
        cfg.animation = parse_bool(&anim)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: {}", ANIMATION_ENV, anim)))?;
        sources.animation = ValueSource::Env;
    }
    if let Ok(spins) = std::env::var(SPINS_ENV)
        && !spins.is_empty()
    {
        cfg.spins = spins
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", SPINS_ENV, spins)))?;
        sources.spins = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var(ASCII_ENV)
        && !ascii.is_empty()
    {
        cfg.ascii = parse_bool(&ascii)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: {}", ASCII_ENV, ascii)))?;
        sources.ascii = ValueSource::Env;
    }

    check_spins(cfg.spins)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    best_of: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    animation: Option<bool>,
    #[serde(default)]
    spins: Option<u8>,
    #[serde(default)]
    ascii: Option<bool>,
}

fn check_best_of(best_of: u32) -> Result<(), ConfigError> {
    validate_best_of(i64::from(best_of))
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: best_of: {}", e)))
}

fn check_spins(spins: u8) -> Result<(), ConfigError> {
    if spins > MAX_SPINS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: spins must be <= {}",
            MAX_SPINS
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
