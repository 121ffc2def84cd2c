use crate::vault::store::SerialMode;
use crate::vault::view::DEFAULT_MASK_LIMIT;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown serial mode \"{0}\" (expected \"monotonic\" or \"length\")")]
    UnknownSerialMode(String),
    #[error("mask limit must be a positive integer, got \"{0}\"")]
    InvalidMaskLimit(String),
}

/// On-disk `config.toml`. Every key is optional.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub seed_path: Option<String>,
    pub serial_mode: Option<SerialMode>,
    pub mask_limit: Option<usize>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub seed_path: PathBuf,
    pub serial_mode: SerialMode,
    pub mask_limit: usize,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_path: default_seed_path(),
            serial_mode: SerialMode::default(),
            mask_limit: DEFAULT_MASK_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Resolve settings with precedence: CLI > env > config file > default.
    /// CLI-only overrides (serial mode, mask limit) are applied by the caller.
    pub fn create(seed_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file_cfg = load_file_config();

        let seed_path = seed_path
            .or_else(|| env::var("LOCALPASS_SEED_PATH").ok().map(PathBuf::from))
            .or_else(|| file_cfg.seed_path.as_ref().map(PathBuf::from))
            .unwrap_or_else(default_seed_path);

        let serial_mode = match env::var("LOCALPASS_SERIAL_MODE") {
            Ok(s) => s
                .parse::<SerialMode>()
                .map_err(ConfigError::UnknownSerialMode)?,
            Err(_) => file_cfg.serial_mode.unwrap_or_default(),
        };

        let mask_limit = match env::var("LOCALPASS_MASK_LIMIT") {
            Ok(s) => parse_mask_limit(&s)?,
            Err(_) => match file_cfg.mask_limit {
                Some(0) => return Err(ConfigError::InvalidMaskLimit("0".to_string())),
                Some(n) => n,
                None => DEFAULT_MASK_LIMIT,
            },
        };

        let log_level = env::var("LOCALPASS_LOG")
            .ok()
            .or(file_cfg.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_file = env::var("LOCALPASS_LOG_FILE")
            .ok()
            .or(file_cfg.log_file)
            .map(PathBuf::from);

        Ok(Config {
            seed_path,
            serial_mode,
            mask_limit,
            log_level,
            log_file,
        })
    }
}

pub fn parse_mask_limit(s: &str) -> Result<usize, ConfigError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaskLimit(s.to_string())),
    }
}

fn load_file_config() -> FileConfig {
    let (_, cfg) = load_file_config_with_path();
    cfg
}

pub fn load_file_config_with_path() -> (PathBuf, FileConfig) {
    // LOCALPASS_CONFIG_DIR keeps tests away from the real config dir
    let cfg_dir = if let Ok(p) = env::var("LOCALPASS_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    let path = cfg_dir.join("localpass").join("config.toml");
    let cfg = match std::fs::read_to_string(&path) {
        Ok(s) => toml::from_str::<FileConfig>(&s).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            FileConfig::default()
        }),
        Err(_) => FileConfig::default(),
    };
    (path, cfg)
}

fn default_seed_path() -> PathBuf {
    if let Ok(base) = env::var("LOCALPASS_DATA_DIR") {
        return PathBuf::from(base).join("localpass").join("data.json");
    }
    if let Some(mut p) = dirs::data_dir() {
        p.push("localpass");
        p.push("data.json");
        return p;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&home).join(".localpass").join("data.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_limit_rejects_zero_and_garbage() {
        assert_eq!(parse_mask_limit("8").unwrap(), 8);
        assert!(parse_mask_limit("0").is_err());
        assert!(parse_mask_limit("-3").is_err());
        assert!(parse_mask_limit("twelve").is_err());
    }

    #[test]
    fn file_config_parses_serial_mode() {
        let cfg: FileConfig = toml::from_str("serial_mode = \"length\"\nmask_limit = 6\n").unwrap();
        assert_eq!(cfg.serial_mode, Some(SerialMode::Length));
        assert_eq!(cfg.mask_limit, Some(6));
    }
}
