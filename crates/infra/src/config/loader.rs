//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Probe for a config file; use built-in defaults when none exists
//! 2. Overlay any `BAITULMAL_*` environment variables that are set
//!
//! Files are JSON or TOML, chosen by extension. Missing sections and keys
//! keep their defaults.
//!
//! ## Environment Variables
//! - `BAITULMAL_API_URL`: backend base URL
//! - `BAITULMAL_API_TIMEOUT_SECS`: request timeout in seconds
//! - `BAITULMAL_STORAGE_PATH`: state file for session and preferences
//!
//! ## File Locations
//! The loader probes, in order, the current directory, its parent and the
//! executable's directory for `baitulmal.{toml,json}` then
//! `config.{toml,json}`.

use std::path::{Path, PathBuf};

use baitulmal_domain::{BaitulMalError, Config, Result};

pub const ENV_API_URL: &str = "BAITULMAL_API_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "BAITULMAL_API_TIMEOUT_SECS";
pub const ENV_STORAGE_PATH: &str = "BAITULMAL_STORAGE_PATH";

const FILE_NAMES: [&str; 4] = ["baitulmal.toml", "baitulmal.json", "config.toml", "config.json"];

/// Load configuration: probed file (or defaults) with environment overrides
///
/// # Errors
/// Returns `BaitulMalError::Config` if a probed file is malformed or an
/// environment variable holds an invalid value
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env(base)
}

/// Defaults overlaid with the environment only
///
/// # Errors
/// Returns `BaitulMalError::Config` if a variable has an invalid value
pub fn load_from_env() -> Result<Config> {
    apply_env(Config::default())
}

/// Overlay the `BAITULMAL_*` variables that are set onto `config`
///
/// # Errors
/// Returns `BaitulMalError::Config` for an empty URL or a timeout that is not
/// a positive number of seconds
pub fn apply_env(mut config: Config) -> Result<Config> {
    if let Some(url) = env_opt(ENV_API_URL) {
        if url.trim().is_empty() {
            return Err(BaitulMalError::Config(format!("{ENV_API_URL} is empty")));
        }
        config.api.base_url = url.trim().trim_end_matches('/').to_string();
    }

    if let Some(raw) = env_opt(ENV_API_TIMEOUT_SECS) {
        config.api.timeout_secs = match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            Ok(_) => {
                return Err(BaitulMalError::Config(format!(
                    "{ENV_API_TIMEOUT_SECS} must be greater than zero"
                )))
            }
            Err(e) => {
                return Err(BaitulMalError::Config(format!("Invalid API timeout: {e}")));
            }
        };
    }

    if let Some(path) = env_opt(ENV_STORAGE_PATH) {
        config.storage.path = PathBuf::from(path);
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `BaitulMalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BaitulMalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BaitulMalError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BaitulMalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BaitulMalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BaitulMalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(BaitulMalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    let found = candidates_in(&dirs).find(|path| path.is_file());
    found
}

fn candidates_in(dirs: &[PathBuf]) -> impl Iterator<Item = PathBuf> + '_ {
    dirs.iter().flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
