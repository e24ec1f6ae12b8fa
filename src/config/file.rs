//! Configuration file and environment sources

use std::env;
use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, WalkerError};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".archwalker.toml";

/// Prefix of the environment variables read by [`EnvConfig`]
pub const ENV_PREFIX: &str = "ARCHWALKER";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// File source for `.archwalker.toml` in the working directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the commented template to this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(WalkerError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source.
///
/// Reads `<PREFIX>_SCAN_PATH`, `<PREFIX>_EXCLUDE_DIRS`, `<PREFIX>_EXTENSIONS`
/// (both comma-separated), `<PREFIX>_MAX_DEPTH` and `<PREFIX>_OUTPUT_FORMAT`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: [&str; 5] = [
    "SCAN_PATH",
    "EXCLUDE_DIRS",
    "EXTENSIONS",
    "MAX_DEPTH",
    "OUTPUT_FORMAT",
];

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            scan_path: self.var("SCAN_PATH").map(PathBuf::from),
            excluded_directories: self.list("EXCLUDE_DIRS"),
            file_extensions: self.list("EXTENSIONS"),
            ..PartialSettings::default()
        };

        if let Some(depth) = self.var("MAX_DEPTH") {
            let parsed = depth
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&depth| depth > 0)
                .ok_or_else(|| {
                    WalkerError::config_error(format!(
                        "{}_MAX_DEPTH must be a positive integer, got '{}'",
                        self.prefix, depth
                    ))
                })?;
            settings.max_depth = Some(parsed);
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            let format = format.parse().map_err(|message: String| {
                WalkerError::config_error(format!("{}_OUTPUT_FORMAT: {}", self.prefix, message))
            })?;
            settings.output_format = Some(format);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
