//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, WalkerError};
use crate::models::config::PartialSettings;

/// Commented template written by `--init`
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WalkerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| WalkerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML text; `path` only labels errors
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|source| WalkerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Reject values that are wrong regardless of the other layers
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |what: &str| {
        Err(WalkerError::config_error(format!(
            "{} in config file: {}",
            what,
            path.display()
        )))
    };

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return invalid("Invalid empty scan_path");
        }
    }

    if let Some(dirs) = &settings.excluded_directories {
        if dirs.iter().any(|dir| dir.trim().is_empty()) {
            return invalid("Empty entry in excluded_directories");
        }
    }

    if let Some(extensions) = &settings.file_extensions {
        if extensions
            .iter()
            .any(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return invalid("Empty entry in file_extensions");
        }
    }

    if let Some(ignore_file) = &settings.ignore_file {
        if ignore_file.trim().is_empty() {
            return invalid("Invalid empty ignore_file");
        }
    }

    if settings.max_depth == Some(0) {
        return invalid("Invalid max_depth 0 (must be at least 1)");
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return invalid("Invalid empty output_file");
        }
    }

    Ok(())
}

/// Candidate default config locations, most specific first
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("archwalker").join("config.toml"));
    }
    locations
}

/// Load the first default config file that exists
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            tracing::debug!("using config file {}", location.display());
            return parse_config_file(location).map(Some);
        }
    }
    Ok(None)
}

/// Write the default configuration template, creating parent directories
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(WalkerError::io_error)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| WalkerError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
