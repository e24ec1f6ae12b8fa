//! Validation of merged settings

use std::path::Path;

use crate::error::{Result, WalkerError};
use crate::models::config::Settings;

/// Checks the fully merged [`Settings`] before a scan starts.
///
/// The scan root itself is not checked here; the scanner reports a missing
/// root as [`WalkerError::RootNotFound`].
pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.max_depth == Some(0) {
            return Err(WalkerError::config_error("Max depth must be at least 1"));
        }

        for dir in &settings.excluded_directories {
            let name = dir.trim();
            if name.is_empty() {
                return Err(WalkerError::config_error(
                    "Excluded directory names must not be empty",
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(WalkerError::config_error(format!(
                    "Excluded directory '{}' must be a single directory name, not a path",
                    name
                )));
            }
        }

        for ext in &settings.file_extensions {
            if ext.trim().trim_start_matches('.').is_empty() {
                return Err(WalkerError::config_error(format!(
                    "Invalid file extension '{}'",
                    ext
                )));
            }
        }

        if settings.use_ignore_file && settings.ignore_file.trim().is_empty() {
            return Err(WalkerError::config_error("Ignore file name must not be empty"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(WalkerError::config_error(format!(
                    "Output directory '{}' does not exist",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SettingsValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_depth() {
        let settings = Settings {
            max_depth: Some(0),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&settings).is_err());
    }

    #[test]
    fn test_rejects_path_like_directory_names() {
        let settings = Settings {
            excluded_directories: vec!["src/generated".to_string()],
            ..Settings::default()
        };
        let err = SettingsValidator::validate(&settings).unwrap_err();
        assert!(err.to_string().contains("single directory name"));
        assert!(err.is_critical());
    }

    #[test]
    fn test_rejects_empty_extension() {
        let settings = Settings {
            file_extensions: vec![".".to_string()],
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&settings).is_err());
    }

    #[test]
    fn test_empty_ignore_file_only_matters_when_used() {
        let mut settings = Settings {
            ignore_file: String::new(),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&settings).is_err());
        settings.use_ignore_file = false;
        assert!(SettingsValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_output_directory_must_exist() {
        let dir = tempdir().unwrap();
        let ok = Settings {
            output_file: Some(dir.path().join("report.txt")),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&ok).is_ok());

        let bare = Settings {
            output_file: Some(PathBuf::from("report.txt")),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&bare).is_ok());

        let missing = Settings {
            output_file: Some(dir.path().join("nope").join("report.txt")),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&missing).is_err());
    }
}
