//! Store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::size::SizeSpec;
use crate::ORIGINAL_NAME;

/// Environment variable holding the storage root path.
pub const ROOT_PATH_ENV: &str = "DARKROOM_ROOT_PATH";

/// Configuration for an image store: where objects live and which variants
/// are generated on store.
///
/// The configuration is an explicit value handed to the engine's
/// constructor; the engine holds no process-wide state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root directory all objects are stored under.
    pub root_path: PathBuf,
    /// Ordered list of variants generated for every stored image.
    #[serde(default)]
    pub sizes: Vec<SizeSpec>,
}

impl Config {
    /// Create a configuration with an explicit root path.
    pub fn new(root_path: impl Into<PathBuf>, sizes: Vec<SizeSpec>) -> Self {
        Self {
            root_path: root_path.into(),
            sizes,
        }
    }

    /// Create a configuration with the root path taken from the
    /// `DARKROOM_ROOT_PATH` environment variable.
    pub fn from_env(sizes: Vec<SizeSpec>) -> crate::Result<Self> {
        let root_path = std::env::var_os(ROOT_PATH_ENV).ok_or_else(|| {
            crate::Error::Config(format!("{ROOT_PATH_ENV} is not set"))
        })?;
        Ok(Self {
            root_path: PathBuf::from(root_path),
            sizes,
        })
    }

    /// Validate the configuration.
    ///
    /// Size names must be non-empty, unique, and must not use the reserved
    /// name `"original"`.
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for size in &self.sizes {
            if size.name.is_empty() {
                return Err(crate::Error::InvalidSizeName(
                    "size name cannot be empty".to_string(),
                ));
            }
            if size.name == ORIGINAL_NAME {
                return Err(crate::Error::InvalidSizeName(format!(
                    "size name {ORIGINAL_NAME:?} is reserved"
                )));
            }
            if !seen.insert(size.name.as_str()) {
                return Err(crate::Error::InvalidSizeName(format!(
                    "duplicate size name: {}",
                    size.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_sizes(sizes: Vec<SizeSpec>) -> Config {
        Config::new("/tmp/darkroom", sizes)
    }

    #[test]
    fn test_validate_ok() {
        let config = config_with_sizes(vec![
            SizeSpec::new("small", 30, 30),
            SizeSpec::new("large", 300, 300),
        ]);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_sizes_ok() {
        config_with_sizes(vec![]).validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_duplicate_name() {
        let config = config_with_sizes(vec![
            SizeSpec::new("small", 30, 30),
            SizeSpec::new("small", 60, 60),
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_reserved_name() {
        let config = config_with_sizes(vec![SizeSpec::new("original", 30, 30)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = config_with_sizes(vec![SizeSpec::new("", 30, 30)]);
        assert!(config.validate().is_err());
    }
}
