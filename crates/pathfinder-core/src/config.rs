//! Configuration for pathfinder
//!
//! Configuration is stored in `pathfinder.toml` under the root directory,
//! with a per-user fallback in the platform config directory.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathfinderError, Result};

pub use types::{PathfinderConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION};

const USER_CONFIG_DIR: &str = "pathfinder";
const USER_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHFINDER_CONFIG_DIR";

impl PathfinderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathfinderConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer pathfinder"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfinderError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load the effective configuration.
    ///
    /// Lookup order: `explicit` file, `<root>/pathfinder.toml`, the user
    /// config file, then built-in defaults. An explicit file must exist.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                crate::bail_usage!("config file not found: {}", path.display());
            }
            return Self::load(path);
        }

        let local = root.join(CONFIG_FILE_NAME);
        if local.exists() {
            tracing::debug!(path = %local.display(), "using root config");
            return Self::load(&local);
        }

        if let Some(user) = user_config_path().filter(|p| p.exists()) {
            tracing::debug!(path = %user.display(), "using user config");
            return Self::load(&user);
        }

        Ok(Self::default())
    }

    /// Resolve a map name to a file path.
    ///
    /// Names that already look like paths (absolute, or containing a
    /// separator) are taken relative to `root`; bare names are looked up
    /// in `data_dir`. A name without an extension gets `map_extension`.
    pub fn resolve_map_path(&self, root: &Path, name: Option<&str>) -> PathBuf {
        let name = name.unwrap_or(&self.default_map);
        let mut candidate = PathBuf::from(name);

        if candidate.extension().is_none() && !self.map_extension.is_empty() {
            candidate.set_extension(&self.map_extension);
        }

        if candidate.is_absolute() {
            candidate
        } else if candidate.components().count() > 1 {
            root.join(candidate)
        } else {
            root.join(&self.data_dir).join(candidate)
        }
    }
}

/// Per-user config file, honoring `PATHFINDER_CONFIG_DIR`
fn user_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(USER_CONFIG_DIR),
    };
    Some(dir.join(USER_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = PathfinderConfig::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.data_dir, "data-files");
        assert_eq!(config.default_map, "usa");
        assert_eq!(config.map_extension, "toml");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = PathfinderConfig {
            data_dir: "maps".to_string(),
            default_map: "europe".to_string(),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = PathfinderConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "default_map = \"small\"\n").unwrap();

        let loaded = PathfinderConfig::load(&path).unwrap();
        assert_eq!(loaded.default_map, "small");
        assert_eq!(loaded.data_dir, "data-files");
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "data_dir = [").unwrap();

        let err = PathfinderConfig::load(&path).unwrap_err();
        assert!(matches!(err, PathfinderError::Toml(_)));
    }

    #[test]
    fn test_discover_prefers_root_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "data_dir = \"here\"\n").unwrap();

        let config = PathfinderConfig::discover(dir.path(), None).unwrap();
        assert_eq!(config.data_dir, "here");
    }

    #[test]
    fn test_discover_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = PathfinderConfig::discover(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, PathfinderError::UsageError(_)));
    }

    #[test]
    fn test_resolve_bare_name_uses_data_dir() {
        let config = PathfinderConfig::default();
        let path = config.resolve_map_path(Path::new("/srv"), Some("usa"));
        assert_eq!(path, PathBuf::from("/srv/data-files/usa.toml"));
    }

    #[test]
    fn test_resolve_default_map() {
        let config = PathfinderConfig::default();
        let path = config.resolve_map_path(Path::new("/srv"), None);
        assert_eq!(path, PathBuf::from("/srv/data-files/usa.toml"));
    }

    #[test]
    fn test_resolve_keeps_existing_extension() {
        let config = PathfinderConfig::default();
        let path = config.resolve_map_path(Path::new("/srv"), Some("small.json"));
        assert_eq!(path, PathBuf::from("/srv/data-files/small.json"));
    }

    #[test]
    fn test_resolve_relative_path_skips_data_dir() {
        let config = PathfinderConfig::default();
        let path = config.resolve_map_path(Path::new("/srv"), Some("maps/world.toml"));
        assert_eq!(path, PathBuf::from("/srv/maps/world.toml"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let config = PathfinderConfig::default();
        let path = config.resolve_map_path(Path::new("/srv"), Some("/tmp/world.json"));
        assert_eq!(path, PathBuf::from("/tmp/world.json"));
    }
}
