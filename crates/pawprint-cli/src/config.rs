//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pawprint_core::EntryType;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file.
    pub database_path: PathBuf,
    /// Name used in status sentences.
    pub pet_name: String,
    /// Types that get a "Last ..." line in the overview.
    pub tracked_types: Vec<EntryType>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("pet_name", &self.pet_name)
            .field("tracked_types", &self.tracked_types)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("pawprint.db"),
            pet_name: "Winnie".to_string(),
            tracked_types: vec![EntryType::Pee, EntryType::Poop],
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PAWPRINT_*)
        figment = figment.merge(Env::prefixed("PAWPRINT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for pawprint.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pawprint"))
}

/// Returns the platform-specific data directory for pawprint.
///
/// On Linux: `~/.local/share/pawprint`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("pawprint"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_pawprint() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "pawprint");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.database_path, data_dir.join("pawprint.db"));
        assert_eq!(config.pet_name, "Winnie");
        assert_eq!(config.tracked_types, vec![EntryType::Pee, EntryType::Poop]);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "pet_name = \"Biscuit\"\ntracked_types = [\"Feed\", \"Pee\"]\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.pet_name, "Biscuit");
        assert_eq!(config.tracked_types, vec![EntryType::Feed, EntryType::Pee]);
    }

    #[test]
    fn test_config_rejects_unknown_type() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "tracked_types = [\"Walk\"]\n").unwrap();

        let err = Config::load_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("unknown entry type: Walk"));
    }
}
