//! Shell configuration.
//!
//! Centralizes the constants used throughout the shell and the
//! [`ShellConfig`] a session is constructed from. Configurations can be
//! loaded from TOML or JSON files.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::models::FileSeed;

// =============================================================================
// Session Identity
// =============================================================================

/// Default user name shown in the prompt.
pub const DEFAULT_USER: &str = "elitehaxxorprotagonist";

/// Default host name shown in the prompt.
pub const DEFAULT_HOST: &str = "badguyterminal";

/// Banner emitted when a session starts.
pub const DEFAULT_BANNER: &str = "Last login: Tue Jan 12 22:29:30 2079";

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Canonical path (and name) of the filesystem root.
pub const ROOT_PATH: &str = "/";

// =============================================================================
// Command Output
// =============================================================================

/// Number of newlines `clear` emits to push old output off screen.
pub const CLEAR_LINE_COUNT: usize = 57;

/// Names per line in `ls` output.
pub const LS_COLUMNS: usize = 3;

// =============================================================================
// Shell Configuration
// =============================================================================

/// Everything a session needs at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Banner emitted as the first output line (none when `None`)
    pub banner: Option<String>,
    /// Host name shown in the prompt
    pub host: String,
    /// User name shown in the prompt
    pub user: String,
    /// Initial filesystem records, in insertion order
    pub files: Vec<FileSeed>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: Some(DEFAULT_BANNER.to_string()),
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            files: default_files(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        }
    }

    /// Check the seed describes a well-formed filesystem.
    ///
    /// Every non-root seed must live in `/` or in another seeded directory,
    /// and no two seeds may share a path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.trim().is_empty() {
            return Err(ConfigError::Invalid("user must not be empty".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        let mut directories: HashSet<String> = HashSet::from([ROOT_PATH.to_string()]);
        let mut seen: HashSet<String> = HashSet::new();

        for seed in &self.files {
            if seed.parent.is_empty() {
                if seed.name != ROOT_PATH || seed.content.is_some() {
                    return Err(ConfigError::Invalid(format!(
                        "'{}': only the root directory may have an empty parent",
                        seed.name
                    )));
                }
                continue;
            }
            if seed.name.is_empty() || seed.name.contains('/') {
                return Err(ConfigError::Invalid(format!(
                    "'{}{}': invalid entry name",
                    seed.parent, seed.name
                )));
            }
            if !directories.contains(&seed.parent) {
                return Err(ConfigError::Invalid(format!(
                    "'{}{}': parent directory '{}' is not seeded",
                    seed.parent, seed.name, seed.parent
                )));
            }

            let full = format!("{}{}/", seed.parent, seed.name);
            if !seen.insert(full.clone()) {
                return Err(ConfigError::Invalid(format!(
                    "'{}{}': duplicate entry",
                    seed.parent, seed.name
                )));
            }
            if seed.content.is_none() {
                directories.insert(full);
            }
        }

        Ok(())
    }
}

/// The stock filesystem: a root with `home`, `usr` and one secret.
pub fn default_files() -> Vec<FileSeed> {
    vec![
        FileSeed::dir("", ROOT_PATH),
        FileSeed::dir("/", "home"),
        FileSeed::dir("/", "usr"),
        FileSeed::file("/usr/", "secretformula.txt", "It's plankton!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.files.len(), 4);
        assert_eq!(config.banner.as_deref(), Some(DEFAULT_BANNER));
    }

    #[test]
    fn test_from_toml() {
        let config = ShellConfig::from_toml_str(
            r#"
            host = "mainframe"
            user = "root"

            [[files]]
            parent = "/"
            name = "etc"

            [[files]]
            parent = "/etc/"
            name = "motd"
            content = "hack the planet"
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "mainframe");
        assert_eq!(config.user, "root");
        // Banner falls back to the default when omitted
        assert_eq!(config.banner.as_deref(), Some(DEFAULT_BANNER));
        assert_eq!(config.files[1].content.as_deref(), Some("hack the planet"));
    }

    #[test]
    fn test_from_json() {
        let config = ShellConfig::from_json_str(
            r#"{
                "banner": null,
                "host": "h",
                "user": "u",
                "files": [{ "parent": "/", "name": "tmp" }]
            }"#,
        )
        .unwrap();

        assert!(config.banner.is_none());
        assert_eq!(config.files, vec![FileSeed::dir("/", "tmp")]);
    }

    #[test]
    fn test_rejects_missing_parent() {
        let result = ShellConfig::from_toml_str(
            r#"
            [[files]]
            parent = "/nowhere/"
            name = "file"
            content = ""
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("not seeded")));
    }

    #[test]
    fn test_rejects_file_as_parent() {
        let mut config = ShellConfig::default();
        config
            .files
            .push(FileSeed::file("/usr/secretformula.txt/", "x", ""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut config = ShellConfig::default();
        config.files.push(FileSeed::dir("/", "home"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_rejects_empty_user() {
        let config = ShellConfig {
            user: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml() {
        let result = ShellConfig::from_toml_str("host = [");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{ "host": "jbox" }}"#).unwrap();
        let config = ShellConfig::load(json.path()).unwrap();
        assert_eq!(config.host, "jbox");
        assert_eq!(config.user, DEFAULT_USER);

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml_file, r#"user = "tuser""#).unwrap();
        let config = ShellConfig::load(toml_file.path()).unwrap();
        assert_eq!(config.user, "tuser");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ShellConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
