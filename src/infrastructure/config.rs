//! Configuration management

use crate::domain::markup::{
    is_valid_date_format, BlockStyle, DEFAULT_DATE_FORMAT, DEFAULT_TODAY_ID,
};
use crate::error::{CalprintError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "calprint.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "CALPRINT_CONFIG";

/// Default id of the element whose content is replaced
pub const DEFAULT_CONTAINER_ID: &str = "node";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Element whose content is replaced by the rendered blocks
    pub container_id: String,
    /// Id carried by the block for the current day
    pub today_id: String,
    /// chrono format string for the date line
    pub date_format: String,
    /// Page title
    pub title: String,
    /// Custom page template
    pub template: Option<PathBuf>,
    /// Reject keys that are neither dates nor weekday names
    pub strict: bool,
    /// Insert entry text as markup instead of escaping it
    pub raw_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            today_id: DEFAULT_TODAY_ID.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            title: "Calendar".to_string(),
            template: None,
            strict: false,
            raw_html: false,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. A relative template path is resolved
    /// against the config file's directory.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CalprintError::Config(format!("Config file not found: {}", path.display()))
            } else {
                CalprintError::Io(e)
            }
        })?;

        let mut config = Self::from_toml(&contents)?;
        if let Some(parent) = path.parent() {
            config.template = config.template.map(|template| {
                if template.is_relative() {
                    parent.join(template)
                } else {
                    template
                }
            });
        }
        Ok(config)
    }

    /// Find the config to use.
    ///
    /// Order: explicit path, then `CALPRINT_CONFIG`, then `calprint.toml` in
    /// `dir`, then built-in defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from_file(Path::new(&path));
        }

        let local = dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        Ok(Config::default())
    }

    /// Check ids and the date format
    pub fn validate(&self) -> Result<()> {
        validate_id("container_id", &self.container_id)?;
        validate_id("today_id", &self.today_id)?;
        if self.container_id == self.today_id {
            return Err(CalprintError::Config(
                "container_id and today_id must differ".to_string(),
            ));
        }

        if !is_valid_date_format(&self.date_format) {
            return Err(CalprintError::Config(format!(
                "Invalid date format: '{}'",
                self.date_format
            )));
        }

        Ok(())
    }

    pub fn block_style(&self) -> BlockStyle {
        BlockStyle {
            date_format: self.date_format.clone(),
            today_id: self.today_id.clone(),
            raw_html: self.raw_html,
        }
    }
}

fn validate_id(name: &str, value: &str) -> Result<()> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(CalprintError::Config(format!(
            "Invalid {}: '{}' (use letters, digits, '-' or '_')",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.container_id, "node");
        assert_eq!(config.today_id, "today");
        assert!(!config.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("title = \"Work\"\nstrict = true\n").unwrap();
        assert_eq!(config.title, "Work");
        assert!(config.strict);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::from_toml("colour = \"red\"\n");
        assert!(matches!(result, Err(CalprintError::TomlDeserialize(_))));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = Config::from_toml("date_format = \"%Q\"\n");
        match result {
            Err(CalprintError::Config(msg)) => assert!(msg.contains("Invalid date format")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_date_format_needing_timezone_rejected() {
        for format in ["%Y-%m-%d %z", "%Z", "%:z"] {
            let toml = format!("date_format = \"{}\"\n", format);
            match Config::from_toml(&toml) {
                Err(CalprintError::Config(msg)) => assert!(msg.contains("Invalid date format")),
                other => panic!("Expected config error for {}, got {:?}", format, other),
            }
        }
    }

    #[test]
    fn test_raw_html_flag() {
        assert!(!Config::default().block_style().raw_html);
        let config = Config::from_toml("raw_html = true\n").unwrap();
        assert!(config.block_style().raw_html);
    }

    #[test]
    fn test_invalid_ids() {
        assert!(Config::from_toml("today_id = \"\"\n").is_err());
        assert!(Config::from_toml("container_id = \"a b\"\n").is_err());
        assert!(Config::from_toml("container_id = 'x\"y'\n").is_err());
        assert!(Config::from_toml("container_id = \"today\"\n").is_err());
    }

    #[test]
    fn test_load_resolves_template_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("calprint.toml");
        fs::write(&path, "template = \"page.html\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.template, Some(temp.path().join("page.html")));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("missing.toml"));
        match result {
            Err(CalprintError::Config(msg)) => assert!(msg.contains("not found")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("other.toml");
        fs::write(&path, "title = \"Explicit\"\n").unwrap();

        let config = Config::discover(Some(&path), temp.path()).unwrap();
        assert_eq!(config.title, "Explicit");
    }
}
