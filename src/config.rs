//! Configuration file for the cringein CLI.
//!
//! The engine itself takes no configuration; these settings govern how the
//! command line feeds it and what it does with the results.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["cringein.yaml", ".cringein.yaml"];

/// Inputs longer than this are truncated unless configured otherwise.
pub const DEFAULT_MAX_CHARS: usize = 3000;

/// The template written by `cringein init`.
pub const TEMPLATE: &str = include_str!("templates/cringein.yaml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Maximum characters analyzed per input.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// Exit non-zero when any score exceeds this.
    #[serde(default)]
    pub threshold: Option<i32>,
    /// Whether analyses are appended to the history store.
    #[serde(default = "default_true")]
    pub record_history: bool,
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: String::new(),
            max_chars: DEFAULT_MAX_CHARS,
            threshold: None,
            record_history: true,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load from an explicit path, else the first default name present in
    /// `dir`, else built-in defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        let config = match explicit {
            Some(path) => Self::parse_file(path)?,
            None => match discover(dir) {
                Some(path) => Self::parse_file(path)?,
                None => Self::default(),
            },
        };
        validate(&config)?;
        Ok(config)
    }

    /// Truncate input to `max_chars` characters. Returns whether it was cut.
    pub fn clip<'a>(&self, text: &'a str) -> (&'a str, bool) {
        match text.char_indices().nth(self.max_chars) {
            Some((idx, _)) => (&text[..idx], true),
            None => (text, false),
        }
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.max_chars == 0 {
        anyhow::bail!("max_chars must be greater than zero");
    }

    if let Some(threshold) = config.threshold {
        if !(0..=100).contains(&threshold) {
            anyhow::bail!("threshold {} out of range, must be 0-100", threshold);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
version: "1.0"
max_chars: 1200
threshold: 40
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_chars, 1200);
        assert_eq!(config.threshold, Some(40));
        assert!(config.record_history);
    }

    #[test]
    fn test_template_parses_and_validates() {
        let config: Config = serde_yaml::from_str(TEMPLATE).unwrap();
        validate(&config).unwrap();
        assert_eq!(config.max_chars, DEFAULT_MAX_CHARS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            max_chars: 0,
            ..Config::default()
        };
        assert!(validate(&config).is_err());

        let config = Config {
            threshold: Some(101),
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_load_discovers_dotfile() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".cringein.yaml"), "threshold: 10\n").unwrap();

        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.threshold, Some(10));
    }

    #[test]
    fn test_load_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(None, temp.path()).unwrap();
        assert_eq!(config.max_chars, DEFAULT_MAX_CHARS);
        assert_eq!(config.threshold, None);
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        assert!(Config::load(Some(&missing), temp.path()).is_err());
    }

    #[test]
    fn test_clip_counts_characters() {
        let config = Config {
            max_chars: 3,
            ..Config::default()
        };
        assert_eq!(config.clip("héllo"), ("hél", true));
        assert_eq!(config.clip("hé"), ("hé", false));
        assert_eq!(config.clip("abc"), ("abc", false));
    }
}
