//! Runtime configuration: backend URL, page sizes and display locale.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `SUBJECTS_*` environment variables. Command-line flags are applied on top
//! by the binary, which validates the final result once.

use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::SubjectsError;
use crate::messages::Locale;

pub const DEFAULT_API_URL: &str = "http://localhost/backend/server.php";
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Settings for one subjects page.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectsConfig {
    /// Backend entry point; `?module=subjects` is appended per request.
    pub api_url: String,
    /// Page size used at start-up and when a selected size is invalid.
    pub default_page_size: u32,
    /// Choices offered by the page-size selector. Other sizes select the default.
    pub page_size_options: Vec<u32>,
    pub locale: Locale,
}

impl Default for SubjectsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 20, 50],
            locale: Locale::En,
        }
    }
}

impl SubjectsConfig {
    /// Defaults, overlaid with `path` (if given) and the process environment.
    ///
    /// The result is not validated, so later layers can still replace bad
    /// values; call [`SubjectsConfig::validate`] once all layers are applied.
    pub fn load(path: Option<&Path>) -> Result<Self, SubjectsError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`SubjectsConfig::load`] with an explicit environment lookup.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self, SubjectsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    SubjectsError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.with_env(lookup)
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SubjectsError> {
        toml::from_str(content).map_err(|e| SubjectsError::Config(e.to_string()))
    }

    /// Applies `SUBJECTS_API_URL`, `SUBJECTS_PAGE_SIZE` and `SUBJECTS_LOCALE`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, SubjectsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SUBJECTS_API_URL") {
            self.api_url = url;
        }
        if let Some(size) = lookup("SUBJECTS_PAGE_SIZE") {
            self.default_page_size = size.trim().parse().map_err(|_| {
                SubjectsError::Config(format!("SUBJECTS_PAGE_SIZE is not a number: '{}'", size))
            })?;
        }
        if let Some(locale) = lookup("SUBJECTS_LOCALE") {
            self.locale = locale.parse().map_err(SubjectsError::Config)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SubjectsError> {
        Url::parse(&self.api_url).map_err(|e| {
            SubjectsError::Config(format!("invalid api_url '{}': {}", self.api_url, e))
        })?;
        if self.default_page_size == 0 {
            return Err(SubjectsError::Config(
                "default_page_size must be greater than 0".to_string(),
            ));
        }
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(SubjectsError::Config(
                "page_size_options must be a non-empty list of positive sizes".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a page-size selector value; anything not offered selects the default.
    pub fn parse_page_size(&self, input: &str) -> u32 {
        match input.trim().parse::<u32>() {
            Ok(size) if size > 0 && self.page_size_options.contains(&size) => size,
            _ => self.default_page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SubjectsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn toml_overrides_some_keys() {
        let config = SubjectsConfig::from_toml_str(
            r#"
api_url = "https://school.example.org/backend/server.php"
locale = "es"
"#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://school.example.org/backend/server.php");
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn toml_unknown_key_rejected() {
        let result = SubjectsConfig::from_toml_str("colour = \"blue\"");
        assert!(matches!(result, Err(SubjectsError::Config(_))));
    }

    #[test]
    fn env_overrides_toml() {
        let config = SubjectsConfig::default()
            .with_env(env(&[
                ("SUBJECTS_API_URL", "http://10.0.0.2/server.php"),
                ("SUBJECTS_PAGE_SIZE", " 20 "),
                ("SUBJECTS_LOCALE", "ES"),
            ]))
            .unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2/server.php");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.locale, Locale::Es);
    }

    #[test]
    fn env_bad_page_size_rejected() {
        let result = SubjectsConfig::default().with_env(env(&[("SUBJECTS_PAGE_SIZE", "many")]));
        assert!(matches!(result, Err(SubjectsError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let config = SubjectsConfig {
            default_page_size: 0,
            ..SubjectsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_url() {
        let config = SubjectsConfig {
            api_url: "server.php".to_string(),
            ..SubjectsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_options() {
        let config = SubjectsConfig {
            page_size_options: vec![],
            ..SubjectsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_page_size_falls_back_to_default() {
        let config = SubjectsConfig::default();
        assert_eq!(config.parse_page_size("10"), 10);
        assert_eq!(config.parse_page_size(" 50 "), 50);
        assert_eq!(config.parse_page_size("0"), 5);
        assert_eq!(config.parse_page_size("ten"), 5);
        assert_eq!(config.parse_page_size(""), 5);
    }

    #[test]
    fn parse_page_size_rejects_sizes_not_offered() {
        let config = SubjectsConfig::default();
        assert_eq!(config.parse_page_size("7"), 5);
        assert_eq!(config.parse_page_size("100"), 5);

        let config = SubjectsConfig {
            default_page_size: 10,
            page_size_options: vec![10, 25],
            ..SubjectsConfig::default()
        };
        assert_eq!(config.parse_page_size("25"), 25);
        assert_eq!(config.parse_page_size("5"), 10);
    }

    #[test]
    fn load_leaves_bad_env_for_later_layers() {
        let mut config = SubjectsConfig::load_with(
            None,
            env(&[("SUBJECTS_PAGE_SIZE", "0"), ("SUBJECTS_API_URL", "server.php")]),
        )
        .unwrap();
        assert_eq!(config.default_page_size, 0);
        assert!(config.validate().is_err());

        // Command-line flags applied after loading.
        config.default_page_size = 10;
        config.api_url = "http://10.0.0.2/server.php".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_file_parses_and_missing_file_fails() {
        let dir = std::env::temp_dir().join(format!("subjects-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("subjects.toml");
        std::fs::write(&path, "default_page_size = 10\npage_size_options = [10, 25]\n").unwrap();

        let config = SubjectsConfig::from_toml_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![10, 25]);

        let loaded = SubjectsConfig::load_with(Some(&path), env(&[("SUBJECTS_LOCALE", "es")])).unwrap();
        assert_eq!(loaded.page_size_options, vec![10, 25]);
        assert_eq!(loaded.locale, Locale::Es);

        let missing = SubjectsConfig::load(Some(&dir.join("missing.toml")));
        assert!(matches!(missing, Err(SubjectsError::Config(_))));
        std::fs::remove_dir_all(&dir).ok();
    }
}
