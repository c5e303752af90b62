//! Localized user-facing strings for the subjects page.
//!
//! Loaded from `seed_data/messages.yml`, embedded at compile time with the
//! same `include_str!` pattern as the other seed files.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Error types for message table operations.
#[derive(Error, Debug)]
pub enum MessagesError {
    #[error("Failed to parse messages YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Duplicate locale in messages file: {0}")]
    DuplicateLocale(Locale),
    #[error("Page indicator for locale {0} must contain {{current}} and {{total}}")]
    BadIndicator(Locale),
    #[error("No messages for locale {0}")]
    MissingLocale(Locale),
}

/// Supported display languages.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Es => "es",
        })
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            other => Err(format!("unknown locale '{}'. Valid locales: en, es", other)),
        }
    }
}

/// Top-level structure for the messages YAML file.
#[derive(Deserialize, Debug)]
pub struct MessagesFile {
    pub locales: Vec<LocaleEntry>,
}

/// One locale's entry in the messages file.
#[derive(Deserialize, Debug)]
pub struct LocaleEntry {
    pub locale: Locale,
    #[serde(flatten)]
    pub messages: Messages,
}

/// Every string the page shows to the user.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Template with `{current}` and `{total}` placeholders.
    pub page_indicator: String,
    pub error_title: String,
    pub delete_confirm: String,
    /// Shown when a failed delete carries no message of its own.
    pub delete_error_default: String,
    pub edit_label: String,
    pub delete_label: String,
    pub acknowledge_label: String,
}

impl Messages {
    pub fn page_indicator(&self, current: u32, total: u32) -> String {
        self.page_indicator
            .replace("{current}", &current.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Parse the per-locale message tables from YAML content.
pub fn parse_messages(yaml_content: &str) -> Result<HashMap<Locale, Messages>, MessagesError> {
    let file: MessagesFile = serde_yml::from_str(yaml_content)?;

    let mut map = HashMap::new();
    for entry in file.locales {
        let template = &entry.messages.page_indicator;
        if !template.contains("{current}") || !template.contains("{total}") {
            return Err(MessagesError::BadIndicator(entry.locale));
        }
        if map.contains_key(&entry.locale) {
            return Err(MessagesError::DuplicateLocale(entry.locale));
        }
        map.insert(entry.locale, entry.messages);
    }

    Ok(map)
}

/// Load the messages for `locale` from the embedded YAML file.
pub fn load_messages(locale: Locale) -> Result<Messages, MessagesError> {
    let yaml_content = include_str!("../../seed_data/messages.yml");
    parse_messages(yaml_content)?
        .remove(&locale)
        .ok_or(MessagesError::MissingLocale(locale))
}
