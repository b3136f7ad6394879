use crate::commands::count::DEFAULT_ABSTRACT_WORD_LIMIT;
use crate::error::{Result, ShelfError};
use crate::model::{format_naive, FieldSource, SortKey};
use crate::source::fs::DEFAULT_PAPERS_PATH;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `papershelf config`, in display order.
pub const CONFIG_KEYS: [&str; 10] = [
    "title",
    "papers-path",
    "preview-words",
    "debounce-ms",
    "default-sort",
    "default-section",
    "sections",
    "field-source",
    "date-format",
    "abstract-word-limit",
];

/// Configuration for papershelf, stored in .papershelf/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Heading shown at the top of the rendered page
    #[serde(default = "default_title")]
    pub title: String,

    /// Location of the papers document, relative to the project root
    #[serde(default = "default_papers_path")]
    pub papers_path: String,

    /// Number of abstract words shown before the expand control appears
    #[serde(default = "default_preview_words")]
    pub preview_words: usize,

    /// Quiescence window for search input, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default = "default_section")]
    pub default_section: String,

    /// Page sections, in navigation order
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,

    /// Which paper attribute counts as a "field" in the stats
    #[serde(default)]
    pub field_source: FieldSource,

    /// strftime pattern for card dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Word limit for the submission abstract counter
    #[serde(default = "default_abstract_word_limit")]
    pub abstract_word_limit: usize,
}

fn default_title() -> String {
    "Paper Collection".to_string()
}

fn default_papers_path() -> String {
    DEFAULT_PAPERS_PATH.to_string()
}

fn default_preview_words() -> usize {
    50
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_section() -> String {
    "home".to_string()
}

fn default_sections() -> Vec<String> {
    ["home", "papers", "about", "submit"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

fn default_abstract_word_limit() -> usize {
    DEFAULT_ABSTRACT_WORD_LIMIT
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            papers_path: default_papers_path(),
            preview_words: default_preview_words(),
            debounce_ms: default_debounce_ms(),
            default_sort: SortKey::default(),
            default_section: default_section(),
            sections: default_sections(),
            field_source: FieldSource::default(),
            date_format: default_date_format(),
            abstract_word_limit: default_abstract_word_limit(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn exists_in<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).is_file()
    }

    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(ShelfError::Config("sections cannot be empty".into()));
        }
        if !self.sections.contains(&self.default_section) {
            return Err(ShelfError::Config(format!(
                "default-section '{}' is not one of the sections ({})",
                self.default_section,
                self.sections.join(", ")
            )));
        }
        if self.preview_words == 0 {
            return Err(ShelfError::Config("preview-words must be at least 1".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
            || format_naive(NaiveDateTime::default(), &self.date_format).is_none()
        {
            return Err(ShelfError::Config(format!(
                "date-format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "title" => self.title.clone(),
            "papers-path" => self.papers_path.clone(),
            "preview-words" => self.preview_words.to_string(),
            "debounce-ms" => self.debounce_ms.to_string(),
            "default-sort" => self.default_sort.to_string(),
            "default-section" => self.default_section.clone(),
            "sections" => self.sections.join(","),
            "field-source" => self.field_source.as_str().to_string(),
            "date-format" => self.date_format.clone(),
            "abstract-word-limit" => self.abstract_word_limit.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a key from its textual form. The updated config is validated as a whole.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "title" => updated.title = value.to_string(),
            "papers-path" => updated.papers_path = value.to_string(),
            "preview-words" => updated.preview_words = parse_number(key, value)?,
            "debounce-ms" => updated.debounce_ms = parse_number(key, value)?,
            "default-sort" => updated.default_sort = value.parse()?,
            "default-section" => updated.default_section = value.to_string(),
            "sections" => {
                updated.sections = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            }
            "field-source" => updated.field_source = value.parse()?,
            "date-format" => updated.date_format = value.to_string(),
            "abstract-word-limit" => updated.abstract_word_limit = parse_number(key, value)?,
            other => {
                return Err(ShelfError::Config(format!("Unknown config key: {}", other)));
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ShelfError::Config(format!("{} expects a number, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.papers_path, "papers/papers.json");
        assert_eq!(config.preview_words, 50);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.default_sort, SortKey::DateDesc);
        assert_eq!(config.default_section, "home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"preview_words": 20, "default_sort": "title-asc"}"#,
        )
        .unwrap();

        let config = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(config.preview_words, 20);
        assert_eq!(config.default_sort, SortKey::TitleAsc);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".papershelf");

        let mut config = ShelfConfig::default();
        config.set("field-source", "field").unwrap();
        config.save(&dir).unwrap();

        let loaded = ShelfConfig::load(&dir).unwrap();
        assert_eq!(loaded.field_source, FieldSource::Field);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"default_section": "missing"}"#,
        )
        .unwrap();
        assert!(matches!(
            ShelfConfig::load(temp.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_set_validates() {
        let mut config = ShelfConfig::default();
        assert!(config.set("preview-words", "lots").is_err());
        assert!(config.set("preview-words", "0").is_err());
        assert!(config.set("default-sort", "random").is_err());
        assert!(config.set("date-format", "%Q").is_err());
        assert!(config.set("date-format", "%z").is_err());
        assert!(config.set("date-format", "%d %b %Y %Z").is_err());
        assert!(config.set("sections", "papers,about").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ShelfConfig::default());

        config.set("sections", "home, papers").unwrap();
        assert_eq!(config.sections, vec!["home", "papers"]);
        config.set("debounce-ms", "50").unwrap();
        assert_eq!(config.get("debounce-ms").unwrap(), "50");
    }

    #[test]
    fn test_offset_date_format_in_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"date_format": "%Y-%m-%d %:z"}"#,
        )
        .unwrap();
        assert!(matches!(
            ShelfConfig::load(temp.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let config = ShelfConfig::default();
        let listed = config.list_all();
        assert_eq!(listed.len(), CONFIG_KEYS.len());
        assert_eq!(listed[0], ("title", "Paper Collection".to_string()));
    }
}
