use crate::error::ShelfError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Identifier of a paper. The document may carry it as a string or a number;
/// both end up as text so ids compare the same way regardless of source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct PaperId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<RawId> for PaperId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => PaperId(s),
            RawId::Signed(n) => PaperId(n.to_string()),
            RawId::Unsigned(n) => PaperId(n.to_string()),
            // 1.0 and 1 name the same paper
            RawId::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                PaperId((n as i64).to_string())
            }
            RawId::Float(n) => PaperId(n.to_string()),
        }
    }
}

impl PaperId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authors arrive either as a list or as one preformatted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    List(Vec<String>),
    Single(String),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::List(Vec::new())
    }
}

impl Authors {
    /// Text shown on cards: list entries joined with ", ".
    pub fn display_text(&self) -> String {
        match self {
            Authors::List(names) => names.join(", "),
            Authors::Single(s) => s.clone(),
        }
    }

    /// Text fed to search: list entries joined with a single space.
    pub fn search_text(&self) -> String {
        match self {
            Authors::List(names) => names.join(" "),
            Authors::Single(s) => s.clone(),
        }
    }

    /// Individual names. A single author string counts as one name.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Authors::List(names) => names.iter().map(String::as_str).collect(),
            Authors::Single(s) => vec![s.as_str()],
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.names().into_iter().map(str::trim).find(|n| !n.is_empty())
    }
}

/// A modification date as written in the document, plus its parsed value when
/// the text is one of the accepted formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperDate {
    raw: String,
    parsed: Option<NaiveDateTime>,
}

impl PaperDate {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let parsed = DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            });
        Self {
            raw: raw.to_string(),
            parsed,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Option<NaiveDateTime> {
        self.parsed
    }

    /// Formats with the given strftime pattern, falling back to the raw text when
    /// the date did not parse or the pattern cannot format a naive date.
    pub fn format(&self, pattern: &str) -> String {
        self.parsed
            .and_then(|dt| format_naive(dt, pattern))
            .unwrap_or_else(|| self.raw.clone())
    }
}

/// Formats a naive datetime, or `None` when the pattern is malformed or needs
/// information a naive value lacks (such as `%z`).
pub fn format_naive(dt: NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

impl Serialize for PaperDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PaperDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(PaperDate::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: PaperId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Authors,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub date_modified: PaperDate,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub field: Option<String>,
}

impl Paper {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: PaperId::new(id),
            title: title.into(),
            authors: Authors::default(),
            r#abstract: String::new(),
            date_modified: PaperDate::default(),
            pdf_url: String::new(),
            keywords: Vec::new(),
            field: None,
        }
    }

    pub fn with_authors(mut self, authors: Authors) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.r#abstract = text.into();
        self
    }

    pub fn with_date(mut self, raw: &str) -> Self {
        self.date_modified = PaperDate::parse(raw);
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_pdf_url(mut self, url: impl Into<String>) -> Self {
        self.pdf_url = url.into();
        self
    }

    /// Lowercased title, authors, abstract and keywords, joined with spaces.
    pub fn searchable_text(&self) -> String {
        let mut parts = vec![
            self.title.clone(),
            self.authors.search_text(),
            self.r#abstract.clone(),
        ];
        parts.extend(self.keywords.iter().cloned());
        parts.join(" ").to_lowercase()
    }
}

/// Top-level shape of the papers document.
#[derive(Debug, Default, Deserialize)]
pub struct PaperDocument {
    #[serde(default)]
    pub papers: Option<Vec<Paper>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    AuthorAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::AuthorAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::AuthorAsc => "author-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest first",
            SortKey::DateAsc => "Oldest first",
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::AuthorAsc => "Author (A-Z)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| ShelfError::InvalidSortKey(s.to_string()))
    }
}

/// Which paper attribute the stats reporter treats as the "field" taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSource {
    #[default]
    Keywords,
    Field,
    None,
}

impl FieldSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSource::Keywords => "keywords",
            FieldSource::Field => "field",
            FieldSource::None => "none",
        }
    }
}

impl FromStr for FieldSource {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keywords" => Ok(FieldSource::Keywords),
            "field" => Ok(FieldSource::Field),
            "none" => Ok(FieldSource::None),
            other => Err(ShelfError::Config(format!(
                "Unknown field source '{}' (expected keywords, field or none)",
                other
            ))),
        }
    }
}
