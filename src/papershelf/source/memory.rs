use super::CorpusSource;
use crate::error::{Result, ShelfError};

/// A source backed by a string, or by a failure to report on every fetch.
pub struct MemorySource {
    document: std::result::Result<String, String>,
}

impl MemorySource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: Ok(document.into()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            document: Err(reason.into()),
        }
    }

    /// A document wrapping the given papers JSON array.
    pub fn with_papers_json(papers: &str) -> Self {
        Self::new(format!(r#"{{"papers": {}}}"#, papers))
    }
}

impl CorpusSource for MemorySource {
    fn fetch(&self) -> Result<String> {
        match &self.document {
            Ok(doc) => Ok(doc.clone()),
            Err(reason) => Err(ShelfError::NotFound(reason.clone())),
        }
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---
