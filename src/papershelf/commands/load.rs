use crate::error::Result;
use crate::model::{Paper, PaperDocument};
use crate::source::CorpusSource;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Fetches and parses the papers document.
///
/// A document without a `papers` key (or with `"papers": null`) yields an empty
/// corpus. Fetch failures and malformed JSON are returned as errors; the caller
/// decides how to degrade.
pub fn run<S: CorpusSource>(source: &S) -> Result<Vec<Paper>> {
    let raw = source.fetch()?;
    let document: PaperDocument = serde_json::from_str(&raw)?;
    let papers = document.papers.unwrap_or_default();
    debug!(count = papers.len(), source = %source.describe(), "parsed papers document");
    Ok(drop_duplicate_ids(papers))
}

/// Keeps the first paper for each id.
fn drop_duplicate_ids(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen = HashSet::new();
    papers
        .into_iter()
        .filter(|paper| {
            let fresh = seen.insert(paper.id.clone());
            if !fresh {
                warn!(id = %paper.id, title = %paper.title, "dropping paper with duplicate id");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::Authors;
    use crate::source::memory::MemorySource;

    #[test]
    fn test_loads_papers_in_document_order() {
        let source = MemorySource::with_papers_json(
            r#"[
                {"id": "b", "title": "Second", "authors": "Solo Author"},
                {"id": "a", "title": "First", "authors": ["One", "Two"], "keywords": ["x"]}
            ]"#,
        );

        let papers = run(&source).unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].title, "Second");
        assert_eq!(papers[1].authors, Authors::List(vec!["One".into(), "Two".into()]));
    }

    #[test]
    fn test_missing_papers_key_is_empty() {
        let source = MemorySource::new(r#"{"version": 2}"#);
        assert!(run(&source).unwrap().is_empty());
    }

    #[test]
    fn test_null_papers_is_empty() {
        let source = MemorySource::new(r#"{"papers": null}"#);
        assert!(run(&source).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_error() {
        let source = MemorySource::new("{not json");
        assert!(matches!(run(&source), Err(ShelfError::Serialization(_))));

        let source = MemorySource::new(r#"[{"id": "a"}]"#);
        assert!(matches!(run(&source), Err(ShelfError::Serialization(_))));
    }

    #[test]
    fn test_fetch_failure_is_error() {
        let source = MemorySource::failing("offline");
        assert!(matches!(run(&source), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let source = MemorySource::with_papers_json(
            r#"[
                {"id": 1, "title": "Original"},
                {"id": "2", "title": "Other"},
                {"id": "1", "title": "Copy"}
            ]"#,
        );

        let papers = run(&source).unwrap();
        let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Original", "Other"]);
    }
}
