use crate::model::{FieldSource, Paper};
use serde::Serialize;
use std::collections::HashSet;

/// Corpus-wide counts shown in the page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub papers: usize,
    pub authors: usize,
    pub fields: usize,
}

/// Counts papers, distinct authors and distinct fields over the full corpus.
///
/// Names and field labels are trimmed and compared exactly; blanks are ignored.
pub fn run(corpus: &[Paper], field_source: FieldSource) -> CorpusStats {
    let authors: HashSet<&str> = corpus
        .iter()
        .flat_map(|paper| paper.authors.names())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let fields: HashSet<&str> = match field_source {
        FieldSource::Keywords => corpus
            .iter()
            .flat_map(|paper| paper.keywords.iter().map(String::as_str))
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .collect(),
        FieldSource::Field => corpus
            .iter()
            .filter_map(|paper| paper.field.as_deref())
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect(),
        FieldSource::None => HashSet::new(),
    };

    CorpusStats {
        papers: corpus.len(),
        authors: authors.len(),
        fields: fields.len(),
    }
}
