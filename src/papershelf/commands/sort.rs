use crate::model::{Paper, SortKey};
use std::cmp::Ordering;

/// Reorders the papers in place according to `key`.
///
/// The sort is stable, so papers that compare equal keep their current relative
/// order. Title and author comparisons ignore case. Papers without a parseable
/// date, or without any author for [`SortKey::AuthorAsc`], go after the others in
/// both directions.
pub fn run(papers: &mut [Paper], key: SortKey) {
    match key {
        SortKey::DateDesc => papers.sort_by(|a, b| {
            missing_last(a.date_modified.parsed(), b.date_modified.parsed(), |x, y| y.cmp(x))
        }),
        SortKey::DateAsc => papers.sort_by(|a, b| {
            missing_last(a.date_modified.parsed(), b.date_modified.parsed(), |x, y| x.cmp(y))
        }),
        SortKey::TitleAsc => papers.sort_by_cached_key(|p| p.title.to_lowercase()),
        SortKey::TitleDesc => {
            papers.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortKey::AuthorAsc => papers.sort_by(|a, b| {
            missing_last(author_key(a), author_key(b), |x, y| x.cmp(y))
        }),
    }
}

fn author_key(paper: &Paper) -> Option<String> {
    paper.authors.first().map(str::to_lowercase)
}

fn missing_last<T>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
