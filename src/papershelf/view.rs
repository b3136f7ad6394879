//! # View Model
//!
//! Plain serializable snapshots of what the page shows. [`crate::api::ShelfApi::view`]
//! builds a [`PageView`] from the application state; [`crate::render`] turns it into
//! markup. Text here is raw corpus text: escaping is the renderer's job.

use crate::commands::stats::CorpusStats;
use crate::model::{Paper, SortKey};
use crate::nav::SectionView;
use crate::preview::{preview_abstract, CardState};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub title: String,
    pub sections: Vec<SectionView>,
    pub query: String,
    pub sort_options: Vec<SortOption>,
    pub cards: Vec<CardView>,
    pub show_grid: bool,
    pub show_no_results: bool,
    /// Set when the papers document could not be loaded.
    pub empty_state: bool,
    pub stats: CorpusStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SortOption {
    pub fn all(selected: SortKey) -> Vec<SortOption> {
        SortKey::ALL
            .into_iter()
            .map(|key| SortOption {
                value: key.as_str(),
                label: key.label(),
                selected: key == selected,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub date: String,
    pub preview: String,
    pub truncated: bool,
    /// Full abstract, present only when the preview was truncated.
    pub full_abstract: Option<String>,
    pub pdf_url: String,
    pub state: CardState,
    pub expanded: bool,
    pub toggle_label: &'static str,
}

impl CardView {
    pub fn new(paper: &Paper, state: CardState, preview_words: usize, date_format: &str) -> Self {
        let preview = preview_abstract(&paper.r#abstract, preview_words);
        // Only cards with an expand control can be expanded.
        let state = if preview.truncated {
            state
        } else {
            CardState::Collapsed
        };

        Self {
            id: paper.id.to_string(),
            title: paper.title.clone(),
            authors: paper.authors.display_text(),
            date: paper.date_modified.format(date_format),
            full_abstract: preview.truncated.then(|| paper.r#abstract.clone()),
            preview: preview.text,
            truncated: preview.truncated,
            pdf_url: paper.pdf_url.clone(),
            expanded: state == CardState::Expanded,
            toggle_label: state.control_label(),
            state,
        }
    }
}
