//! # Abstract Preview
//!
//! Cards show the first few words of an abstract and offer the full text behind an
//! expand control only when something was cut.

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AbstractPreview {
    pub text: String,
    pub truncated: bool,
}

/// Keeps the first `max_words` whitespace separated words, joined by single spaces.
pub fn preview_abstract(text: &str, max_words: usize) -> AbstractPreview {
    let words: Vec<&str> = text.split_whitespace().collect();
    let truncated = words.len() > max_words;
    let kept = words.len().min(max_words);

    AbstractPreview {
        text: words[..kept].join(" "),
        truncated,
    }
}

/// Visibility of a card's full abstract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    /// Label of the expand control in this state.
    pub fn control_label(self) -> &'static str {
        match self {
            CardState::Collapsed => "Read full abstract",
            CardState::Expanded => "Show less",
        }
    }
}
