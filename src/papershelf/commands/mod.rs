//! # Commands
//!
//! Pure business logic for each operation. Functions here take plain Rust values
//! (slices of [`Paper`](crate::model::Paper), query strings, sort keys) and return
//! plain Rust values. They never print, never read the clock and never touch
//! application state; [`crate::api::ShelfApi`] owns the state and sequences them.

use crate::config::ShelfConfig;

pub mod config;
pub mod count;
pub mod load;
pub mod search;
pub mod sort;
pub mod stats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
