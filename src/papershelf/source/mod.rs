//! # Corpus Sources
//!
//! The [`CorpusSource`] trait is the seam between the application and wherever the
//! papers document lives. It only hands back the raw document text; parsing and
//! normalization happen in [`crate::commands::load`].
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads the document from a fixed path
//!   (`papers/papers.json` under the project root by default)
//! - [`memory::MemorySource`]: an in-memory document or canned failure, for tests
//!
//! A source is asked for its document at most once per [`crate::api::ShelfApi`];
//! there is no retry policy.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait CorpusSource {
    /// Retrieve the raw papers document.
    fn fetch(&self) -> Result<String>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}
