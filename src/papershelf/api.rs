//! # API Facade
//!
//! [`ShelfApi`] is the application controller and the single entry point for every UI
//! client. It owns all page state: the corpus, the filtered view, the active query
//! and sort key, per-card abstract state, navigation and the pending debounced search.
//!
//! ## Commands, Not Callbacks
//!
//! Every user interaction is a method call: [`ShelfApi::on_search_input`],
//! [`ShelfApi::on_sort_change`], [`ShelfApi::reset`], [`ShelfApi::toggle_abstract`],
//! [`ShelfApi::navigate`]. Each one updates state synchronously and runs to
//! completion. Time only enters through the `now` argument of the debounced search
//! input and [`ShelfApi::tick`], so the whole controller is testable without a clock.
//!
//! ## State Rules
//!
//! - The corpus is loaded once by [`ShelfApi::load`] and never changes afterwards.
//! - The filtered view is always recomputed from the full corpus, then sorted, and
//!   replaced wholesale. A sort change keeps the query and rebuilds the same set, so
//!   ties always resolve to corpus order.
//! - Any filter or sort cycle collapses every card.
//! - Stats are computed once, right after load, over the full corpus.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: filtering, sorting, stats live in `commands/*.rs`
//! - **I/O**: no stdout or stderr; load failures are logged through `tracing`
//!   and surfaced as [`LoadState::Failed`]
//! - **Markup**: [`ShelfApi::view`] returns data; [`crate::render`] makes HTML

use crate::commands::count::WordCount;
use crate::commands::stats::CorpusStats;
use crate::commands::{self, CmdResult};
use crate::config::ShelfConfig;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::model::{Paper, PaperId, SortKey};
use crate::nav::Navigation;
use crate::preview::{preview_abstract, CardState};
use crate::render;
use crate::source::CorpusSource;
use crate::view::{CardView, PageView, SortOption};
use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Outcome of the one-time corpus load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loaded,
    /// The document could not be fetched or parsed; the page shows the empty state.
    Failed(String),
}

pub struct ShelfApi<S: CorpusSource> {
    source: S,
    config: ShelfConfig,
    load_state: LoadState,
    corpus: Vec<Paper>,
    filtered: Vec<Paper>,
    query: String,
    sort_key: SortKey,
    stats: CorpusStats,
    expanded: HashSet<PaperId>,
    nav: Navigation,
    search_input: Debouncer<String>,
    revision: u64,
}

impl<S: CorpusSource> ShelfApi<S> {
    pub fn new(source: S, config: ShelfConfig) -> Self {
        let nav = Navigation::new(config.sections.clone(), &config.default_section);
        let search_input = Debouncer::new(Duration::from_millis(config.debounce_ms));
        Self {
            source,
            sort_key: config.default_sort,
            config,
            load_state: LoadState::NotLoaded,
            corpus: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            stats: CorpusStats::default(),
            expanded: HashSet::new(),
            nav,
            search_input,
            revision: 0,
        }
    }

    /// Loads the corpus. Only the first call fetches; later calls return the
    /// recorded outcome. Failures never propagate: they leave an empty corpus and
    /// a [`LoadState::Failed`] page.
    pub fn load(&mut self) -> &LoadState {
        if self.load_state != LoadState::NotLoaded {
            return &self.load_state;
        }

        match commands::load::run(&self.source) {
            Ok(papers) => {
                info!(count = papers.len(), source = %self.source.describe(), "loaded papers");
                self.corpus = papers;
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                error!(source = %self.source.describe(), error = %e, "error loading papers");
                self.corpus = Vec::new();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }

        self.stats = commands::stats::run(&self.corpus, self.config.field_source);
        self.refresh();
        &self.load_state
    }

    /// Records a search keystroke. The filter runs once input has been quiet for
    /// the debounce window; see [`ShelfApi::tick`].
    pub fn on_search_input(&mut self, query: impl Into<String>, now: Instant) {
        self.search_input.schedule(query.into(), now);
    }

    /// Runs a pending search whose debounce window has elapsed. Returns whether the
    /// view changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(query) => {
                self.apply_search(query);
                true
            }
            None => false,
        }
    }

    /// Runs a pending search immediately. Returns whether the view changed.
    pub fn flush_search(&mut self) -> bool {
        match self.search_input.flush() {
            Some(query) => {
                self.apply_search(query);
                true
            }
            None => false,
        }
    }

    /// When the pending search (if any) becomes due.
    pub fn search_due_at(&self) -> Option<Instant> {
        self.search_input.due_at()
    }

    /// Sets the query and re-filters right away, bypassing the debounce.
    pub fn apply_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Re-sorts the current filtered view. The view is rebuilt from the corpus
    /// under the current query first, so ties fall back to corpus order rather
    /// than the previous sort's order.
    pub fn on_sort_change(&mut self, key: SortKey) {
        self.sort_key = key;
        self.refresh();
    }

    /// Clears the query, restores the default sort and drops any pending search.
    pub fn reset(&mut self) {
        self.search_input.cancel();
        self.query.clear();
        self.sort_key = self.config.default_sort;
        self.refresh();
    }

    /// Flips a card between collapsed and expanded. Returns the new state, or
    /// `None` when the paper is not shown or has no expand control.
    pub fn toggle_abstract(&mut self, id: &PaperId) -> Option<CardState> {
        let paper = self.filtered.iter().find(|p| &p.id == id)?;
        if !preview_abstract(&paper.r#abstract, self.config.preview_words).truncated {
            return None;
        }

        let state = self.card_state(id).toggled();
        match state {
            CardState::Expanded => self.expanded.insert(id.clone()),
            CardState::Collapsed => self.expanded.remove(id),
        };
        self.revision += 1;
        Some(state)
    }

    /// Follows a navigation link such as `#about`. Returns false for unknown
    /// sections, in which case no section is shown.
    pub fn navigate(&mut self, href: &str) -> bool {
        let found = self.nav.activate_link(href);
        self.revision += 1;
        found
    }

    pub fn card_state(&self, id: &PaperId) -> CardState {
        if self.expanded.contains(id) {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn corpus(&self) -> &[Paper] {
        &self.corpus
    }

    pub fn filtered(&self) -> &[Paper] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Counter bumped on every change to what the page shows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Counts words of a draft abstract against the configured limit.
    pub fn count_words(&self, text: &str) -> WordCount {
        commands::count::run(text, self.config.abstract_word_limit)
    }

    /// Snapshot of everything the page displays.
    pub fn view(&self) -> PageView {
        let cards: Vec<CardView> = self
            .filtered
            .iter()
            .map(|paper| {
                CardView::new(
                    paper,
                    self.card_state(&paper.id),
                    self.config.preview_words,
                    &self.config.date_format,
                )
            })
            .collect();

        PageView {
            title: self.config.title.clone(),
            sections: self.nav.views(),
            query: self.query.clone(),
            sort_options: SortOption::all(self.sort_key),
            show_grid: !cards.is_empty(),
            show_no_results: cards.is_empty(),
            cards,
            empty_state: matches!(self.load_state, LoadState::Failed(_)),
            stats: self.stats,
        }
    }

    pub fn render_page(&self) -> Result<String> {
        render::render_page(&self.view())
    }

    fn refresh(&mut self) {
        let mut filtered = commands::search::run(&self.corpus, &self.query);
        commands::sort::run(&mut filtered, self.sort_key);
        self.filtered = filtered;
        self.expanded.clear();
        self.revision += 1;
        debug!(
            query = %self.query,
            sort = %self.sort_key,
            shown = self.filtered.len(),
            total = self.corpus.len(),
            "refreshed view"
        );
    }
}

/// Shows or updates the configuration stored in `config_dir`.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
