//! # Papershelf Architecture
//!
//! Papershelf presents a static collection of research papers: it loads one JSON
//! document, lets the reader narrow it with a free-text search, orders it, and renders
//! paper cards with collapsible abstracts next to a few collection-wide counts.
//!
//! It is a library that happens to have a CLI client. The page state machine does not
//! know whether it is driven by a terminal, a browser bridge or a test.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints lists, writes HTML, logging     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns page state: corpus, filtered view, query, sort,     │
//! │    expanded cards, active section, pending search           │
//! │  - Produces a PageView; render.rs turns it into HTML        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, search, sort, stats, count: pure functions         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - CorpusSource trait                                       │
//! │  - FileSource (production), MemorySource (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes ordinary arguments, returns ordinary values and
//! never prints. Time is passed in as `Instant`s, so the search debounce runs the same
//! under a test as under a real event loop. Diagnostics go through `tracing`; the
//! binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller, entry point for every interaction
//! - [`commands`]: Business logic (load, search, sort, stats, word count, config)
//! - [`source`]: Where the papers document comes from
//! - [`model`]: Papers, authors, dates, sort keys
//! - [`view`], [`preview`], [`nav`]: Page projection, abstract previews, sections
//! - [`render`]: HTML templates
//! - [`debounce`]: Clock-injected quiescence timer
//! - [`config`], [`init`]: Configuration and project discovery
//! - [`error`]: Error types
//! - `cli`: Argument parsing, terminal output and the `browse` event loop (binary only)

pub mod api;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod init;
pub mod model;
pub mod nav;
pub mod preview;
pub mod render;
pub mod source;
pub mod view;
