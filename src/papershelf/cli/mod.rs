//! # CLI Behavior
//!
//! One possible UI client for papershelf. The CLI is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`papershelf`)
//!
//! Running `papershelf` with no arguments defaults to `papershelf list`.
//!
//! ### Rendering the Page (`papershelf render`)
//!
//! Writes the HTML page for the current collection. Search, sort, active section and
//! expanded cards can all be set from flags, so any state the page can reach is
//! reproducible from the command line.
//!
//! ### Driving the Controller (`papershelf browse`)
//!
//! Reads one event per line from stdin (`input`, `sort`, `reset`, `toggle`, `nav`,
//! `show`) and feeds them to the controller with real timestamps. Search input is
//! debounced exactly as it would be behind a text box.
//!
//! ### Logging
//!
//! Diagnostics go to stderr through `tracing`. `-v` raises the level to info, `-vv` to
//! debug, `-vvv` to trace. `RUST_LOG` overrides the flag.

mod browse;
mod commands;
mod render;
mod setup;

pub use commands::run;
