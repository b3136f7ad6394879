//! # Papershelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination. Everything below the CLI
//! is the `papershelf` library, which never touches the terminal.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: logging setup, context wiring and per-command handlers
//! - `cli/render.rs`: terminal formatting of lists, stats and messages
//! - `cli/browse.rs`: the line-oriented event loop that drives the page controller

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
