//! Dispatch from parsed arguments to the controller.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_logging()`: stderr subscriber, level from `-v` or `RUST_LOG`
//! - `init_context()`: builds the API from the discovered project and config
//! - `handle_*()`: per-command handlers that call the API and print results

use super::browse;
use super::render::{print_messages, render_paper_list, render_stats, render_word_count};
use super::setup::{Cli, Commands};
use clap::Parser;
use papershelf::api::{CmdMessage, ConfigAction, ShelfApi};
use papershelf::error::{Result, ShelfError};
use papershelf::init::initialize;
use papershelf::model::{PaperId, SortKey};
use papershelf::source::fs::FileSource;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: ShelfApi<FileSource>,
    config_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, sort }) => handle_list(&mut ctx, search, sort),
        Some(Commands::Render {
            search,
            sort,
            section,
            expand,
            output,
        }) => handle_render(&mut ctx, search, sort, section, expand, output),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Browse) => handle_browse(&mut ctx),
        Some(Commands::Count { file }) => handle_count(&ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.papers.as_deref())?;

    Ok(AppContext {
        api: ctx.api,
        config_dir: ctx.config_dir,
    })
}

fn parse_sort(sort: Option<String>) -> Result<Option<SortKey>> {
    sort.map(|key| key.parse()).transpose()
}

/// Loads the corpus and applies the requested search and sort.
fn prepare_view(ctx: &mut AppContext, search: Option<String>, sort: Option<String>) -> Result<()> {
    let sort = parse_sort(sort)?;
    ctx.api.load();
    if let Some(key) = sort {
        ctx.api.on_sort_change(key);
    }
    if let Some(query) = search {
        ctx.api.apply_search(query);
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, sort: Option<String>) -> Result<()> {
    prepare_view(ctx, search, sort)?;
    print!("{}", render_paper_list(ctx.api.filtered()));
    Ok(())
}

fn handle_render(
    ctx: &mut AppContext,
    search: Option<String>,
    sort: Option<String>,
    section: Option<String>,
    expand: Vec<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    prepare_view(ctx, search, sort)?;
    let mut messages = Vec::new();

    if let Some(section) = section {
        let href = format!("#{}", section.trim_start_matches('#'));
        if !ctx.api.navigate(&href) {
            messages.push(CmdMessage::warning(format!(
                "Unknown section '{}', no section is shown",
                section
            )));
        }
    }

    for id in expand {
        if ctx.api.toggle_abstract(&PaperId::new(id.as_str())).is_none() {
            messages.push(CmdMessage::warning(format!(
                "Paper '{}' is not shown or has a short abstract",
                id
            )));
        }
    }

    let html = ctx.api.render_page()?;
    match output {
        Some(path) => {
            std::fs::write(&path, html).map_err(ShelfError::Io)?;
            messages.push(CmdMessage::success(format!(
                "Wrote {} papers to {}",
                ctx.api.filtered().len(),
                path.display()
            )));
        }
        None => print!("{}", html),
    }

    print_messages(&messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    ctx.api.load();
    print!("{}", render_stats(&ctx.api.stats()));
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    ctx.api.load();
    let stdin = std::io::stdin();
    browse::run(&mut ctx.api, stdin.lock())
}

fn handle_count(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(ShelfError::Io)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(ShelfError::Io)?;
            buffer
        }
    };

    print!("{}", render_word_count(&ctx.api.count_words(&text)));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = papershelf::api::config(&ctx.config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort(None).unwrap(), None);
        assert_eq!(
            parse_sort(Some("author-asc".into())).unwrap(),
            Some(SortKey::AuthorAsc)
        );
        assert!(matches!(
            parse_sort(Some("shuffle".into())),
            Err(ShelfError::InvalidSortKey(_))
        ));
    }
}
