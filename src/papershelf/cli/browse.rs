//! Line-oriented event loop over the page controller.
//!
//! Each stdin line is one UI event. Deadlines are checked whenever a line arrives,
//! so a burst of `input` lines collapses into a single search; `wait` lets a script
//! sit idle long enough for the pending search to fire. End of input flushes
//! whatever is still pending.

use super::render::{print_messages, render_paper_list};
use papershelf::api::{CmdMessage, ShelfApi};
use papershelf::error::Result;
use papershelf::model::{PaperId, SortKey};
use papershelf::preview::CardState;
use papershelf::source::CorpusSource;
use std::io::BufRead;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    Input(String),
    Sort(String),
    Reset,
    Toggle(String),
    Nav(String),
    Wait(Duration),
    Show,
    Blank,
    Unknown(String),
}

pub fn parse_event(line: &str) -> BrowseEvent {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    match verb {
        "" => BrowseEvent::Blank,
        // input keeps inner and trailing spaces; the filter normalizes them
        "input" => BrowseEvent::Input(rest.to_string()),
        "sort" => BrowseEvent::Sort(rest.trim().to_string()),
        "reset" => BrowseEvent::Reset,
        "toggle" => BrowseEvent::Toggle(rest.trim().to_string()),
        "nav" => BrowseEvent::Nav(rest.trim().to_string()),
        "wait" => match rest.trim().parse::<u64>() {
            Ok(ms) => BrowseEvent::Wait(Duration::from_millis(ms)),
            Err(_) => BrowseEvent::Unknown(line.to_string()),
        },
        "show" => BrowseEvent::Show,
        _ => BrowseEvent::Unknown(line.to_string()),
    }
}

pub fn header<S: CorpusSource>(api: &ShelfApi<S>) -> String {
    let count = api.filtered().len();
    format!(
        "-- {} {} (query: \"{}\", sort: {}) --",
        count,
        if count == 1 { "paper" } else { "papers" },
        api.query(),
        api.sort_key()
    )
}

fn print_view<S: CorpusSource>(api: &ShelfApi<S>) {
    println!("{}", header(api));
    print!("{}", render_paper_list(api.filtered()));
}

pub fn run<S: CorpusSource, R: BufRead>(api: &mut ShelfApi<S>, input: R) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        if api.tick(Instant::now()) {
            print_view(api);
        }

        let event = parse_event(&line);
        debug!(?event, "browse event");
        match event {
            BrowseEvent::Input(text) => api.on_search_input(text, Instant::now()),
            BrowseEvent::Sort(key) => match key.parse::<SortKey>() {
                Ok(key) => {
                    api.on_sort_change(key);
                    print_view(api);
                }
                Err(e) => print_messages(&[CmdMessage::warning(e.to_string())]),
            },
            BrowseEvent::Reset => {
                api.reset();
                print_view(api);
            }
            BrowseEvent::Toggle(id) => {
                let message = match api.toggle_abstract(&PaperId::new(id.as_str())) {
                    Some(CardState::Expanded) => CmdMessage::info(format!("{} expanded", id)),
                    Some(CardState::Collapsed) => CmdMessage::info(format!("{} collapsed", id)),
                    None => CmdMessage::warning(format!("{} has no abstract to expand", id)),
                };
                print_messages(&[message]);
            }
            BrowseEvent::Nav(href) => {
                if api.navigate(&href) {
                    print_messages(&[CmdMessage::info(format!("section: {}", href))]);
                } else {
                    print_messages(&[CmdMessage::warning(format!("no section {}", href))]);
                }
            }
            BrowseEvent::Wait(duration) => {
                std::thread::sleep(duration);
                if api.tick(Instant::now()) {
                    print_view(api);
                }
            }
            BrowseEvent::Show => print_view(api),
            BrowseEvent::Blank => {}
            BrowseEvent::Unknown(line) => {
                print_messages(&[CmdMessage::warning(format!("Unknown event: {}", line))])
            }
        }
    }

    if api.flush_search() {
        print_view(api);
    }
    Ok(())
}
