//! # Terminal Rendering
//!
//! Layout math (widths, truncation, padding) stays in Rust because it needs
//! Unicode-aware processing. Styling is applied last and can be switched off, which
//! is how the tests get plain text.

use chrono::Utc;
use colored::Colorize;
use console::{Style, Term};
use papershelf::api::{CmdMessage, MessageLevel};
use papershelf::commands::count::WordCount;
use papershelf::commands::stats::CorpusStats;
use papershelf::model::Paper;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
const LEFT_PAD: &str = "  ";
const AUTHOR_INDENT: &str = "      ";

struct ListStyles {
    index: Style,
    title: Style,
    time: Style,
    authors: Style,
}

impl ListStyles {
    fn new(use_color: bool) -> Self {
        Self {
            index: Style::new().yellow().force_styling(use_color),
            title: Style::new().bold().force_styling(use_color),
            time: Style::new().italic().dim().force_styling(use_color),
            authors: Style::new().dim().force_styling(use_color),
        }
    }
}

pub fn line_width() -> usize {
    let term = Term::stdout();
    if term.is_term() {
        let (_, cols) = term.size();
        (cols as usize).min(LINE_WIDTH)
    } else {
        LINE_WIDTH
    }
}

/// Renders the filtered papers as a numbered list, newest first unless sorted otherwise.
pub fn render_paper_list(papers: &[Paper]) -> String {
    let use_color = Term::stdout().features().colors_supported();
    render_paper_list_internal(papers, line_width(), use_color)
}

fn render_paper_list_internal(papers: &[Paper], width: usize, use_color: bool) -> String {
    if papers.is_empty() {
        return "No papers found.\n".to_string();
    }

    let styles = ListStyles::new(use_color);
    let mut output = String::new();

    for (i, paper) in papers.iter().enumerate() {
        let index = format!("{}. ", i + 1);
        let when = format_when(paper);
        let fixed = LEFT_PAD.width() + index.width() + TIME_WIDTH + 1;
        let title_width = width.saturating_sub(fixed);
        let title = truncate_to_width(&paper.title, title_width);
        let padding = " ".repeat(title_width.saturating_sub(title.width()));

        output.push_str(&format!(
            "{}{}{}{} {}\n",
            LEFT_PAD,
            styles.index.apply_to(&index),
            styles.title.apply_to(&title),
            padding,
            styles.time.apply_to(format!("{:>w$}", when, w = TIME_WIDTH)),
        ));

        let authors = paper.authors.display_text();
        if !authors.is_empty() {
            let authors = truncate_to_width(&authors, width.saturating_sub(AUTHOR_INDENT.width()));
            output.push_str(&format!(
                "{}{}\n",
                AUTHOR_INDENT,
                styles.authors.apply_to(authors)
            ));
        }
    }

    output
}

/// Relative age for parseable dates, the raw text otherwise.
fn format_when(paper: &Paper) -> String {
    match paper.date_modified.parsed() {
        Some(parsed) => {
            let elapsed = Utc::now().naive_utc().signed_duration_since(parsed);
            Formatter::new().convert(elapsed.to_std().unwrap_or_default())
        }
        None => truncate_to_width(paper.date_modified.raw(), TIME_WIDTH),
    }
}

pub fn render_stats(stats: &CorpusStats) -> String {
    format!(
        "Papers:  {}\nAuthors: {}\nFields:  {}\n",
        stats.papers, stats.authors, stats.fields
    )
}

pub fn render_word_count(count: &WordCount) -> String {
    let line = format!("{} / {} words", count.words, count.limit);
    if count.over_limit {
        format!("{}\n", line.red())
    } else {
        format!("{}\n", line.green())
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
