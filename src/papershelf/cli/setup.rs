use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "papershelf", bin_name = "papershelf", version)]
#[command(about = "Search, sort and render a collection of research papers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Papers document to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub papers: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List papers
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (date-desc, date-asc, title-asc, title-desc, author-asc)
        #[arg(long, value_name = "KEY")]
        sort: Option<String>,
    },

    /// Render the collection page as HTML
    #[command(display_order = 2)]
    Render {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order
        #[arg(long, value_name = "KEY")]
        sort: Option<String>,

        /// Section to show
        #[arg(long, value_name = "ID")]
        section: Option<String>,

        /// Paper ids whose abstracts start expanded
        #[arg(long, value_name = "ID", num_args = 1..)]
        expand: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show collection statistics
    #[command(display_order = 3)]
    Stats,

    /// Drive the page with events read from stdin
    #[command(display_order = 4)]
    Browse,

    /// Count the words of an abstract draft
    #[command(display_order = 5)]
    Count {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Config key
        key: Option<String>,
        /// Config value
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["papershelf"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_list_with_search_and_sort() {
        let cli =
            Cli::try_parse_from(["papershelf", "ls", "-s", "graph", "--sort", "title-asc"]).unwrap();
        match cli.command {
            Some(Commands::List { search, sort }) => {
                assert_eq!(search.as_deref(), Some("graph"));
                assert_eq!(sort.as_deref(), Some("title-asc"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_collects_expanded_ids() {
        let cli = Cli::try_parse_from([
            "papershelf",
            "render",
            "--expand",
            "1",
            "2",
            "--section",
            "papers",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                expand, section, ..
            }) => {
                assert_eq!(expand, vec!["1", "2"]);
                assert_eq!(section.as_deref(), Some("papers"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["papershelf", "stats", "-vv", "--papers", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.papers, Some(PathBuf::from("x.json")));
    }
}
