//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// blogsift - browse and search a blog from the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blogsift")]
#[command(version)]
#[command(about = "Browse and search blog posts from the terminal", long_about = None)]
pub struct Args {
    /// Search post titles and excerpts
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page of the post list to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Posts per page (overrides `items_per_page` from settings)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Show a single post by id
    #[arg(long)]
    pub post: Option<String>,

    /// Role to browse as (visitor, user, admin)
    #[arg(long)]
    pub role: Option<String>,

    /// Account id used when opening drafts
    #[arg(long)]
    pub user_id: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
