use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure
///
/// Both positionals are optional so that a bare `relnote` prints the usage
/// text and exits successfully instead of failing argument parsing.
#[derive(Parser, Debug)]
#[command(name = "relnote")]
#[command(about = "Scaffold a release-note document from a category template")]
#[command(version)]
pub struct Cli {
    /// Repository root holding _Templates/ and the patch folders
    /// (overrides RELNOTE_ROOT environment variable)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(long)]
    pub debug: bool,

    /// Never wait for a key press before exiting
    #[arg(long)]
    pub no_pause: bool,

    /// List recognized categories with their placeholder tokens and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Target identifier, e.g. HOTFIX-12.11.0.9
    pub identifier: Option<String>,

    /// Template category; derived from the identifier prefix when omitted
    pub category: Option<String>,
}
