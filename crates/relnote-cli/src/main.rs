// crates/relnote-cli/src/main.rs - CLI Application Entry Point
//
// relnote <IDENTIFIER> [CATEGORY]
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap args)     │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (root + config)  │    │ (console, pause)    │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// relnote                              # Usage text, exit 0
// relnote HOTFIX-12.11.0.9             # Category derived from prefix
// relnote Billing-3.0.1.0 module       # Explicit category
// relnote --no-pause UMC-7.1           # Batch use: never wait for a key
// ```

use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Root and configuration resolution
mod services; // Console output and pause hook

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.list_categories {
        commands::usage::list_categories();
        return Ok(());
    }

    // An empty identifier is a request for help, not an error
    let identifier = cli.identifier.as_deref().map(str::trim).unwrap_or("");
    if identifier.is_empty() {
        commands::usage::print_usage();
        return Ok(());
    }

    let ctx = Context::new(cli.root, cli.no_pause)?;

    commands::scaffold::handle(&ctx, identifier, cli.category.as_deref())
}

/// Log to stderr; WARN by default, DEBUG with --debug
fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
