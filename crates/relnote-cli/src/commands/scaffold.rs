// crates/relnote-cli/src/commands/scaffold.rs - Create one release note
//
// Wires the context into a Scaffolder backed by `git log`, streams progress
// to the console, then runs the optional pause hook whether the run passed
// or failed. A failed run exits with status 1.

use anyhow::Result;
use relnote_core::{GitLog, Scaffolder};

use crate::context::Context;
use crate::services::ConsoleReporter;
use crate::services::console::pause;

/// Scaffold the release note for `identifier`
pub fn handle(ctx: &Context, identifier: &str, category: Option<&str>) -> Result<()> {
    let config = ctx.config().clone();
    let pause_mode = config.console.pause;
    let vcs = GitLog::from_config(&config.vcs);
    let scaffolder = Scaffolder::new(ctx.root(), config, vcs);
    let mut reporter = ConsoleReporter::new();

    match scaffolder.run(identifier, category, &mut reporter) {
        Ok(outcome) => {
            if outcome.legacy_removed {
                reporter.success("Legacy readme replaced by markdown release note");
            }
            reporter.success(&format!(
                "Created {} ({} template file(s) copied)",
                outcome.resolution.final_artifact.display(),
                outcome.copied_files
            ));
            pause(pause_mode);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = ?e, "scaffolding failed");
            reporter.failure(&e);
            pause(pause_mode);
            std::process::exit(1);
        }
    }
}
