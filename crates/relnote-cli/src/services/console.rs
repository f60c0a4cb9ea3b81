// crates/relnote-cli/src/services/console.rs - Console output and pause hook
//
// Leveled, colored status lines for each step of a run, plus the optional
// "press any key" pause that interactive operators expect after a run.

use console::{Term, style};
use relnote_core::{PauseMode, Reporter, Step};
use std::fmt::Display;

/// Prints step progress to the terminal
///
/// Progress and info go to stdout; warnings and failures go to stderr so a
/// caller capturing stdout only sees the normal flow.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Report a terminal failure
    pub fn failure(&self, error: &dyn Display) {
        eprintln!("{} {}", style("✗").red().bold(), style(error).red());
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), style(message).green().bold());
    }
}

impl Reporter for ConsoleReporter {
    fn step_started(&mut self, step: Step) {
        println!("{} {}...", style("→").cyan(), step);
    }

    fn step_passed(&mut self, step: Step) {
        println!("{} {}", style("✓").green(), style(step).dim());
    }

    fn info(&mut self, message: &str) {
        println!("  {}", message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), style(message).yellow());
    }
}

/// Wait for a key press if the pause mode asks for it
///
/// `Auto` only pauses when stdout is an interactive terminal, so piped and
/// scripted runs never block here.
pub fn pause(mode: PauseMode) {
    let term = Term::stdout();
    let should_pause = match mode {
        PauseMode::Always => true,
        PauseMode::Never => false,
        PauseMode::Auto => term.is_term(),
    };

    if !should_pause {
        return;
    }

    println!();
    println!("{}", style("Press any key to continue...").dim());
    if let Err(e) = term.read_key() {
        tracing::debug!("pause skipped: {}", e);
    }
}
