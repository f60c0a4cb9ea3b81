// crates/relnote-cli/src/services/mod.rs - Service layer modules
pub mod console;

pub use console::ConsoleReporter;
