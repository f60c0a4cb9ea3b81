// crates/relnote-cli/src/commands/mod.rs - Command Handler Modules
//
// - scaffold: create a release note for one identifier
// - usage: help text and the category listing

pub mod scaffold;
pub mod usage;
