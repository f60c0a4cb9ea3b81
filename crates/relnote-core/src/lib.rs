// crates/relnote-core/src/lib.rs - Release-note scaffolding core
//
// Resolves an identifier and category to a template, checks the target
// folder through an ordered guard chain, then copies the template and fills
// in the identifier.
//
// MODULE ORGANIZATION:
// - category: the closed set of artifact kinds and their placeholder tokens
// - resolve: pure input -> paths resolution
// - vcs: history source trait and the `git log` implementation
// - guard: ordered precondition checks
// - render: copy, rename, literal substitution
// - scaffold: one run, end to end
// - report: progress reporting seam
// - config: TOML configuration and its loading hierarchy
// - error: error taxonomy

pub mod category;
pub mod config;
pub mod error;
pub mod guard;
pub mod render;
pub mod report;
pub mod resolve;
pub mod scaffold;
pub mod vcs;

pub use category::Category;
pub use config::{ConfigManager, PauseMode, RelnoteConfig};
pub use error::{ScaffoldError, ScaffoldResult};
pub use report::{NullReporter, Reporter, Step};
pub use resolve::{Resolution, resolve};
pub use scaffold::{ScaffoldOutcome, Scaffolder};
pub use vcs::{GitLog, LogEntry, VersionControl};
