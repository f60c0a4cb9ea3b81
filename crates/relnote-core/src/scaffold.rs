// crates/relnote-core/src/scaffold.rs - One scaffolding run, end to end
//
// resolve -> guard chain -> render. Linear, no retries. The configuration
// and the history source are handed in; nothing is read from globals.

use std::path::PathBuf;

use crate::config::RelnoteConfig;
use crate::error::ScaffoldResult;
use crate::guard::run_guards;
use crate::render::render;
use crate::report::{Reporter, Step};
use crate::resolve::{Resolution, resolve};
use crate::vcs::VersionControl;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub resolution: Resolution,
    /// A machine-written legacy artifact was deleted by the guard chain
    pub legacy_removed: bool,
    /// Number of template files copied into the target folder
    pub copied_files: usize,
}

/// Creates release-note documents under a repository root
pub struct Scaffolder<V: VersionControl> {
    root: PathBuf,
    config: RelnoteConfig,
    vcs: V,
}

impl<V: VersionControl> Scaffolder<V> {
    pub fn new(root: impl Into<PathBuf>, config: RelnoteConfig, vcs: V) -> Self {
        Self {
            root: root.into(),
            config,
            vcs,
        }
    }

    /// Resolve without touching the filesystem
    pub fn resolve(&self, identifier: &str, category: Option<&str>) -> ScaffoldResult<Resolution> {
        resolve(&self.root, &self.config.layout, identifier, category)
    }

    /// Run the full sequence for one identifier
    ///
    /// The first failing guard or render step ends the run. Filesystem
    /// changes already made (a deleted legacy artifact, copied template
    /// files, a renamed document) are not rolled back.
    pub fn run(
        &self,
        identifier: &str,
        category: Option<&str>,
        reporter: &mut dyn Reporter,
    ) -> ScaffoldResult<ScaffoldOutcome> {
        reporter.step_started(Step::Resolve);
        let resolution = self.resolve(identifier, category)?;
        reporter.info(&format!(
            "{} uses template {} with placeholder {}",
            resolution.identifier,
            resolution.template_folder.display(),
            resolution.placeholder_token
        ));
        reporter.step_passed(Step::Resolve);

        let guards = run_guards(&resolution, &self.vcs, &self.config.vcs, reporter)?;
        let copied_files = render(&resolution, reporter)?;

        tracing::info!(
            identifier = %resolution.identifier,
            artifact = %resolution.final_artifact.display(),
            "release note created"
        );

        Ok(ScaffoldOutcome {
            resolution,
            legacy_removed: guards.legacy_removed,
            copied_files,
        })
    }
}
