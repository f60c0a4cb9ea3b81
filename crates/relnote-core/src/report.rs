// crates/relnote-core/src/report.rs - Progress reporting seam
//
// The scaffolder announces each guard and render step before and after it
// runs. How that is shown (colors, pauses, nothing at all) is up to the
// caller.

use std::fmt;

/// One observable unit of work in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Resolve,
    TargetFolderExists,
    LegacyArtifactSafe,
    VersionControlQuery,
    FinalArtifactAbsent,
    CopyTemplate,
    RenameTemplate,
    SubstitutePlaceholder,
}

impl Step {
    pub fn describe(&self) -> &'static str {
        match self {
            Step::Resolve => "Resolving template category",
            Step::TargetFolderExists => "Checking target folder exists",
            Step::LegacyArtifactSafe => "Checking legacy readme history",
            Step::VersionControlQuery => "Checking version-control query",
            Step::FinalArtifactAbsent => "Checking release note does not exist yet",
            Step::CopyTemplate => "Copying template files",
            Step::RenameTemplate => "Renaming template document",
            Step::SubstitutePlaceholder => "Replacing placeholder",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Receives human-readable progress from a run
pub trait Reporter {
    fn step_started(&mut self, step: Step);

    fn step_passed(&mut self, step: Step);

    /// Free-form status detail, e.g. resolved paths
    fn info(&mut self, message: &str);

    fn warn(&mut self, message: &str);
}

/// Discards everything
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn step_started(&mut self, _step: Step) {}
    fn step_passed(&mut self, _step: Step) {}
    fn info(&mut self, _message: &str) {}
    fn warn(&mut self, _message: &str) {}
}
