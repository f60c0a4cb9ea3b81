// crates/relnote-core/src/guard.rs - Ordered precondition checks
//
// GUARD ORDER (first failure ends the run):
// 1. target folder exists
// 2. legacy artifact absent, or machine-written and therefore deleted
// 3. the version-control query for the legacy artifact succeeded
// 4. final artifact does not exist yet
//
// The history query runs exactly once, between guards 1 and 2. Its answer
// feeds guard 2 (author/message) and guard 3 (exit status). Deleting a safe
// legacy artifact is a side effect of guard 2 and is not undone if a later
// guard fails.

use std::fs;

use crate::config::VcsConfig;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::report::{Reporter, Step};
use crate::resolve::Resolution;
use crate::vcs::{LogEntry, VersionControl};

/// What the guard chain changed on its way through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardOutcome {
    /// The legacy artifact existed, was machine-written and has been deleted
    pub legacy_removed: bool,
}

/// Run every guard in order against a resolution
pub fn run_guards(
    resolution: &Resolution,
    vcs: &dyn VersionControl,
    policy: &VcsConfig,
    reporter: &mut dyn Reporter,
) -> ScaffoldResult<GuardOutcome> {
    let mut outcome = GuardOutcome::default();

    reporter.step_started(Step::TargetFolderExists);
    if !resolution.target_folder.is_dir() {
        return Err(ScaffoldError::TargetFolderMissing {
            path: resolution.target_folder.clone(),
        });
    }
    reporter.step_passed(Step::TargetFolderExists);

    reporter.step_started(Step::LegacyArtifactSafe);
    let entry = query_history(resolution, vcs)?;
    if resolution.legacy_artifact.exists() {
        if !entry.is_automated(policy) {
            // No history to show when the query failed; show its diagnostics
            let message = if entry.success {
                entry.message
            } else {
                format!("history query failed: {}", entry.diagnostics)
            };
            return Err(ScaffoldError::LegacyArtifactHasHumanChanges {
                path: resolution.legacy_artifact.clone(),
                author: entry.author,
                message,
            });
        }

        fs::remove_file(&resolution.legacy_artifact)
            .map_err(|e| ScaffoldError::fs("delete", &resolution.legacy_artifact, e))?;
        tracing::info!(
            path = %resolution.legacy_artifact.display(),
            author = %entry.author,
            "deleted machine-written legacy artifact"
        );
        reporter.warn(&format!(
            "Deleted legacy artifact {} (last commit by {})",
            resolution.legacy_artifact.display(),
            entry.author
        ));
        outcome.legacy_removed = true;
    } else {
        tracing::debug!(path = %resolution.legacy_artifact.display(), "no legacy artifact");
    }
    reporter.step_passed(Step::LegacyArtifactSafe);

    reporter.step_started(Step::VersionControlQuery);
    if !entry.success {
        return Err(ScaffoldError::VersionControlQueryFailed {
            path: resolution.legacy_artifact.clone(),
            diagnostics: entry.diagnostics,
        });
    }
    reporter.step_passed(Step::VersionControlQuery);

    reporter.step_started(Step::FinalArtifactAbsent);
    if resolution.final_artifact.exists() {
        return Err(ScaffoldError::FinalArtifactAlreadyExists {
            path: resolution.final_artifact.clone(),
        });
    }
    reporter.step_passed(Step::FinalArtifactAbsent);

    Ok(outcome)
}

/// Ask for the legacy artifact's history, folding a failure to run the
/// query into an unsuccessful entry so guard 2 still sees it first
fn query_history(resolution: &Resolution, vcs: &dyn VersionControl) -> ScaffoldResult<LogEntry> {
    match vcs.last_entry(&resolution.legacy_artifact) {
        Ok(entry) => Ok(entry),
        Err(ScaffoldError::VersionControlQueryFailed { diagnostics, .. }) => Ok(LogEntry {
            success: false,
            diagnostics,
            ..LogEntry::default()
        }),
        Err(other) => Err(other),
    }
}
