// crates/relnote-core/src/render.rs - Copy, rename, substitute
//
// Runs only after every guard passed. Nothing here is transactional: if the
// rewrite fails after the rename, the renamed file stays behind and the
// operator has to clean up before re-running.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::report::{Reporter, Step};
use crate::resolve::Resolution;

/// Replace every literal occurrence of `token` with `identifier`
///
/// Plain substring replacement: `.` and `-` in the token are ordinary
/// characters, so `HOTFIX-x.x.x.x` never matches `HOTFIX-xAxBxCx`.
pub fn substitute_placeholder(content: &str, token: &str, identifier: &str) -> String {
    if token.is_empty() {
        return content.to_string();
    }
    content.replace(token, identifier)
}

/// Recursively copy `source` into `destination`, overwriting same-named files
///
/// Existing entries in the destination that the template does not contain
/// are left alone. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> ScaffoldResult<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source.to_path_buf());
            ScaffoldError::fs("read template", path, e.into())
        })?;

        // Every walked entry lives under `source`.
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::fs("create directory", &target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::fs("copy", &target, e))?;
            tracing::debug!(from = %entry.path().display(), to = %target.display(), "copied");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Copy the template folder, rename its document and fill in the identifier
///
/// Returns the number of template files copied.
pub fn render(resolution: &Resolution, reporter: &mut dyn Reporter) -> ScaffoldResult<usize> {
    reporter.step_started(Step::CopyTemplate);
    if !resolution.template_folder.is_dir() {
        return Err(ScaffoldError::fs(
            "read template folder",
            &resolution.template_folder,
            std::io::Error::new(std::io::ErrorKind::NotFound, "template folder not found"),
        ));
    }
    let copied = copy_tree(&resolution.template_folder, &resolution.target_folder)?;
    reporter.info(&format!(
        "Copied {} file(s) from {}",
        copied,
        resolution.template_folder.display()
    ));
    reporter.step_passed(Step::CopyTemplate);

    reporter.step_started(Step::RenameTemplate);
    let copied_document: PathBuf = resolution
        .target_folder
        .join(resolution.template_file_name());
    if !copied_document.is_file() {
        return Err(ScaffoldError::TemplateFileMissing {
            path: copied_document,
        });
    }
    fs::rename(&copied_document, &resolution.final_artifact)
        .map_err(|e| ScaffoldError::fs("rename", &copied_document, e))?;
    reporter.step_passed(Step::RenameTemplate);

    reporter.step_started(Step::SubstitutePlaceholder);
    let content = fs::read_to_string(&resolution.final_artifact)
        .map_err(|e| ScaffoldError::fs("read", &resolution.final_artifact, e))?;
    let occurrences = content.matches(resolution.placeholder_token).count();
    let rewritten = substitute_placeholder(&content, resolution.placeholder_token, &resolution.identifier);
    fs::write(&resolution.final_artifact, rewritten)
        .map_err(|e| ScaffoldError::fs("write", &resolution.final_artifact, e))?;
    tracing::info!(
        path = %resolution.final_artifact.display(),
        occurrences,
        "placeholder replaced"
    );
    reporter.step_passed(Step::SubstitutePlaceholder);

    Ok(copied)
}
