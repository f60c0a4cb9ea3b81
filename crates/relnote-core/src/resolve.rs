// crates/relnote-core/src/resolve.rs - Pure identifier/category resolution
//
// Turns the raw command-line inputs into every path the run touches. No I/O
// happens here, so an unrecognized category can never cause a write.

use std::path::{Component, Path, PathBuf};

use crate::category::Category;
use crate::config::LayoutConfig;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Everything derived from `(identifier, category?)` before any guard runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Upper-cased target identifier, e.g. `HOTFIX-12.11.0.9`
    pub identifier: String,
    pub category: Category,
    pub placeholder_token: &'static str,
    pub template_folder: PathBuf,
    pub target_folder: PathBuf,
    pub legacy_artifact: PathBuf,
    pub final_artifact: PathBuf,
}

impl Resolution {
    /// File name the template must carry for the rename step
    pub fn template_file_name(&self) -> String {
        format!("{}.md", self.placeholder_token)
    }
}

/// Category name implied by an identifier: everything before the first `-`
///
/// Returns an empty string when the identifier has no `-`.
pub fn derive_category(identifier: &str) -> &str {
    identifier
        .split_once('-')
        .map(|(prefix, _)| prefix)
        .unwrap_or("")
}

/// Whether `identifier` names exactly one ordinary path component
///
/// Both separators are rejected on every platform so the same identifier
/// behaves the same everywhere.
fn is_single_component(identifier: &str) -> bool {
    if identifier.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(identifier).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Resolve inputs against a repository root
///
/// An empty or missing `category` is derived from the identifier. Both the
/// identifier and category are upper-cased before lookup. An identifier that
/// would point outside `root` (separators, `.` or `..`) is rejected before
/// the category is looked at.
///
/// EXAMPLES:
/// ```rust
/// # use relnote_core::config::LayoutConfig;
/// # use relnote_core::resolve::resolve;
/// # use std::path::Path;
/// let r = resolve(Path::new("/rel"), &LayoutConfig::default(), "hotfix-12.11.0.9", None).unwrap();
/// assert_eq!(r.identifier, "HOTFIX-12.11.0.9");
/// assert_eq!(r.final_artifact, Path::new("/rel/HOTFIX-12.11.0.9/HOTFIX-12.11.0.9.md"));
/// ```
pub fn resolve(
    root: &Path,
    layout: &LayoutConfig,
    identifier: &str,
    category: Option<&str>,
) -> ScaffoldResult<Resolution> {
    let identifier = identifier.trim().to_uppercase();
    if !identifier.is_empty() && !is_single_component(&identifier) {
        return Err(ScaffoldError::InvalidIdentifier { identifier });
    }

    let category_name = match category.map(str::trim) {
        Some(explicit) if !explicit.is_empty() => explicit.to_uppercase(),
        _ => derive_category(&identifier).to_string(),
    };
    let category: Category = category_name.parse()?;

    let template_folder = root
        .join(&layout.templates_dir)
        .join(category.template_dir_name());
    let target_folder = root.join(&identifier);
    let legacy_artifact = target_folder
        .join(&layout.release_dir)
        .join(format!("{}{}", identifier, layout.legacy_suffix));
    let final_artifact = target_folder.join(format!("{}.md", identifier));

    tracing::debug!(
        %identifier,
        %category,
        template = %template_folder.display(),
        target = %target_folder.display(),
        "resolved inputs"
    );

    Ok(Resolution {
        placeholder_token: category.placeholder_token(),
        identifier,
        category,
        template_folder,
        target_folder,
        legacy_artifact,
        final_artifact,
    })
}
