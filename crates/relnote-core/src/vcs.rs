// crates/relnote-core/src/vcs.rs - Version-control history collaborator
//
// The guard chain only needs three facts about a file's history: the most
// recent author, the most recent message, and whether the query succeeded.
// The trait keeps the child process out of the guard logic so tests can
// script the answers.

use std::path::Path;
use std::process::Command;

use crate::config::VcsConfig;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Field separator requested from `git log --format`
const FIELD_SEPARATOR: char = '\u{1f}';

/// Most recent history entry for one path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub author: String,
    pub message: String,
    /// Exit status of the query was zero
    pub success: bool,
    /// Captured stdout and stderr, shown to the operator on failure
    pub diagnostics: String,
}

impl LogEntry {
    /// Whether the entry was written by the automated committer
    ///
    /// Exact author match AND the message contains one of the configured
    /// automated phrases.
    pub fn is_automated(&self, policy: &VcsConfig) -> bool {
        self.author == policy.automation_author
            && policy
                .automated_messages
                .iter()
                .filter(|phrase| !phrase.is_empty())
                .any(|phrase| self.message.contains(phrase.as_str()))
    }
}

/// Source of file history
pub trait VersionControl {
    /// Return the most recent history entry for `path`
    ///
    /// A query that ran but exited non-zero is reported through
    /// `LogEntry::success`, not as an `Err`.
    fn last_entry(&self, path: &Path) -> ScaffoldResult<LogEntry>;
}

/// `git log` run as a blocking child process
#[derive(Debug, Clone)]
pub struct GitLog {
    program: String,
}

impl GitLog {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &VcsConfig) -> Self {
        Self::new(config.program.clone())
    }
}

impl Default for GitLog {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VersionControl for GitLog {
    fn last_entry(&self, path: &Path) -> ScaffoldResult<LogEntry> {
        // Run from the file's directory so the query works whichever
        // repository the root belongs to.
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let work_dir = nearest_existing(dir);
        let pathspec = path.strip_prefix(work_dir).unwrap_or(path);

        tracing::debug!(
            program = %self.program,
            dir = %work_dir.display(),
            pathspec = %pathspec.display(),
            "querying last history entry"
        );

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(work_dir)
            .args(["log", "-1", "--format=%an%x1f%s", "--"])
            .arg(pathspec)
            .output()
            .map_err(|e| ScaffoldError::VersionControlQueryFailed {
                path: path.to_path_buf(),
                diagnostics: format!("failed to run '{}': {}", self.program, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let (author, message) = parse_log_line(&stdout);

        tracing::debug!(status = ?output.status.code(), %author, %message, "history query finished");

        Ok(LogEntry {
            author,
            message,
            success: output.status.success(),
            diagnostics: format!("{}{}", stdout, stderr).trim().to_string(),
        })
    }
}

/// Split `author<US>subject` into its parts; missing parts are empty
fn parse_log_line(stdout: &str) -> (String, String) {
    let line = stdout.lines().next().unwrap_or("").trim_end();
    match line.split_once(FIELD_SEPARATOR) {
        Some((author, message)) => (author.to_string(), message.to_string()),
        None => (line.to_string(), String::new()),
    }
}

/// Closest ancestor of `dir` (itself included) that exists on disk
fn nearest_existing(dir: &Path) -> &Path {
    dir.ancestors()
        .find(|ancestor| ancestor.is_dir())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Run git in `dir` with a fixed identity so commits work on bare CI hosts
    fn git(dir: &Path, author: &str, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["-c", &format!("user.name={}", author)])
            .args(["-c", "user.email=relnote@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Repository holding one committed legacy readme
    fn committed_legacy(author: &str, message: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        git(temp.path(), author, &["init", "--quiet"]);

        let legacy = temp
            .path()
            .join("HOTFIX-1.0")
            .join("release")
            .join("HOTFIX-1.0_readme.html");
        fs::create_dir_all(legacy.parent().unwrap()).unwrap();
        fs::write(&legacy, "<html/>").unwrap();

        git(temp.path(), author, &["add", "."]);
        git(temp.path(), author, &["commit", "--quiet", "-m", message]);
        (temp, legacy)
    }

    fn policy() -> VcsConfig {
        VcsConfig {
            program: "git".to_string(),
            automation_author: "Release Automation".to_string(),
            automated_messages: vec!["Automated release note".to_string(), "Generated readme".to_string()],
        }
    }

    fn entry(author: &str, message: &str) -> LogEntry {
        LogEntry {
            author: author.to_string(),
            message: message.to_string(),
            success: true,
            diagnostics: String::new(),
        }
    }

    #[test]
    fn test_automated_requires_author_and_message() {
        let policy = policy();

        assert!(entry("Release Automation", "Automated release note for 12.1").is_automated(&policy));
        assert!(entry("Release Automation", "chore: Generated readme").is_automated(&policy));

        assert!(!entry("Jane Doe", "Automated release note").is_automated(&policy));
        assert!(!entry("Release Automation", "fix typo").is_automated(&policy));
        assert!(!entry("release automation", "Generated readme").is_automated(&policy));
        assert!(!LogEntry::default().is_automated(&policy));
    }

    #[test]
    fn test_parse_log_line() {
        assert_eq!(
            parse_log_line("Release Automation\u{1f}Generated readme\n"),
            ("Release Automation".to_string(), "Generated readme".to_string())
        );
        assert_eq!(parse_log_line(""), (String::new(), String::new()));
        assert_eq!(
            parse_log_line("someone\n"),
            ("someone".to_string(), String::new())
        );
    }

    #[test]
    fn test_missing_program_is_query_failure() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("readme.html");
        std::fs::write(&file, "<html/>").unwrap();

        let git = GitLog::new("relnote-test-no-such-vcs-binary");
        let err = git.last_entry(&file).unwrap_err();
        assert!(matches!(err, ScaffoldError::VersionControlQueryFailed { .. }));
    }

    #[test]
    fn test_git_log_reports_automated_commit() {
        let (_repo, legacy) =
            committed_legacy("Release Automation", "Automated release note generation for HOTFIX-1.0");

        let entry = GitLog::default().last_entry(&legacy).unwrap();

        assert!(entry.success, "{}", entry.diagnostics);
        assert_eq!(entry.author, "Release Automation");
        assert_eq!(entry.message, "Automated release note generation for HOTFIX-1.0");
        assert!(entry.is_automated(&VcsConfig::default()));
    }

    #[test]
    fn test_git_log_reports_human_commit() {
        let (_repo, legacy) = committed_legacy("Jane Doe", "Reword install steps");

        let entry = GitLog::default().last_entry(&legacy).unwrap();

        assert!(entry.success, "{}", entry.diagnostics);
        assert_eq!(entry.author, "Jane Doe");
        assert_eq!(entry.message, "Reword install steps");
        assert!(!entry.is_automated(&VcsConfig::default()));
    }

    #[test]
    fn test_git_log_untracked_file_is_clean_query() {
        let (repo, _legacy) = committed_legacy("Jane Doe", "Initial import");
        let untracked = repo.path().join("HOTFIX-2.0").join("release").join("HOTFIX-2.0_readme.html");

        // Parent folders do not exist; the query runs from the nearest one that does
        let entry = GitLog::default().last_entry(&untracked).unwrap();

        assert!(entry.success, "{}", entry.diagnostics);
        assert!(entry.author.is_empty());
        assert!(entry.message.is_empty());
    }
}
