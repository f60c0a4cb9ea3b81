// crates/relnote-cli/tests/cli.rs - End-to-end tests of the relnote binary
//
// The history query is pointed at `true`, which accepts any arguments,
// prints nothing and exits zero: a clean history with no git repository.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn relnote(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("relnote").unwrap();
    cmd.arg("--root")
        .arg(root)
        .arg("--no-pause")
        .env("RELNOTE_GIT", "true")
        .env_remove("RELNOTE_ROOT")
        .env_remove("RELNOTE_PAUSE");
    cmd
}

fn hotfix_template(root: &Path) {
    let folder = root.join("_Templates").join("HOTFIX");
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join("HOTFIX-x.x.x.x.md"),
        "# HOTFIX-x.x.x.x\n\nKeep HOTFIX-xAxBxCx as is.\n",
    )
    .unwrap();
}

#[test]
fn test_no_identifier_prints_usage() {
    let temp = TempDir::new().unwrap();

    relnote(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MSIMODULE"))
        .stdout(predicate::str::contains("HOTFIX/CONFIG/UMC"));
}

#[test]
fn test_list_categories() {
    let temp = TempDir::new().unwrap();

    relnote(temp.path())
        .arg("--list-categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("UMC-x.x.x.x"));
}

#[test]
fn test_creates_release_note() {
    let temp = TempDir::new().unwrap();
    hotfix_template(temp.path());
    fs::create_dir_all(temp.path().join("HOTFIX-12.11.0.9")).unwrap();

    relnote(temp.path())
        .arg("hotfix-12.11.0.9")
        .assert()
        .success()
        .stdout(predicate::str::contains("HOTFIX-12.11.0.9.md"))
        .stdout(predicate::str::contains("1 template file(s) copied"));

    let created = temp
        .path()
        .join("HOTFIX-12.11.0.9")
        .join("HOTFIX-12.11.0.9.md");
    assert_eq!(
        fs::read_to_string(created).unwrap(),
        "# HOTFIX-12.11.0.9\n\nKeep HOTFIX-xAxBxCx as is.\n"
    );
}

#[test]
fn test_unrecognized_category_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("PATCH-1.0")).unwrap();

    relnote(temp.path())
        .arg("PATCH-1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized category 'PATCH'"));
}

#[test]
fn test_missing_target_folder_fails() {
    let temp = TempDir::new().unwrap();
    hotfix_template(temp.path());

    relnote(temp.path())
        .arg("HOTFIX-1.0.0.1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target folder does not exist"));
}

#[test]
fn test_existing_release_note_is_kept() {
    let temp = TempDir::new().unwrap();
    hotfix_template(temp.path());
    let target = temp.path().join("HOTFIX-2.0.0.0");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("HOTFIX-2.0.0.0.md"), "edited by hand").unwrap();

    relnote(temp.path())
        .arg("HOTFIX-2.0.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(target.join("HOTFIX-2.0.0.0.md")).unwrap(),
        "edited by hand"
    );
}

#[test]
fn test_legacy_readme_without_automated_history_blocks() {
    let temp = TempDir::new().unwrap();
    hotfix_template(temp.path());
    let release = temp.path().join("HOTFIX-3.0.0.0").join("release");
    fs::create_dir_all(&release).unwrap();
    let legacy = release.join("HOTFIX-3.0.0.0_readme.html");
    fs::write(&legacy, "<html/>").unwrap();

    relnote(temp.path())
        .arg("HOTFIX-3.0.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("human changes"));

    assert!(legacy.exists());
}

#[test]
fn test_config_file_changes_templates_dir() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("templates").join("CONFIG");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("CONFIG-x.x.x.x.md"), "CONFIG-x.x.x.x").unwrap();
    fs::create_dir_all(temp.path().join(".relnote")).unwrap();
    fs::write(
        temp.path().join(".relnote").join("config.toml"),
        "[layout]\ntemplates_dir = \"templates\"\n",
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("CONFIG-4.1")).unwrap();

    relnote(temp.path()).arg("CONFIG-4.1").assert().success();

    assert_eq!(
        fs::read_to_string(temp.path().join("CONFIG-4.1").join("CONFIG-4.1.md")).unwrap(),
        "CONFIG-4.1"
    );
}

#[test]
fn test_root_and_pause_come_from_environment() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    hotfix_template(temp.path());
    fs::create_dir_all(temp.path().join("HOTFIX-4.0")).unwrap();

    // No --root and no --no-pause: both must be picked up from the environment
    Command::cargo_bin("relnote")
        .unwrap()
        .current_dir(elsewhere.path())
        .env("RELNOTE_ROOT", temp.path())
        .env("RELNOTE_PAUSE", "never")
        .env("RELNOTE_GIT", "true")
        .arg("HOTFIX-4.0")
        .assert()
        .success();

    assert!(temp.path().join("HOTFIX-4.0").join("HOTFIX-4.0.md").exists());
    assert!(!elsewhere.path().join("HOTFIX-4.0").exists());
}

#[test]
fn test_root_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let decoy = TempDir::new().unwrap();
    hotfix_template(temp.path());
    fs::create_dir_all(temp.path().join("HOTFIX-4.1")).unwrap();

    relnote(temp.path())
        .env("RELNOTE_ROOT", decoy.path())
        .arg("HOTFIX-4.1")
        .assert()
        .success();

    assert!(temp.path().join("HOTFIX-4.1").join("HOTFIX-4.1.md").exists());
}

#[test]
fn test_invalid_pause_mode_is_ignored_with_warning() {
    let temp = TempDir::new().unwrap();
    hotfix_template(temp.path());
    fs::create_dir_all(temp.path().join("HOTFIX-4.2")).unwrap();

    relnote(temp.path())
        .env("RELNOTE_PAUSE", "sometimes")
        .arg("HOTFIX-4.2")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring RELNOTE_PAUSE"));
}

#[test]
fn test_identifier_with_path_separator_is_rejected() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("releases");
    fs::create_dir_all(&root).unwrap();
    hotfix_template(&root);
    fs::create_dir_all(temp.path().join("X")).unwrap();

    relnote(&root)
        .arg("HOTFIX-../../X")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid identifier"));

    assert_eq!(fs::read_dir(temp.path().join("X")).unwrap().count(), 0);
}
