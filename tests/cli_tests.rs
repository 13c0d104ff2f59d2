//! CLI assertion tests

use assert_cmd::Command;
use predicates::prelude::*;
use repotext::test_utils::TestRepo;

fn repotext() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repotext"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    repotext()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repotext"));
}

#[test]
fn test_cli_help_lists_both_forms() {
    repotext()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("REPO_PATH"))
        .stdout(predicate::str::contains("--repo-path"))
        .stdout(predicate::str::contains("--extensions"));
}

#[test]
fn test_cli_invalid_color_value() {
    repotext()
        .args(["--color", "sometimes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sometimes"));
}

#[test]
fn test_cli_completion_notice_on_stderr() {
    let repo = TestRepo::with_git();
    repo.add_file("a.ts", "a");
    repo.add_file("b.md", "b");

    repotext()
        .current_dir(repo.path())
        .args([".", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Processing completed!"))
        .stderr(predicate::str::contains("2 files listed, 1 written"));
}

#[test]
fn test_cli_verbose_logs_written_files() {
    let repo = TestRepo::with_git();
    repo.add_file("src/a.ts", "a");

    repotext()
        .current_dir(repo.path())
        .args([".", "out.txt", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote src/a.ts"));
}

#[test]
fn test_cli_runtime_error_prefix() {
    let repo = TestRepo::new();
    repotext()
        .current_dir(repo.path())
        .args(["--repo-path", "nowhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("repotext: "));
}

#[test]
fn test_cli_repo_flag_with_positional_output() {
    let repo = TestRepo::with_git();
    repo.add_file("a.ts", "a");

    repotext()
        .current_dir(repo.path())
        .args(["--repo-path", ".", "out.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("written to out.txt"));

    assert!(repo.read("out.txt").contains("===== BEGIN a.ts =====\na\n\n"));
    assert!(!repo.path().join("output.txt").exists());
}
