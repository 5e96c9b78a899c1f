//! Integration tests for repo4llm


use std::fs;

use assert_cmd::Command;
use harness::{TestRepo, filetree_lines, run_repo4llm};
use predicates::prelude::*;

/// README.md, main.py, utils/helper.py, utils/config.json under `proj/`.
fn sample_project() -> TestRepo {
    let repo = TestRepo::new();
    repo.add_file("proj/README.md", "Sample project\n");
    repo.add_file("proj/main.py", "print('hi')\n");
    repo.add_file("proj/utils/helper.py", "def help(): pass\n");
    repo.add_file("proj/utils/config.json", "{}\n");
    repo
}

fn indent_depth(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 2
}

#[test]
fn test_include_filters_files_keeps_dirs() {
    let repo = sample_project();
    let (stdout, _stderr, success) =
        run_repo4llm(repo.path(), &["proj", "-i", "*.py", "-i", "*.md"]);
    assert!(success, "repo4llm should succeed");
    assert_eq!(
        filetree_lines(&stdout),
        ["proj/", "  README.md", "  main.py", "  utils/", "    helper.py"]
    );
    assert!(!stdout.contains("config.json"), "{}", stdout);
}

#[test]
fn test_max_depth_zero_lists_root_entries_only() {
    let repo = sample_project();
    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "-d", "0"]);
    assert!(success);
    assert_eq!(
        filetree_lines(&stdout),
        ["proj/", "  README.md", "  main.py", "  utils/"]
    );
    assert!(!stdout.contains("helper.py"));
    assert!(!stdout.contains("config.json"));
}

#[test]
fn test_hidden_file_never_shown() {
    let repo = TestRepo::new();
    repo.add_file("proj/.env", "SECRET=1\n");
    repo.add_file("proj/app.py", "\n");

    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "-i", ".*", "-i", "*"]);
    assert!(success);
    assert_eq!(filetree_lines(&stdout), ["proj/", "  app.py"]);
}

#[test]
fn test_exclude_extension() {
    let repo = TestRepo::new();
    repo.add_file("proj/a.py", "\n");
    repo.add_file("proj/a.pyc", "\n");

    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "-e", "*.pyc"]);
    assert!(success);
    assert_eq!(filetree_lines(&stdout), ["proj/", "  a.py"]);
}

#[test]
fn test_extension_shorthand_on_cli() {
    let repo = sample_project();
    let (stdout, _stderr, success) =
        run_repo4llm(repo.path(), &["proj", "--plain", "-i", ".py", "-e", ".json"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n  main.py\n  utils/\n    helper.py\n");
}

#[test]
fn test_depth_bound_on_indentation() {
    let repo = TestRepo::new();
    repo.add_file("proj/l0.txt", "");
    repo.add_file("proj/a/l1.txt", "");
    repo.add_file("proj/a/b/l2.txt", "");
    repo.add_file("proj/a/b/c/l3.txt", "");
    repo.add_file("proj/a/b/c/d/l4.txt", "");

    for depth in 0..4usize {
        let d = depth.to_string();
        let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "--plain", "-d", d.as_str()]);
        assert!(success);
        let max_indent = stdout.lines().map(indent_depth).max().unwrap();
        assert_eq!(max_indent, depth + 1, "depth {}: {}", depth, stdout);
    }
}

#[test]
fn test_output_is_repeatable() {
    let repo = sample_project();
    let (first, _, ok1) = run_repo4llm(repo.path(), &["proj"]);
    let (second, _, ok2) = run_repo4llm(repo.path(), &["proj"]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn test_siblings_sorted_by_name() {
    let repo = TestRepo::new();
    for name in ["zeta.rs", "Alpha.rs", "mid/x.rs", "beta.rs", "Zdir/y.rs"] {
        repo.add_file(&format!("proj/{}", name), "");
    }
    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "--plain", "-d", "0"]);
    assert!(success);

    let siblings: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.trim().trim_end_matches('/'))
        .collect();
    assert_eq!(siblings, ["Alpha.rs", "Zdir", "beta.rs", "mid", "zeta.rs"]);
    assert!(siblings.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_context_header_and_footer() {
    let repo = TestRepo::new();
    repo.add_file("proj/README.md", "# Rocket Engine\n");
    repo.add_file("proj/main.py", "");

    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "-i", ".py", "-i", "*.md"]);
    assert!(success);
    assert!(stdout.starts_with("Project: Rocket Engine\n\n<filetree>\n"), "{}", stdout);
    assert!(
        stdout.ends_with("</filetree>\n\n---\nIncluded files:\n\n`.py`\n`*.md`\n"),
        "{}",
        stdout
    );
}

#[test]
fn test_project_title_from_git_remote() {
    let repo = TestRepo::with_remote("git@github.com:someone/launchpad.git");
    repo.add_file("main.rs", "");

    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &[]);
    assert!(success);
    assert!(stdout.starts_with("Project: launchpad\n"), "{}", stdout);
    // .git is hidden
    assert!(!stdout.contains(".git"), "{}", stdout);
}

#[test]
fn test_output_file() {
    let repo = sample_project();
    let out = repo.path().join("tree.txt");

    let (stdout, _stderr, success) =
        run_repo4llm(repo.path(), &["proj", "-o", out.to_str().unwrap(), "--color", "always"]);
    assert!(success);
    assert!(stdout.is_empty(), "nothing on stdout: {}", stdout);

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("<filetree>\nproj/\n"));
    assert!(!written.contains('\x1b'), "file output is never colored");
}

#[test]
fn test_json_output() {
    let repo = sample_project();
    let (stdout, _stderr, success) = run_repo4llm(repo.path(), &["proj", "--json", "-d", "0"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["name"], "proj");
    assert_eq!(value["type"], "dir");
    let children = value["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[2]["name"], "utils");
    assert_eq!(children[2]["state"], "truncated");
}

#[test]
fn test_color_always_on_stdout() {
    let repo = sample_project();
    Command::cargo_bin("repo4llm")
        .unwrap()
        .current_dir(repo.path())
        .args(["proj", "--plain", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("main.py"));
}

#[test]
fn test_missing_directory_fails() {
    let repo = TestRepo::new();
    Command::cargo_bin("repo4llm")
        .unwrap()
        .current_dir(repo.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn test_file_root_fails() {
    let repo = TestRepo::new();
    repo.add_file("main.py", "");
    Command::cargo_bin("repo4llm")
        .unwrap()
        .current_dir(repo.path())
        .arg("main.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_invalid_pattern_fails_before_output() {
    let repo = sample_project();
    Command::cargo_bin("repo4llm")
        .unwrap()
        .current_dir(repo.path())
        .args(["proj", "-i", "[abc"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid pattern '[abc'"));
}

#[test]
fn test_plain_conflicts_with_json() {
    let repo = sample_project();
    Command::cargo_bin("repo4llm")
        .unwrap()
        .current_dir(repo.path())
        .args(["proj", "--plain", "--json"])
        .assert()
        .failure();
}
