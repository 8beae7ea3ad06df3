//! Integration tests for tree


use assert_cmd::Command;
use harness::{TestTree, run_tree, tree_lines};
use predicates::prelude::*;

fn scenario() -> TestTree {
    let tree = TestTree::new();
    tree.add_dir("a");
    tree.add_file("b.txt", "");
    tree.add_file(".hidden", "");
    tree
}

#[test]
fn test_default_output() {
    let tree = scenario();
    let (stdout, _stderr, success) = run_tree(tree.path(), &[]);
    assert!(success, "tree should succeed");
    assert_eq!(stdout, ".\n├── a\n└── b.txt\n\n1 directories, 1 files\n");
}

#[test]
fn test_show_hidden_flag() {
    let tree = scenario();
    let (stdout, _stderr, success) = run_tree(tree.path(), &["-a"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![".", "├── .hidden", "├── a", "└── b.txt"]
    );
    assert!(stdout.ends_with("\n1 directories, 2 files\n"), "{}", stdout);
}

#[test]
fn test_dirs_only() {
    let tree = TestTree::new();
    tree.add_file("file.txt", "");
    tree.add_file("subdir/nested.txt", "");
    tree.add_dir("subdir/inner");

    let (stdout, _stderr, success) = run_tree(tree.path(), &["-d"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec![".", "└── subdir", "    └── inner"]);
    assert!(stdout.ends_with("2 directories, 0 files\n"));
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "");
    tree.add_file("level1/mid.txt", "");
    tree.add_file("level1/level2/deep.txt", "");

    let (stdout, _stderr, success) = run_tree(tree.path(), &["-L", "1"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec![".", "├── level1", "└── top.txt"]);
    assert!(!stdout.contains("deep.txt"));
    assert!(stdout.ends_with("1 directories, 1 files\n"));
}

#[test]
fn test_depth_limit_two() {
    let tree = TestTree::new();
    tree.add_file("level1/mid.txt", "");
    tree.add_file("level1/level2/deep.txt", "");

    let (stdout, _stderr, success) = run_tree(tree.path(), &["-L", "2"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![".", "└── level1", "    ├── level2", "    └── mid.txt"]
    );
}

#[test]
fn test_invalid_level_rejected_without_traversal() {
    let tree = scenario();
    for level in ["0", "-1", "abc"] {
        Command::cargo_bin("tree")
            .unwrap()
            .current_dir(tree.path())
            .args(["-L", level])
            .assert()
            .success()
            .stdout("tree: invalid level, must be greater than 0.\n");
    }
}

#[test]
fn test_named_roots() {
    let tree = TestTree::new();
    tree.add_file("one/a.txt", "");
    tree.add_file("two/b.txt", "");

    let (stdout, _stderr, success) = run_tree(tree.path(), &["one", "two"]);
    assert!(success);
    assert_eq!(
        stdout,
        "one\n└── a.txt\ntwo\n└── b.txt\n\n0 directories, 2 files\n"
    );
}

#[test]
fn test_missing_root_reported_and_skipped() {
    let tree = TestTree::new();
    tree.add_file("real/file.txt", "");
    tree.add_file("plain.txt", "");

    let (stdout, _stderr, success) = run_tree(tree.path(), &["missing", "plain.txt", "real"]);
    assert!(success);
    assert_eq!(
        stdout,
        "missing [error opening dir]\nplain.txt [error opening dir]\nreal\n└── file.txt\n\n0 directories, 1 files\n"
    );
}

#[test]
fn test_ignore_pattern() {
    let tree = TestTree::new();
    tree.add_file("keep.rs", "");
    tree.add_file("drop.log", "");
    tree.add_file("logs/other.log", "");

    Command::cargo_bin("tree")
        .unwrap()
        .current_dir(tree.path())
        .env("NO_COLOR", "1")
        .args(["-I", "*.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("drop.log").not())
        .stdout(predicate::str::contains("other.log").not())
        .stdout(predicate::str::ends_with("1 directories, 1 files\n"));
}

#[test]
fn test_json_output() {
    let tree = scenario();
    let (stdout, _stderr, success) = run_tree(tree.path(), &["-J"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(
        value,
        serde_json::json!([
            {"type": "directory", "name": ".", "contents": [
                {"type": "directory", "name": "a", "contents": []},
                {"type": "file", "name": "b.txt"}
            ]},
            {"type": "report", "directories": 1, "files": 1}
        ])
    );
}

#[test]
fn test_color_always_emits_escapes() {
    let tree = scenario();
    Command::cargo_bin("tree")
        .unwrap()
        .current_dir(tree.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_nested_directories() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "");
    tree.add_file("src/lib.rs", "");
    tree.add_file("src/foo/mod.rs", "");
    tree.add_file("README", "");

    let (stdout, _stderr, success) = run_tree(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            ".",
            "├── README",
            "└── src",
            "    ├── foo",
            "    │   └── mod.rs",
            "    ├── lib.rs",
            "    └── main.rs",
        ]
    );
}
