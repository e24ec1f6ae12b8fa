//! Tests that drive the compiled binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use archwalker::{render_report, NoVcs, Scanner, Settings};
use tempfile::tempdir;

fn archwalker(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_archwalker"))
        .current_dir(cwd)
        .args(args)
        .output()
        .unwrap()
}

fn create_project(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("src/shapes.ts"),
        "import { area } from './math';\nclass Square extends Shape {\n  area() {}\n}\n",
    )
    .unwrap();
    fs::write(root.join("main.js"), "function main() {}\nmain();\n").unwrap();
}

#[test]
fn test_report_on_stdout() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    let root = dir.path().display().to_string();

    let output = archwalker(
        dir.path(),
        &["--path", &root, "--no-vcs", "--no-progress", "--quiet"],
    );
    assert!(output.status.success());

    let expected = render_report(
        &Scanner::new(Settings::for_path(dir.path()))
            .with_vcs_provider(Box::new(NoVcs))
            .scan()
            .unwrap(),
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{}\n", expected));
}

#[test]
fn test_missing_root_is_critical() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope").display().to_string();

    let output = archwalker(dir.path(), &["--path", &missing, "--quiet"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_config_is_critical() {
    let dir = tempdir().unwrap();
    let output = archwalker(dir.path(), &["--config", "absent.toml", "--quiet"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    let root = dir.path().display().to_string();

    let output = archwalker(
        dir.path(),
        &["--path", &root, "--no-vcs", "--quiet", "--output", "json"],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_files"], 2);
    assert_eq!(parsed["modules"][0]["path"], ".");
    assert_eq!(parsed["modules"][1]["files"][0]["classes"][0]["name"], "Square");
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    let root = dir.path().display().to_string();
    let target = dir.path().join("report.txt");

    let output = archwalker(
        dir.path(),
        &[
            "--path",
            &root,
            "--no-vcs",
            "--quiet",
            "--output-file",
            &target.display().to_string(),
        ],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("# Project Overview\n"));
    assert!(written.contains("File: src/shapes.ts (Lines: 5)"));
    assert!(written.contains("    Inherits: Shape"));
    assert!(written.contains("File: main.js (Lines: 3)"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempdir().unwrap();

    let first = archwalker(dir.path(), &["--init"]);
    assert!(first.status.success());
    let written = fs::read_to_string(dir.path().join(".archwalker.toml")).unwrap();

    let second = archwalker(dir.path(), &["--init"]);
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("already exists"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".archwalker.toml")).unwrap(),
        written
    );
}
