//! End-to-end scenarios over small project trees

use std::fs;
use std::path::Path;

use archwalker::{render_report, NoVcs, Scanner, Settings};
use tempfile::tempdir;

const SENTINEL: &str = "No JavaScript or TypeScript files found in the project.";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn scan_text(settings: Settings) -> String {
    let report = Scanner::new(settings)
        .with_vcs_provider(Box::new(NoVcs))
        .scan()
        .unwrap();
    render_report(&report)
}

#[test]
fn test_single_class_file_report() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "a.js",
        "import x from './x'; class Dog extends Animal { bark(){} }",
    );
    write(dir.path(), "b/empty.txt", "");

    let root = dir.path().display().to_string();
    let text = scan_text(Settings::for_path(dir.path()));

    let expected = format!(
        "# Project Overview\n\
         - Project Path: {}\n\
         - Programming Languages: JavaScript, TypeScript, JSX, TSX\n\
         \n\
         Project Summary:\n\
         \x20 Total Files: 1\n\
         \x20 Total Lines of Code: 1\n\
         \n\
         ## Module: .\n\
         \x20 - Total Files: 1\n\
         \x20 - Total Lines of Code: 1\n\
         File: a.js (Lines: 1)\n\
         \x20 Imports: ./x\n\
         \x20 Class: Dog\n\
         \x20   Inherits: Animal\n\
         \x20   Methods: bark",
        root
    );
    assert_eq!(text, expected);
    assert!(!text.contains("## Module: b"));
}

#[test]
fn test_node_modules_never_walked() {
    let dir = tempdir().unwrap();
    write(dir.path(), "node_modules/lib/index.js", "export function lib() {}");
    write(dir.path(), "packages/app/node_modules/dep/x.ts", "export const x = 1;");
    write(dir.path(), "src/main.ts", "export function main() {}");
    // Negating node_modules in the ignore file does not bring it back
    write(dir.path(), ".gitignore", "!node_modules/\n!**/node_modules/**\n");

    let text = scan_text(Settings::for_path(dir.path()));
    assert!(text.contains("File: src/main.ts"));
    assert!(!text.contains("node_modules"));
}

#[test]
fn test_negated_ignore_rule_readmits_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".gitignore", "*.log\n!important.log\n");
    write(dir.path(), "important.log", "const keep = 1;");
    write(dir.path(), "debug.log", "const drop = 1;");
    write(dir.path(), "logs/other.log", "const drop = 2;");

    let mut settings = Settings::for_path(dir.path());
    settings.file_extensions = vec!["log".to_string()];
    let text = scan_text(settings);

    assert!(text.contains("File: important.log (Lines: 1)"));
    assert!(!text.contains("debug.log"));
    assert!(!text.contains("other.log"));
}

#[test]
fn test_no_matching_files_gives_sentinel() {
    let dir = tempdir().unwrap();
    write(dir.path(), "README.md", "# hi");
    write(dir.path(), "dist/bundle.js", "var a = 1;");

    assert_eq!(scan_text(Settings::for_path(dir.path())), SENTINEL);
}

#[test]
fn test_empty_directory_gives_sentinel() {
    let dir = tempdir().unwrap();
    assert_eq!(scan_text(Settings::for_path(dir.path())), SENTINEL);
}

#[test]
fn test_invalid_file_only_in_error_list() {
    let dir = tempdir().unwrap();
    for i in 0..9 {
        write(
            dir.path(),
            &format!("src/f{}.ts", i),
            &format!("export function f{}() {{\n  return {};\n}}\n", i, i),
        );
    }
    write(dir.path(), "src/zz_broken.ts", "export function (\n");

    let report = Scanner::new(Settings::for_path(dir.path()))
        .with_vcs_provider(Box::new(NoVcs))
        .scan()
        .unwrap();

    assert_eq!(report.total_files, 9);
    assert_eq!(report.total_lines, 9 * 4);
    assert_eq!(report.modules.len(), 1);
    assert_eq!(report.modules[0].total_files, 9);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "src/zz_broken.ts");

    let text = render_report(&report);
    assert!(!text.contains("zz_broken"));
}

#[test]
fn test_all_files_invalid_gives_sentinel() {
    let dir = tempdir().unwrap();
    write(dir.path(), "bad.js", "class {");

    let report = Scanner::new(Settings::for_path(dir.path()))
        .with_vcs_provider(Box::new(NoVcs))
        .scan()
        .unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(render_report(&report), SENTINEL);
}

#[test]
fn test_anchored_and_directory_rules() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".gitignore", "/generated\ncache/\n# comment\n\n");
    write(dir.path(), "generated/a.js", "");
    write(dir.path(), "src/generated/b.js", "");
    write(dir.path(), "src/cache/c.js", "");
    write(dir.path(), "src/cache.js", "");

    let text = scan_text(Settings::for_path(dir.path()));
    assert!(!text.contains("File: generated/a.js"));
    assert!(text.contains("File: src/generated/b.js"));
    assert!(!text.contains("src/cache/c.js"));
    assert!(text.contains("File: src/cache.js"));
}

#[test]
fn test_jsx_typescript_and_exports() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "ui/Button.tsx",
        "import React from 'react';\n\
         import type { Props } from './types';\n\
         class Button extends React.Component<Props> {\n\
           render() { return <button />; }\n\
         }\n\
         function helper(): void {}\n\
         export class Exported {}\n\
         export function shared(): void {}\n\
         export default Button;\n",
    );

    let text = scan_text(Settings::for_path(dir.path()));
    assert!(text.contains("  Imports: react, ./types"));
    assert!(text.contains("  Class: Button\n    Inherits: None\n    Methods: render"));
    assert!(text.contains("  Function: helper"));
    assert!(!text.contains("Exported"));
    assert!(!text.contains("shared"));
}
