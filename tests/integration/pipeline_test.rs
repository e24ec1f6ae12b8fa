//! Properties of the scan pipeline and its outputs

use std::fs;
use std::path::Path;
use std::sync::Arc;

use archwalker::config::{load_config_with_env_prefix, CliArgs};
use archwalker::output::{create_formatter, Formatter};
use archwalker::{
    render_report, DirectoryWalker, GitIgnoreMatcher, NoVcs, OutputFormat, PathFilter, Scanner,
    Settings,
};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A tree with nesting, excluded and ignored directories, and mixed extensions
fn create_project(root: &Path) {
    write(root, ".gitignore", "coverage/\n*.gen.ts\n");
    write(root, "index.js", "import app from './src/app';\napp();\n");
    write(root, "src/app.ts", "export default function app() {}\n");
    write(root, "src/models/User.ts", "class User extends Base {\n  save() {}\n}\n");
    write(root, "src/models/types.gen.ts", "export type T = 1;\n");
    write(root, "src/views/Home.jsx", "export function Home() { return <main />; }\n");
    write(root, "src/views/style.css", "main {}\n");
    write(root, "src/build/out.js", "var x;\n");
    write(root, "coverage/report.js", "var y;\n");
    write(root, "venv/lib/site.js", "var z;\n");
    write(root, "LIB/UPPER.TS", "export const u = 1;\n");
}

fn scanner(settings: Settings) -> Scanner {
    Scanner::new(settings).with_vcs_provider(Box::new(NoVcs))
}

#[test]
fn test_walked_paths_avoid_excluded_and_ignored_directories() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let ignore = GitIgnoreMatcher::load(dir.path(), ".gitignore").unwrap();
    let filter = Arc::new(PathFilter::new(Vec::<String>::new(), Vec::<String>::new(), ignore));
    let walker = DirectoryWalker::new(dir.path(), Arc::clone(&filter));

    let relative: Vec<String> = walker.walk().map(|item| item.unwrap().relative).collect();

    for path in &relative {
        assert!(!filter.is_excluded_dir(path), "{} is in an excluded directory", path);
        assert!(!path.starts_with("coverage/"), "{} is ignored", path);
        let extension = path.rsplit('.').next().unwrap().to_lowercase();
        assert!(
            filter.extensions().contains(&format!(".{}", extension)),
            "{} has an unexpected extension",
            path
        );
    }
    assert!(!relative.iter().any(|p| p.ends_with(".gen.ts")));
    assert!(relative.contains(&"LIB/UPPER.TS".to_string()));
}

#[test]
fn test_report_is_deterministic() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let first = render_report(&scanner(Settings::for_path(dir.path())).scan().unwrap());
    let second = render_report(&scanner(Settings::for_path(dir.path())).scan().unwrap());
    assert_eq!(first, second);

    let mut sequential = Settings::for_path(dir.path());
    sequential.parallel = false;
    let third = render_report(&scanner(sequential).scan().unwrap());
    assert_eq!(first, third);
}

#[test]
fn test_totals_match_records() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    write(dir.path(), "src/broken.js", "function (");

    let report = scanner(Settings::for_path(dir.path())).scan().unwrap();

    let records: Vec<_> = report.modules.iter().flat_map(|m| m.files.iter()).collect();
    assert_eq!(report.total_files, records.len());
    assert_eq!(
        report.total_lines,
        records.iter().map(|r| r.line_count).sum::<usize>()
    );
    for module in &report.modules {
        assert_eq!(module.total_files, module.files.len());
        assert_eq!(
            module.total_lines,
            module.files.iter().map(|r| r.line_count).sum::<usize>()
        );
    }
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn test_modules_in_traversal_order() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let report = scanner(Settings::for_path(dir.path())).scan().unwrap();
    let keys: Vec<&str> = report.modules.iter().map(|m| m.path.as_str()).collect();

    // Pre-order walk, entries sorted by byte-wise file name
    assert_eq!(keys, vec!["LIB", ".", "src", "src/models", "src/views"]);
}

#[test]
fn test_max_depth_limits_descent() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let mut settings = Settings::for_path(dir.path());
    settings.max_depth = Some(1);
    let report = scanner(settings).scan().unwrap();

    let keys: Vec<&str> = report.modules.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(keys, vec!["."]);
}

#[test]
fn test_extra_excluded_directories_and_extensions() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    write(dir.path(), "src/legacy.mjs", "function old() {}\n");

    let mut settings = Settings::for_path(dir.path());
    settings.excluded_directories = vec!["views".to_string()];
    settings.file_extensions = vec!["MJS".to_string()];
    let text = render_report(&scanner(settings).scan().unwrap());

    assert!(!text.contains("src/views"));
    assert!(text.contains("File: src/legacy.mjs (Lines: 2)"));
    assert!(text.contains("  Function: old"));
}

#[test]
fn test_json_and_csv_outputs() {
    let dir = tempdir().unwrap();
    create_project(dir.path());
    let report = scanner(Settings::for_path(dir.path())).scan().unwrap();

    let json = create_formatter(OutputFormat::Json).format(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["total_files"], report.total_files);
    assert_eq!(
        parsed["modules"].as_array().unwrap().len(),
        report.modules.len()
    );

    let csv = create_formatter(OutputFormat::Csv).format(&report).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), report.total_files + 1);
    assert!(rows.contains(&"src/models,src/models/User.ts,4,,User(Base),"));
}

#[test]
fn test_settings_from_config_file_drive_the_scan() {
    let dir = tempdir().unwrap();
    create_project(dir.path());

    let config_path = dir.path().join("archwalker.toml");
    fs::write(
        &config_path,
        format!(
            "scan_path = {:?}\nexcluded_directories = [\"models\"]\nuse_ignore_file = false\ninclude_vcs_info = false\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let settings = load_config_with_env_prefix(
        CliArgs {
            config: Some(config_path),
            ..Default::default()
        },
        "AWTEST_PIPELINE",
    )
    .unwrap();

    let report = Scanner::new(settings).scan().unwrap();
    let text = render_report(&report);

    assert!(report.vcs.is_none());
    assert!(!text.contains("src/models"));
    // Ignore file disabled: coverage/ is back
    assert!(text.contains("File: coverage/report.js"));
}
