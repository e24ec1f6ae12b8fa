//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// archwalker - architectural overview of JavaScript and TypeScript projects
#[derive(Parser, Debug)]
#[command(name = "archwalker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize the structure of a JavaScript/TypeScript project")]
#[command(long_about = "archwalker walks a project directory, honoring .gitignore and a set of \
excluded directories, parses every JavaScript and TypeScript source it finds, and prints an \
architectural overview: per-directory modules, the files in them with their line counts, imports, \
top-level classes (with base class and methods) and top-level functions.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Describe the current directory
    archwalker

    # Describe a specific project
    archwalker --path ./my-project

    # Skip additional directories (names, matched at any depth)
    archwalker --exclude-dir coverage --exclude-dir generated

    # Also analyze .mjs and .cjs files
    archwalker --extension mjs --extension cjs

Traversal:
    # Only look two levels deep
    archwalker --max-depth 2

    # Ignore .gitignore entirely
    archwalker --no-ignore-file

    # Read ignore rules from another file in the project root
    archwalker --ignore-file .npmignore

Output Options:
    # Save the report to a file
    archwalker --output-file architecture.txt

    # Structured output
    archwalker --output json
    archwalker --output csv --output-file files.csv

    # Leave out the Git branch and last commit
    archwalker --no-vcs

Performance Options:
    # Analyze files one at a time
    archwalker --no-parallel

    # Give up after 60 seconds
    archwalker --timeout 60

Configuration:
    # Use a specific configuration file
    archwalker --config ./archwalker.toml

    # Create .archwalker.toml in the current directory
    archwalker --init

Verbosity:
    # Only the report, no progress or summary
    archwalker --quiet

    # Log every pruned directory and analyzed file
    archwalker --verbose
")]
pub struct Args {
    /// Project root to scan
    #[arg(short, long, value_name = "PATH", help = "Project directory to describe (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Additional directory names to skip
    #[arg(short = 'x', long, value_name = "NAME", help = "Directory name to skip in addition to node_modules, dist, build, .git, venv and __pycache__ (repeatable)")]
    pub exclude_dir: Vec<String>,

    /// Additional file extensions to analyze
    #[arg(short, long, value_name = "EXT", help = "File extension to analyze in addition to .js, .jsx, .ts and .tsx (repeatable, leading dot optional)")]
    pub extension: Vec<String>,

    /// Ignore file name
    #[arg(long, value_name = "NAME", help = "Ignore file read from the project root (defaults to .gitignore)")]
    pub ignore_file: Option<String>,

    /// Disable ignore file handling
    #[arg(long, help = "Do not read any ignore file")]
    pub no_ignore_file: bool,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse (1 = only files directly in the project root)")]
    pub max_depth: Option<usize>,

    /// Leave Git details out of the report
    #[arg(long, help = "Do not look up the Git branch and last commit")]
    pub no_vcs: bool,

    /// Disable parallel processing
    #[arg(long, help = "Analyze files on a single thread")]
    pub no_parallel: bool,

    /// Abort the scan after this many seconds
    #[arg(long, value_name = "SECS", help = "Abandon the scan if it takes longer than this many seconds")]
    pub timeout: Option<u64>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Report format: 'text' for the architectural overview, 'json' for the full structure, 'csv' for one row per file")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Only print the report: no progress, summary or warnings")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Log pruning decisions and per-file results, and list skipped files in the summary")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output in the terminal summary")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar (useful for CI environments)")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .archwalker.toml in the current directory, then the home directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.archwalker.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Architectural overview as plain text
    Text,
    /// Full report as JSON
    Json,
    /// One row per analyzed file
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["archwalker"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.exclude_dir.is_empty());
        assert!(args.output.is_none());
        assert!(!args.init);
    }

    #[test]
    fn test_repeatable_lists() {
        let args =
            Args::try_parse_from(["archwalker", "-x", "a", "-x", "b", "-e", "mjs"]).unwrap();
        assert_eq!(args.exclude_dir, vec!["a", "b"]);
        assert_eq!(args.extension, vec!["mjs"]);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["archwalker", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["archwalker", "--output", "xml"]).is_err());
        let args = Args::try_parse_from(["archwalker", "-o", "json"]).unwrap();
        assert_eq!(args.output, Some(OutputFormat::Json));
    }
}
