//! Output formatting functionality
//!
//! The text report layout is fixed: consumers diff it and grep it, so every
//! line here is part of the contract. JSON and CSV are the structured views.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

use crate::error::{Result, WalkerError};
use crate::models::file_record::{ClassRecord, FileRecord};
use crate::models::module_summary::ModuleSummary;
use crate::models::report::{ProjectReport, VcsInfo};

/// Entire report when no file was analyzed successfully
pub const NO_FILES_MESSAGE: &str = "No JavaScript or TypeScript files found in the project.";

/// Render the text report. Lines are joined with `\n`; no trailing newline.
pub fn render_report(report: &ProjectReport) -> String {
    if report.is_empty() {
        return NO_FILES_MESSAGE.to_string();
    }

    let mut lines = Vec::new();
    lines.push("# Project Overview".to_string());
    lines.push(format!("- Project Path: {}", report.project_path));
    lines.push(format!(
        "- Programming Languages: {}",
        report.languages.join(", ")
    ));
    if let Some(vcs) = &report.vcs {
        lines.push(format_vcs_line(vcs));
    }
    lines.push(String::new());
    lines.push("Project Summary:".to_string());
    lines.push(format!("  Total Files: {}", report.total_files));
    lines.push(format!("  Total Lines of Code: {}", report.total_lines));
    lines.push(String::new());

    for module in &report.modules {
        push_module(&mut lines, module);
    }

    lines.join("\n")
}

fn format_vcs_line(vcs: &VcsInfo) -> String {
    format!(
        "- Git Info: Branch: {}, Last Commit: \"{}\", Author: {}",
        vcs.branch, vcs.last_commit_message, vcs.author_name
    )
}

fn push_module(lines: &mut Vec<String>, module: &ModuleSummary) {
    lines.push(format!("## Module: {}", module.path));
    lines.push(format!("  - Total Files: {}", module.total_files));
    lines.push(format!("  - Total Lines of Code: {}", module.total_lines));
    for file in &module.files {
        push_file(lines, file);
    }
}

fn push_file(lines: &mut Vec<String>, file: &FileRecord) {
    lines.push(format!("File: {} (Lines: {})", file.path, file.line_count));
    lines.push(format!("  Imports: {}", join_or_none(&file.imports)));
    for class in &file.classes {
        push_class(lines, class);
    }
    for function in &file.functions {
        lines.push(format!("  Function: {}", function));
    }
}

fn push_class(lines: &mut Vec<String>, class: &ClassRecord) {
    lines.push(format!("  Class: {}", class.name));
    lines.push(format!("    Inherits: {}", join_or_none(&class.bases)));
    lines.push(format!("    Methods: {}", class.methods.join(", ")));
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Short terminal summary written to stderr after a scan
pub fn format_summary_text(report: &ProjectReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let headline = format!(
        "Analyzed {} files ({} lines) in {} modules",
        report.total_files,
        report.total_lines,
        report.modules.len()
    );
    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint(headline)));
    } else {
        output.push_str(&format!("{}\n", headline));
    }

    if let Some(vcs) = &report.vcs {
        let branch = if use_colors {
            Green.paint(vcs.branch.as_str()).to_string()
        } else {
            vcs.branch.clone()
        };
        output.push_str(&format!("Branch: {}\n", branch));
    }

    if report.errors.is_empty() {
        return output;
    }

    let count = format!("Files skipped: {}", report.errors.len());
    if use_colors {
        output.push_str(&format!("{}\n", Yellow.bold().paint(count)));
    } else {
        output.push_str(&format!("{}\n", count));
    }

    if verbose {
        for error in &report.errors {
            let path = if use_colors {
                Style::new().dimmed().paint(error.path.as_str()).to_string()
            } else {
                error.path.clone()
            };
            let tag = if use_colors {
                Red.paint("SKIPPED").to_string()
            } else {
                "SKIPPED".to_string()
            };
            output.push_str(&format!("  [{}] {}: {}\n", tag, path, error.reason));
        }
    }

    output
}

/// Pretty or compact JSON of the whole report
pub fn format_report_json(report: &ProjectReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// One CSV row per analyzed file. List cells are `;`-separated.
pub fn format_report_csv(report: &ProjectReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["module", "path", "lines", "imports", "classes", "functions"])?;

    for module in &report.modules {
        for file in &module.files {
            let classes: Vec<String> = file
                .classes
                .iter()
                .map(|class| match class.bases.first() {
                    Some(base) => format!("{}({})", class.name, base),
                    None => class.name.clone(),
                })
                .collect();

            writer.write_record(&[
                module.path.clone(),
                file.path.clone(),
                file.line_count.to_string(),
                file.imports.join(";"),
                classes.join(";"),
                file.functions.join(";"),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| WalkerError::io_error(err.into_error()))?;
    String::from_utf8(bytes).map_err(|source| WalkerError::CsvSerialize { source })
}
