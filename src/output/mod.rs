//! Output formatting and writing functionality

pub mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_summary_text, render_report, NO_FILES_MESSAGE};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::ProjectReport;

/// Turns a finished scan into the bytes written out
pub trait Formatter {
    fn format(&self, report: &ProjectReport) -> Result<String>;
}

/// The plain-text project report, or the sentinel line when nothing was found
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        Ok(render_report(report))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        formatters::format_report_json(report, self.pretty)
    }
}

/// CSV formatter, one row per analyzed file
#[derive(Debug, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &ProjectReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
