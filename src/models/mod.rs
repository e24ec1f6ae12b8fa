//! Data models

pub mod config;
pub mod file_record;
pub mod module_summary;
pub mod report;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use file_record::{AnalysisError, ClassRecord, FileRecord};
pub use module_summary::ModuleSummary;
pub use report::{ProjectReport, VcsInfo, LANGUAGES};
