//! Parsing functionality
//!
//! Ignore-file compilation and OXC-based structural analysis of JS/TS sources.

pub mod ast_parser;
pub mod gitignore;
pub mod structure;

pub use ast_parser::{count_lines, source_type_for, AllocatorPool, SourceAnalyzer};
pub use gitignore::GitIgnoreMatcher;
pub use structure::{FileStructure, StructureExtractor};
