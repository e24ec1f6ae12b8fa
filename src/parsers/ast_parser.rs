//! Source file analysis using OXC
//!
//! [`SourceAnalyzer`] turns one file into a [`FileRecord`] or an
//! [`AnalysisError`]. Nothing escapes this boundary as a panic or `Err` of the
//! crate error type: read and parse failures become data.

use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;

use crate::error::WalkerError;
use crate::models::file_record::{AnalysisError, FileRecord};
use crate::parsers::structure::StructureExtractor;

/// Message of the first parser diagnostic
fn first_diagnostic(errors: &[OxcDiagnostic]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "parser aborted".to_string())
}

/// Allocator pool shared by the analysis threads.
///
/// `Allocator` is `Send` but not `Sync`, so the pool hands out owned
/// allocators under a mutex rather than sharing references.
pub struct AllocatorPool {
    allocators: Mutex<Vec<Allocator>>,
}

impl AllocatorPool {
    /// Create a pool pre-filled with `size` allocators
    pub fn new(size: usize) -> Self {
        let allocators = (0..size).map(|_| Allocator::default()).collect();
        Self {
            allocators: Mutex::new(allocators),
        }
    }

    /// Take an allocator from the pool, or make a new one when it is drained
    pub fn take(&self) -> Allocator {
        self.allocators.lock().pop().unwrap_or_default()
    }

    /// Reset an allocator and put it back
    pub fn give_back(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }
}

/// Number of lines as produced by splitting on CRLF, CR or LF.
///
/// A trailing unterminated segment counts, so does the empty segment after a
/// final newline; the empty file is one line.
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut lines = 1;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'\n' => lines += 1,
            _ => {}
        }
        i += 1;
    }
    lines
}

/// Parser dialect for a file, chosen by extension.
///
/// Plain JavaScript extensions get JSX enabled; extensions OXC does not know
/// parse as TSX, the most permissive dialect. Everything parses as a module.
pub fn source_type_for(path: &Path) -> SourceType {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let source_type = match extension.as_deref().map(SourceType::from_extension) {
        Some(Ok(source_type)) if source_type.is_javascript() => source_type.with_jsx(true),
        Some(Ok(source_type)) => source_type,
        _ => SourceType::tsx(),
    };
    source_type.with_module(true)
}

/// One-file analyzer; cheap to share across threads by reference
pub struct SourceAnalyzer {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl SourceAnalyzer {
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                ..ParseOptions::default()
            },
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    /// Read `path` from disk and analyze it under the name `relative`
    pub fn analyze_file(&self, path: &Path, relative: &str) -> Result<FileRecord, AnalysisError> {
        let source_text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                let err = WalkerError::FileRead {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::warn!("{}", err);
                return Err(AnalysisError::new(relative, err.to_string()));
            }
        };

        self.analyze_source(relative, &source_text)
    }

    /// Analyze already-loaded text. The dialect comes from `relative`'s extension.
    pub fn analyze_source(&self, relative: &str, source_text: &str) -> Result<FileRecord, AnalysisError> {
        let source_type = source_type_for(Path::new(relative));
        let allocator = self.allocator_pool.take();

        let outcome = {
            let ret = Parser::new(&allocator, source_text, source_type)
                .with_options(self.parse_options)
                .parse();

            if ret.panicked || !ret.errors.is_empty() {
                Err(first_diagnostic(&ret.errors))
            } else {
                Ok(StructureExtractor::extract(&ret.program))
            }
        };

        self.allocator_pool.give_back(allocator);

        match outcome {
            Ok(structure) => {
                tracing::debug!(
                    "analyzed {}: {} imports, {} classes, {} functions",
                    relative,
                    structure.imports.len(),
                    structure.classes.len(),
                    structure.functions.len()
                );
                Ok(FileRecord {
                    path: relative.to_string(),
                    line_count: count_lines(source_text),
                    imports: structure.imports,
                    classes: structure.classes,
                    functions: structure.functions,
                })
            }
            Err(message) => {
                let err = WalkerError::parse_error(relative, message);
                tracing::warn!("{}", err);
                Err(AnalysisError::new(relative, err.to_string()))
            }
        }
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
