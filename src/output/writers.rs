//! Output writing functionality
//!
//! The report goes to exactly one destination: stdout or a file.

use crate::error::{Result, WalkerError};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for the rendered report
pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

/// Writes to stdout, terminating the report with a newline
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content)
            .and_then(|_| handle.flush())
            .map_err(|source| WalkerError::StdoutWrite { source })
    }
}

/// Writes the report byte-for-byte to a file, replacing it
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|source| WalkerError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|source| WalkerError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
