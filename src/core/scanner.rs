//! Scan pipeline
//!
//! Ties the pieces together for one root: ignore file, filter, walk, per-file
//! analysis, aggregation and VCS lookup. The result is a [`ProjectReport`];
//! rendering it is the output module's job.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::aggregator::ModuleAggregator;
use crate::core::cancel::CancelToken;
use crate::core::filter::PathFilter;
use crate::core::parallel::{
    parallel_process_with_progress, sequential_process_with_progress, ProgressUpdate,
};
use crate::core::walker::{DirectoryWalker, WalkedFile};
use crate::error::{handle_error, try_with_recovery, Result, WalkerError};
use crate::models::config::Settings;
use crate::models::file_record::{AnalysisError, FileRecord};
use crate::models::report::{ProjectReport, VcsInfo};
use crate::output::formatters::render_report;
use crate::parsers::ast_parser::SourceAnalyzer;
use crate::parsers::gitignore::GitIgnoreMatcher;
use crate::utils::paths::relative_to;
use crate::vcs::{GitProvider, NoVcs, VcsProvider};

type FileOutcome = Option<std::result::Result<FileRecord, AnalysisError>>;

/// Runs one scan described by [`Settings`]
pub struct Scanner {
    settings: Settings,
    vcs: Box<dyn VcsProvider>,
    cancel: CancelToken,
    analyzer: SourceAnalyzer,
}

impl Scanner {
    /// Scanner using git for VCS info (when enabled) and the settings' timeout
    pub fn new(settings: Settings) -> Self {
        let vcs: Box<dyn VcsProvider> = if settings.include_vcs_info {
            Box::new(GitProvider::new())
        } else {
            Box::new(NoVcs)
        };
        let cancel = match settings.timeout_secs {
            Some(secs) => CancelToken::with_timeout(Duration::from_secs(secs)),
            None => CancelToken::new(),
        };

        Self {
            settings,
            vcs,
            cancel,
            analyzer: SourceAnalyzer::new(),
        }
    }

    pub fn with_vcs_provider(mut self, provider: Box<dyn VcsProvider>) -> Self {
        self.vcs = provider;
        self
    }

    /// Replace the cancellation token. The settings' timeout no longer applies.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scan(&self) -> Result<ProjectReport> {
        self.scan_with_progress(|_| {})
    }

    /// Scan, reporting each analyzed file through `progress_callback`.
    ///
    /// Only root problems and cancellation are `Err`; unreadable files and
    /// syntax errors end up in [`ProjectReport::errors`].
    pub fn scan_with_progress<P>(&self, progress_callback: P) -> Result<ProjectReport>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let root = self.settings.scan_path.as_path();
        let started = Instant::now();
        tracing::info!("scanning {}", root.display());

        verify_root(root)?;
        let filter = Arc::new(self.build_filter(root));
        let walker = DirectoryWalker::new(root, filter).with_max_depth(self.settings.max_depth);

        let mut aggregator = ModuleAggregator::new();
        let mut errors = Vec::new();
        let mut files = Vec::new();

        for item in walker.walk() {
            self.cancel.check()?;
            match item {
                Ok(file) => {
                    aggregator.observe(&file.module());
                    files.push(file);
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    errors.push(AnalysisError::new(error_path(&err, root), err.to_string()));
                }
            }
        }

        tracing::debug!("{} candidate files under {}", files.len(), root.display());

        let analyze = |file: WalkedFile| -> (FileOutcome, String) {
            if self.cancel.is_cancelled() {
                return (None, file.relative);
            }
            let outcome = self.analyzer.analyze_file(&file.path, &file.relative);
            (Some(outcome), file.relative)
        };

        let outcomes = if self.settings.parallel {
            parallel_process_with_progress(files, analyze, &progress_callback)
        } else {
            sequential_process_with_progress(files, analyze, &progress_callback)
        };
        self.cancel.check()?;

        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                Ok(record) => aggregator.record(record),
                Err(err) => errors.push(err),
            }
        }
        let (analyzed, lines) = aggregator.totals();
        tracing::debug!("aggregated {} files ({} lines), {} failures", analyzed, lines, errors.len());

        let vcs = self.describe_vcs(root);
        let report = ProjectReport::new(
            root.display().to_string(),
            aggregator.finish(),
            errors,
            vcs,
        );

        tracing::info!(
            "scanned {} files ({} lines, {} errors) in {:.2?}",
            report.total_files,
            report.total_lines,
            report.errors.len(),
            started.elapsed()
        );
        Ok(report)
    }

    fn build_filter(&self, root: &Path) -> PathFilter {
        let ignore = if self.settings.use_ignore_file {
            GitIgnoreMatcher::load(root, &self.settings.ignore_file)
                .map_err(handle_error)
                .unwrap_or_else(|_| GitIgnoreMatcher::empty())
        } else {
            GitIgnoreMatcher::empty()
        };

        PathFilter::new(
            &self.settings.excluded_directories,
            &self.settings.file_extensions,
            ignore,
        )
    }

    fn describe_vcs(&self, root: &Path) -> Option<VcsInfo> {
        if !self.settings.include_vcs_info {
            return None;
        }
        tracing::debug!("looking up version control details with {}", self.vcs.name());
        try_with_recovery(|| self.vcs.describe(root))
            .ok()
            .flatten()
    }
}

/// Scan with default collaborators and render the text report
pub fn generate_report(settings: &Settings) -> Result<String> {
    let report = Scanner::new(settings.clone()).scan()?;
    Ok(render_report(&report))
}

fn verify_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        _ => {
            return Err(WalkerError::RootNotFound {
                path: root.to_path_buf(),
            })
        }
    }
    fs::read_dir(root).map_err(|source| WalkerError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Root-relative path for a traversal error, falling back to the full path
fn error_path(err: &WalkerError, root: &Path) -> String {
    match err {
        WalkerError::DirectoryTraversal { path, .. } | WalkerError::PermissionDenied { path } => {
            relative_to(path, root).unwrap_or_else(|| path.display().to_string())
        }
        _ => root.display().to_string(),
    }
}
