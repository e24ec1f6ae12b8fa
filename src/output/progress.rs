//! Progress reporting functionality
//!
//! Bars draw on stderr so they never interleave with a report on stdout.

use crate::core::parallel::ProgressUpdate;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Progress display for a scan
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    multi_progress: Arc<MultiProgress>,
    main_progress_bar: Option<ProgressBar>,
    message_bar: Option<ProgressBar>,
    current_operation: Mutex<String>,
}

impl ProgressReporter {
    /// Reporter that draws nothing when `quiet` is set
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let multi_progress = Arc::new(MultiProgress::with_draw_target(
            ProgressDrawTarget::stderr(),
        ));

        let (main_progress_bar, message_bar) = if quiet {
            (None, None)
        } else {
            let main_bar = multi_progress.add(ProgressBar::new(0));
            main_bar.set_style(
                ProgressStyle::default_bar()
                    .template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );

            let msg_bar = multi_progress.add(ProgressBar::new(1));
            msg_bar.set_style(
                ProgressStyle::default_bar()
                    .template("{wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            (Some(main_bar), Some(msg_bar))
        };

        Self {
            quiet,
            verbose,
            multi_progress,
            main_progress_bar,
            message_bar,
            current_operation: Mutex::new(String::new()),
        }
    }

    /// Reporter that never draws
    pub fn hidden() -> Self {
        Self::new(true, false)
    }

    pub fn start(&self, operation: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.reset();
            bar.set_position(0);
            bar.enable_steady_tick(Duration::from_millis(100));
        }
        if let Some(msg_bar) = &self.message_bar {
            msg_bar.set_message(operation.to_string());
        }

        *self.current_operation.lock() = operation.to_string();

        if self.verbose {
            tracing::info!("starting: {}", operation);
        }
    }

    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        }
        if *self.current_operation.lock() != message {
            if let Some(msg_bar) = &self.message_bar {
                msg_bar.set_message(message.to_string());
            }
        }

        if self.verbose {
            tracing::debug!("[{}/{}] {}", current, total, message);
        }
    }

    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Clear the bars, leaving the terminal clean for the summary
    pub fn finish(&self) {
        if let Some(bar) = &self.main_progress_bar {
            bar.finish_and_clear();
        }
        if let Some(msg_bar) = &self.message_bar {
            msg_bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Position of the main bar, `None` when hidden
    pub fn position(&self) -> Option<u64> {
        self.main_progress_bar.as_ref().map(|bar| bar.position())
    }
}

/// Callback feeding scanner updates into a shared reporter
pub fn create_progress_callback(
    reporter: Arc<ProgressReporter>,
) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
