//! Command implementations

use std::path::PathBuf;
use std::sync::Arc;

use super::Args;
use crate::config::{self, CliArgs, FileConfig, DEFAULT_CONFIG_FILE};
use crate::core::Scanner;
use crate::error::{ErrorSeverity, Result, WalkerError};
use crate::models::config::Settings;
use crate::output::{
    create_formatter, create_progress_callback, create_writer, format_summary_text,
    ProgressReporter,
};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Describe the project selected by the arguments
    Analyze(Args),
    /// Write a default configuration file
    Init,
}

impl Command {
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Analyze(args)
    }

    pub fn execute(&self) -> Result<()> {
        self.validate()?;
        match self {
            Command::Analyze(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                analyze(&settings)
            }
            Command::Init => init(),
        }
    }

    /// Cheap checks made before any configuration is loaded
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                if let Some(config_path) = &args.config {
                    if !config_path.is_file() {
                        return Err(WalkerError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }
                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Execute and map the outcome to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(&err)
            }
        }
    }
}

/// 0 for warnings, 1 for errors, 2 for critical errors
pub fn exit_code(err: &WalkerError) -> i32 {
    match err.severity() {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

fn analyze(settings: &Settings) -> Result<()> {
    if settings.verbose {
        eprintln!(
            "archwalker v{} - scanning {} ({} output)",
            env!("CARGO_PKG_VERSION"),
            settings.scan_path.display(),
            settings.output_format
        );
        eprintln!("Settings: {:#?}", settings);
    }

    let show_bar = !settings.quiet && settings.show_progress;
    let reporter = Arc::new(ProgressReporter::new(!show_bar, settings.verbose));
    reporter.start(&format!("Scanning {}", settings.scan_path.display()));

    let scanner = Scanner::new(settings.clone());
    let outcome = scanner.scan_with_progress(create_progress_callback(Arc::clone(&reporter)));
    reporter.finish();
    let report = outcome?;

    let content = create_formatter(settings.output_format).format(&report)?;
    create_writer(settings.output_file.as_ref()).write(&content)?;

    if !settings.quiet {
        eprint!(
            "{}",
            format_summary_text(&report, settings.use_colors, settings.verbose)
        );
        if let Some(path) = &settings.output_file {
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}

fn init() -> Result<()> {
    let file_config = FileConfig::with_path(PathBuf::from(DEFAULT_CONFIG_FILE));

    if file_config.path().exists() {
        println!(
            "Configuration file already exists at: {}",
            file_config.path().display()
        );
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    file_config.create_default()?;

    println!(
        "Created default configuration file at: {}",
        file_config.path().display()
    );
    println!("\nEvery setting in it is commented out. Uncomment a line to change it:");
    println!("  - excluded_directories: extra directory names to skip");
    println!("  - file_extensions: extra extensions to analyze");
    println!("  - max_depth: maximum directory depth to traverse");
    println!("  - output_format: text, json or csv");
    println!("  - include_vcs_info: whether to add Git details to the header");

    Ok(())
}
