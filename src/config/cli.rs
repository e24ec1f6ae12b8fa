//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Flags as given on the command line, decoupled from clap
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude_dirs: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub ignore_file: Option<String>,
    pub no_ignore_file: bool,
    pub max_depth: Option<usize>,
    pub no_vcs: bool,
    pub no_parallel: bool,
    pub timeout: Option<u64>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

impl CliConfig {
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        CliArgs {
            path: args.path.clone(),
            exclude_dirs: non_empty(&args.exclude_dir),
            extensions: non_empty(&args.extension),
            ignore_file: args.ignore_file.clone(),
            no_ignore_file: args.no_ignore_file,
            max_depth: args.max_depth,
            no_vcs: args.no_vcs,
            no_parallel: args.no_parallel,
            timeout: args.timeout,
            output_format: args.output.map(OutputFormat::from),
            output_file: args.output_file.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            scan_path: args.path.clone(),
            excluded_directories: args.exclude_dirs.clone(),
            file_extensions: args.extensions.clone(),
            ignore_file: args.ignore_file.clone(),
            max_depth: args.max_depth,
            timeout_secs: args.timeout,
            output_format: args.output_format,
            output_file: args.output_file.clone(),
            ..PartialSettings::default()
        };

        // An absent flag leaves lower layers alone
        if args.no_ignore_file {
            settings.use_ignore_file = Some(false);
        }
        if args.no_vcs {
            settings.include_vcs_info = Some(false);
        }
        if args.no_parallel {
            settings.parallel = Some(false);
        }
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }
        if args.no_colors {
            settings.use_colors = Some(false);
        }
        if args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
