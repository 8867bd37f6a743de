//! Command-line interface components.

use crate::config::{AttachmentPolicy, MsconsConfig, ParseOptions};
use crate::constants::{DEFAULT_FILE_PATTERN, DEFAULT_OUTPUT_DIR_NAME};
use crate::processor::input_root;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mscons_processor")]
#[command(about = "Parse UN/EDIFACT MSCONS interchanges into hierarchically structured JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Interchange file, or directory searched recursively for interchanges
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Output directory for structured JSON documents
    #[arg(short, long, value_name = "DIR")]
    pub output_path: Option<PathBuf>,

    /// Number of interchanges processed in parallel
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Glob pattern for interchange file names inside the input directory
    #[arg(long, default_value = DEFAULT_FILE_PATTERN)]
    pub pattern: String,

    /// Fail an interchange on the first segment without an open parent group
    #[arg(long)]
    pub strict: bool,

    /// Also write extracted quantity records as <file>.records.json
    #[arg(long)]
    pub records: bool,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,

    /// Assume default separators for interchanges without a UNA segment
    #[arg(long = "allow-missing-una")]
    pub allow_missing_una: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the output path, defaulting to `structured/` next to the inputs
    pub fn get_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => input_root(&self.input_path).join(DEFAULT_OUTPUT_DIR_NAME),
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the batch configuration from the flags
    pub fn to_config(&self) -> MsconsConfig {
        let mut config = MsconsConfig::default().with_file_pattern(self.pattern.clone());

        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if self.records {
            config = config.with_records();
        }
        if self.compact {
            config = config.with_compact_json();
        }

        let mut parse = ParseOptions::default();
        if self.strict {
            parse.attachment = AttachmentPolicy::Strict;
        }
        if self.allow_missing_una {
            parse = parse.with_missing_service_advice();
        }

        config.with_parse_options(parse)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mscons_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!("Logging initialized at level: {}", log_level);
}
