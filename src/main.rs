//! Wildpath - Main entrypoint.
//!
//! Loads configuration, initialises logging and runs one of the subcommands. With no
//! subcommand the count-prefixed batch format is read from stdin.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use wildpath_lib::config::{self, ConfigLoader, LogConfig, ReportFormat, WildpathConfig};
use wildpath_lib::error::{report_error, ErrorContext, WildpathError};
use wildpath_lib::{io as batch, PatternMatcher};

/// Command line arguments for wildpath.
#[derive(Parser, Debug)]
#[clap(name = "wildpath", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Match a count-prefixed stream of patterns and queries
    Run {
        /// Input file (stdin when omitted)
        #[clap(value_parser)]
        input: Option<PathBuf>,

        /// Output format
        #[clap(long, value_enum)]
        format: Option<ReportFormat>,

        /// Omit the header from plain output
        #[clap(long)]
        no_header: bool,
    },

    /// Match queries against patterns given on the command line
    Match {
        /// Pattern to register (repeatable)
        #[clap(short, long = "pattern", required = true)]
        patterns: Vec<String>,

        /// Query paths
        #[clap(required = true)]
        queries: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .context("Invalid log filter")?;

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let installed = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.pretty()).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    // Logging needs the configuration; fall back to defaults so a bad file is still reported
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let context = ErrorContext::new(WildpathError::Config(e), "config")
                .with_details(format!("file: {:?}", args.config));
            report_error(&context);
            anyhow::bail!("{context}");
        }
    };

    match args.command.unwrap_or(Command::Run {
        input: None,
        format: None,
        no_header: false,
    }) {
        Command::Run {
            input,
            format,
            no_header,
        } => {
            if let Some(format) = format {
                config.report.format = format;
            }
            if no_header {
                config.report.header = false;
            }
            run_batch(input, &config)
        }
        Command::Match { patterns, queries } => run_match(&patterns, &queries, &config),
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = WildpathConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {parent:?}"))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {output:?}"))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn run_batch(input: Option<PathBuf>, config: &WildpathConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let result = match &input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {path:?}"))?;
            batch::run(BufReader::new(file), writer, config)
        }
        None => batch::run(io::stdin().lock(), writer, config),
    };

    match result {
        Ok(summary) => {
            info!(?summary, "Batch finished");
            Ok(())
        }
        Err(e) => {
            let context = ErrorContext::new(e, "run").with_details(match input {
                Some(path) => format!("input: {path:?}"),
                None => "input: stdin".to_string(),
            });
            report_error(&context);
            anyhow::bail!("{context}")
        }
    }
}

fn run_match(patterns: &[String], queries: &[String], config: &WildpathConfig) -> anyhow::Result<()> {
    let mut matcher = PatternMatcher::with_config(config.index.clone());
    for pattern in patterns {
        matcher
            .register(pattern)
            .with_context(|| format!("Invalid pattern '{pattern}'"))?;
    }

    let workers = config.matching.workers_for(queries.len());
    let outcomes = matcher.match_all(queries, workers);

    let stdout = io::stdout();
    let mut report = batch::ReportWriter::new(BufWriter::new(stdout.lock()), config.report.clone());
    for (query, outcome) in queries.iter().zip(&outcomes) {
        report.write_result(query, outcome)?;
    }
    report.finish()?;
    Ok(())
}
