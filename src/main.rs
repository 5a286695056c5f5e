//! quakeprep — prepares the earthquake explorer datasets.
//!
//! Entry point: parses the command line, initialises structured logging and
//! runs one batch job. Any fatal error is logged and turns into a non-zero
//! exit status.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::Layer as _;

use quakeprep::core::pipeline::{run_events, PipelineConfig};
use quakeprep::export::reference_json::{normalize_reference_file, run_standard_jobs, ReferenceKind};
use quakeprep::util::constants;
use quakeprep::util::error::Result;

/// Earthquake dataset preparation
#[derive(Parser, Debug)]
#[command(name = "quakeprep", version, about)]
struct Args {
    /// Also write a debug-level log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enrich raw earthquake records with country, sub-continent and continent
    Events {
        /// Raw earthquake CSV
        #[arg(long, default_value = constants::DEFAULT_EVENTS_FILE)]
        events: PathBuf,

        /// Country reference CSV
        #[arg(long, default_value = constants::DEFAULT_COUNTRIES_FILE)]
        countries: PathBuf,

        /// Gazetteer CSV (lat,lon,name,admin1,admin2,cc)
        #[arg(long, default_value = constants::DEFAULT_GAZETTEER_FILE)]
        gazetteer: PathBuf,

        /// Enriched output CSV
        #[arg(short, long, default_value = constants::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Drop events dated before this year
        #[arg(long, default_value_t = constants::DEFAULT_MIN_YEAR)]
        min_year: i32,
    },

    /// Normalize one TopoJSON reference file
    Reference {
        #[arg(long, value_enum)]
        kind: ReferenceKind,

        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Collection under `objects` to rename (inferred when there is only one)
        #[arg(long)]
        source_key: Option<String>,
    },

    /// Normalize the standard reference file set found in a directory
    References {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_file.as_deref());

    tracing::info!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Events {
            events,
            countries,
            gazetteer,
            output,
            min_year,
        } => {
            let config = PipelineConfig {
                events,
                countries,
                gazetteer,
                output,
                min_year,
            };
            let stats = run_events(&config)?;
            if stats.discarded() > 0 {
                tracing::info!(
                    "{} of {} records were left out",
                    stats.discarded(),
                    stats.read
                );
            }
        }
        Command::Reference {
            kind,
            input,
            output,
            source_key,
        } => normalize_reference_file(&input, &output, kind, source_key.as_deref())?,
        Command::References { dir } => {
            let written = run_standard_jobs(&dir)?;
            tracing::info!("Wrote {} reference files", written.len());
        }
    }
    Ok(())
}

/// Rotate the log file if it exceeds the size limit.
fn rotate_log_file(path: &Path) {
    let Ok(meta) = std::fs::metadata(path) else {
        return;
    };
    if meta.len() > constants::MAX_LOG_FILE_SIZE {
        let mut backup = path.as_os_str().to_owned();
        backup.push(".");
        backup.push(constants::ROTATED_LOG_SUFFIX);
        let _ = std::fs::rename(path, backup);
    }
}

/// Initialise the tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_file` is `Some`): always writes at `debug` level,
///   including one line per discarded record.
fn init_logging(log_file: Option<&Path>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(path) = log_file {
        rotate_log_file(path);
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_filter(tracing_subscriber::EnvFilter::new("debug"));

                tracing_subscriber::registry()
                    .with(stderr_layer.with_filter(env_filter))
                    .with(file_layer)
                    .init();
                return;
            }
            Err(e) => eprintln!("Cannot open log file {}: {e}", path.display()),
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
