// LogTriage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Running the triage pipeline and mapping failures to an exit status

use logtriage::app::pipeline::{self, TriageRequest};
use logtriage::platform::config::{load_config, PlatformPaths};
use logtriage::util;
use logtriage::util::color_mode::ColorMode;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogTriage - per-level counts and level-filtered detail lines for a log file.
///
/// Each line of FILE must look like `<date> <time> <LEVEL> <message...>`.
#[derive(Parser, Debug)]
#[command(name = "logtriage", version, about)]
struct Cli {
    /// Log file to analyse.
    file: PathBuf,

    /// Show detail lines for this level (case-insensitive).
    level: Option<String>,

    /// When to colour the output. Overrides [display] color in config.
    #[arg(long = "color", value_enum, value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (config, config_warnings) = load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(path = %config_path.display(), "{warning}");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        file = %cli.file.display(),
        level = cli.level.as_deref().unwrap_or("-"),
        "LogTriage starting"
    );

    let request = TriageRequest {
        path: cli.file,
        level: cli.level,
        styled: cli.color.unwrap_or(config.color).should_style(),
        max_file_size: config.max_file_size,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(&request, &mut out) {
        Ok(outcome) => {
            tracing::info!(
                records = outcome.store.len(),
                levels = outcome.counts.len(),
                "Triage complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Triage failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
