//! tip-prompt - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tip_prompt::model::{AppError, Outcome};
use tracing::{error, info};

/// tip-prompt - interactive terminal prompt for choosing a tip percentage
#[derive(Parser, Debug)]
#[command(name = "tip-prompt")]
#[command(version)]
#[command(about = "Interactive terminal prompt for choosing a tip percentage")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Quit after this many seconds without input (must be positive)
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the outcome as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(outcome) => {
            if let Some(line) = format_outcome(outcome, args.json) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Outcome, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tip_prompt::config::load_config_with_precedence(args.config.clone())?;
        let merged = tip_prompt::config::merge_config(config_file)?;
        let with_env = tip_prompt::config::apply_env_overrides(merged);
        tip_prompt::config::apply_cli_overrides(with_env, args.timeout, args.no_color)
    };

    // Dropping the guard flushes buffered log lines
    let _log_guard = tip_prompt::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Logged while the guard is alive; after `run` returns the writer is gone
    tip_prompt::prompt_for_tip(&config).inspect_err(|err| error!(%err, "tip prompt failed"))
}

/// Text printed on stdout for an outcome, if any.
///
/// Plain mode prints the bare percentage and nothing on quit, so callers can
/// tell the two apart by empty output.
fn format_outcome(outcome: Outcome, json: bool) -> Option<String> {
    if json {
        return Some(outcome.to_json().to_string());
    }
    outcome.tip_percent().map(|value| value.to_string())
}
