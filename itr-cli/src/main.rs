use anyhow::Context;
use clap::Parser;
use tracing::debug;

use itr_cli::cli::Cli;
use itr_cli::config::CliConfig;
use itr_cli::{app, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet by default so reports on stdout are all the user sees.
    logging::init_logging("warn");

    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Precedence: --log-level, then RUST_LOG, then the config file.
    let level = match (&cli.log_level, &config.log_level) {
        (Some(flag), _) => Some(flag.as_str()),
        (None, Some(from_config)) if std::env::var_os("RUST_LOG").is_none() => {
            Some(from_config.as_str())
        }
        _ => None,
    };
    if let Some(level) = level {
        logging::set_log_level(level)?;
    }

    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    debug!(?config, "effective configuration");

    let output = app::run(&cli, &config)?;
    print!("{output}");

    Ok(())
}
