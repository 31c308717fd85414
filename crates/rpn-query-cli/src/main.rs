//! `rpnq` binary entry point.

use std::io::{self, Write};

use clap::Parser;
use tracing::error;

use rpn_query_cli::cli::Cli;
use rpn_query_cli::commands::run;
use rpn_query_cli::config::CliConfig;
use rpn_query_cli::error::CliError;
use rpn_query_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            std::process::exit(e.exit_code());
        }
    };
    init_logging(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result =
        run(&cli.command, &config, &mut out).and_then(|()| out.flush().map_err(CliError::from));
    if let Err(e) = result {
        error!(error = %e, "command failed");
        std::process::exit(e.exit_code());
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.format))
}
