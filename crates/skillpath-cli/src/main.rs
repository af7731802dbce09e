//! Skillpath CLI.

use clap::{ColorChoice, Parser};
use skillpath_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_check, run_complete, run_layout, run_list, run_show, run_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = match &cli.command {
        Command::Check { catalog } => run_check(catalog),
        Command::List(args) => run_list(args),
        Command::Show {
            catalog,
            id,
            progress,
        } => run_show(catalog, id, progress.as_deref()),
        Command::Complete {
            catalog,
            id,
            progress,
        } => run_complete(catalog, id, progress),
        Command::Summary { catalog, progress } => {
            run_summary(catalog, progress.as_deref())
        }
        Command::Layout { catalog, progress } => {
            run_layout(catalog, progress.as_deref())
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
    }
}
