//! wain CLI
//!
//! Command-line front end for registering lost and sighted vehicles,
//! searching plates and chassis numbers, and administering the report store.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{AdminAction, Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
use wain_lib::Settings;

/// Log an empty line (a visual separator in command output).
pub(crate) fn log_blank() {
    log::info!("");
}

/// Route `log` output to stdout: bare messages at info and below, a level
/// prefix for warnings and errors. `WAIN_LOG` can override the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("WAIN_LOG")
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Error | Level::Warn => {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::run_config_show(cli.db),
            ConfigAction::Path => commands::config::run_config_path(),
        };
    }

    let settings = Settings::load()
        .map_err(|e| CliError::config(e.to_string()))?
        .with_database_path(cli.db);

    match cli.command {
        Commands::Report { kind, fields } => {
            commands::report::run_report(&settings, kind.into(), fields)
        }
        Commands::Search { mode, value, json } => {
            commands::search::run_search(&settings, mode.into(), &value, json)
        }
        Commands::Stats => commands::stats::run_stats(&settings),
        Commands::Contact => commands::stats::run_contact(&settings),
        Commands::Admin { password, action } => match action {
            AdminAction::List { json } => commands::admin::run_list(&settings, &password, json),
            AdminAction::Import { input, normalize } => {
                commands::admin::run_import(&settings, &password, &input, normalize)
            }
            AdminAction::Deactivate { id } => {
                commands::admin::run_set_active(&settings, &password, id, false)
            }
            AdminAction::Activate { id } => {
                commands::admin::run_set_active(&settings, &password, id, true)
            }
            AdminAction::History { limit } => {
                commands::admin::run_history(&settings, &password, limit)
            }
        },
        Commands::Sheet { input } => commands::sheet::run_sheet(&settings, &input),
        Commands::Config { .. } => Ok(()),
    }
}
