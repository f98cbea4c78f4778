pub(crate) mod admin;
pub(crate) mod config;
pub(crate) mod report;
pub(crate) mod search;
pub(crate) mod sheet;
pub(crate) mod stats;

use std::io::Read;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use wain_catalog::Report;
use wain_lib::Settings;

use crate::CliError;

/// Open (creating if needed) the configured report database.
pub(crate) fn open_db(settings: &Settings) -> Result<Connection, CliError> {
    let path = &settings.database_path;
    log::debug!("Using database {}", path.display());
    wain_db::open_database(path).map_err(|e| {
        CliError::database(format!("Failed to open database at {}: {}", path.display(), e))
    })
}

/// Read a whole input file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// Log a report as an indented block.
pub(crate) fn log_report(report: &Report) {
    log::info!(
        "  {} {} ({})",
        format!("#{}", report.id).if_supports_color(Stdout, |t| t.dimmed()),
        report.car_name.if_supports_color(Stdout, |t| t.bold()),
        report.report_type,
    );
    let optional = [
        ("Model", &report.model),
        ("Color", &report.color),
        ("Plate", &report.plate),
        ("Chassis", &report.chassis),
        ("Location", &report.location),
        ("Image", &report.image_path),
        ("Notes", &report.notes),
    ];
    for (label, value) in optional {
        if let Some(v) = value {
            log::info!("      {:<9} {}", format!("{}:", label), v);
        }
    }
    log::info!("      {:<9} {}", "Phone:", report.phone);
    log::info!("      {:<9} {}", "Filed:", report.created_at);
    if !report.is_active {
        log::info!(
            "      {}",
            "inactive".if_supports_color(Stdout, |t| t.yellow())
        );
    }
}
