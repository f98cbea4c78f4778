use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wain_lib::{Settings, report_stats};

use super::open_db;
use crate::CliError;

pub(crate) fn run_stats(settings: &Settings) -> Result<(), CliError> {
    let conn = open_db(settings)?;
    let stats = report_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    log::info!(
        "{}",
        "Report Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", settings.database_path.display());
    crate::log_blank();
    log::info!("  Lost reports:      {:>8}", stats.lost_reports);
    log::info!("  Sighting reports:  {:>8}", stats.sighting_reports);
    log::info!("  Active total:      {:>8}", stats.total_reports);
    log::info!("  Matches found:     {:>8}", stats.matches_found);

    Ok(())
}

pub(crate) fn run_contact(settings: &Settings) -> Result<(), CliError> {
    let mediator = settings.mediator();
    if mediator.phone.is_empty() && mediator.whatsapp.is_empty() {
        log::warn!("No mediator contact configured (set WAIN_MEDIATOR_PHONE)");
        return Ok(());
    }

    log::info!("{}", "Mediator".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Phone:    {}", mediator.phone);
    log::info!("  WhatsApp: {}", mediator.whatsapp);
    Ok(())
}
