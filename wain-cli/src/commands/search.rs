use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wain_catalog::SearchMode;
use wain_lib::{SearchStatus, Settings, search};

use super::{log_report, open_db};
use crate::CliError;

pub(crate) fn run_search(
    settings: &Settings,
    mode: SearchMode,
    value: &str,
    json: bool,
) -> Result<(), CliError> {
    let conn = open_db(settings)?;
    let outcome = search(&conn, settings, mode, value)?;

    if json {
        let out = serde_json::to_string_pretty(&outcome)
            .map_err(|e| CliError::other(format!("Failed to encode result: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    match outcome.status {
        SearchStatus::Clear => {
            log::info!(
                "{} No lost report or match for {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                outcome.key.if_supports_color(Stdout, |t| t.bold()),
            );
        }
        SearchStatus::Raised => {
            log::info!(
                "{} {} is reported lost; no sighting has matched yet",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                outcome.key.if_supports_color(Stdout, |t| t.bold()),
            );
        }
        SearchStatus::Matched => {
            log::info!(
                "{} {} match(es) for {}",
                "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
                outcome.hits.len(),
                outcome.key.if_supports_color(Stdout, |t| t.bold()),
            );
            for hit in &outcome.hits {
                crate::log_blank();
                log::info!("Matched on {}", hit.rule.if_supports_color(Stdout, |t| t.cyan()));
                log_report(&hit.lost);
                log_report(&hit.sighting);
            }
            if let Some(hit) = outcome.hits.first() {
                crate::log_blank();
                log::info!("Contact the mediator to arrange the handover:");
                log::info!("  Phone:    {}", hit.mediator.phone);
                log::info!("  WhatsApp: {}", hit.mediator.whatsapp);
            }
        }
    }

    Ok(())
}
