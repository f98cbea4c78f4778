use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wain_catalog::{ImageUpload, ReportKind, SubmissionForm, allowed_image};
use wain_lib::{Settings, SubmissionOutcome, submit_report};

use super::{log_report, open_db};
use crate::CliError;
use crate::cli_types::ReportArgs;

/// Submit a single report and show any matches it produced.
pub(crate) fn run_report(
    settings: &Settings,
    kind: ReportKind,
    args: ReportArgs,
) -> Result<(), CliError> {
    let image = match &args.image {
        Some(path) => {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !allowed_image(&filename) {
                log::warn!(
                    "Ignoring image {}: only png, jpg, jpeg and webp are accepted",
                    path.display(),
                );
                None
            } else {
                let bytes = std::fs::read(path)?;
                Some(ImageUpload { filename, bytes })
            }
        }
        None => None,
    };

    let form = SubmissionForm {
        car_name: args.car_name,
        model: args.model,
        color: args.color,
        chassis: args.chassis,
        plate: args.plate,
        location: args.location,
        phone: args.phone,
        notes: args.notes,
    };

    let conn = open_db(settings)?;
    let outcome = submit_report(&conn, settings, kind, &form, image.as_ref())?;

    match &outcome {
        SubmissionOutcome::Rejected(e) => {
            return Err(CliError::invalid(e.to_string()));
        }
        SubmissionOutcome::Registered { report } => {
            log::info!(
                "{} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                outcome.message(),
            );
            crate::log_blank();
            log_report(report);
        }
        SubmissionOutcome::Matched { report, matches } => {
            log::info!(
                "{} {}",
                "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
                outcome.message().if_supports_color(Stdout, |t| t.bold()),
            );
            crate::log_blank();
            log_report(report);
            crate::log_blank();
            log::info!("Matched on:");
            for m in matches {
                log::info!(
                    "  {} {}",
                    m.rule.if_supports_color(Stdout, |t| t.cyan()),
                    if m.created { "(new)" } else { "(already on record)" },
                );
                log_report(&m.other);
            }
            crate::log_blank();
            let mediator = settings.mediator();
            log::info!("Mediator phone:    {}", mediator.phone);
            log::info!("Mediator WhatsApp: {}", mediator.whatsapp);
        }
    }

    Ok(())
}
