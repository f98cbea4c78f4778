use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wain_import::{BulkOptions, ImportProgress, guarded_bulk_import};
use wain_lib::{
    AdminGuard, RequestContext, Settings, dashboard, deactivate_report, reactivate_report,
};

use super::{log_report, open_db, read_input, truncate_str};
use crate::CliError;

/// Exchange the password for an admin request context.
fn admin_context(
    settings: &Settings,
    password: &str,
) -> Result<(AdminGuard, RequestContext), CliError> {
    let guard = AdminGuard::new(settings);
    let token = guard.login(password).ok_or(CliError::Unauthorized)?;
    Ok((guard, RequestContext::with_token(&token)))
}

pub(crate) fn run_list(settings: &Settings, password: &str, json: bool) -> Result<(), CliError> {
    let (guard, ctx) = admin_context(settings, password)?;
    let conn = open_db(settings)?;
    let view = dashboard(&conn, &guard, &ctx)?;

    if json {
        let out = serde_json::to_string_pretty(&view)
            .map_err(|e| CliError::other(format!("Failed to encode dashboard: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Latest reports ({})", view.reports.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for report in &view.reports {
        log_report(report);
    }
    crate::log_blank();

    log::info!(
        "{}",
        format!("Latest matches ({})", view.matches.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for pair in &view.matches {
        log::info!(
            "  #{:<5} {:<8} lost #{:<5} {:<24} sighting #{:<5} {}",
            pair.record.id,
            pair.record.rule.as_str(),
            pair.lost.id,
            truncate_str(&pair.lost.car_name, 24),
            pair.sighting.id,
            truncate_str(&pair.sighting.car_name, 24),
        );
    }

    Ok(())
}

/// Progress bar over input lines.
struct BarProgress {
    pb: ProgressBar,
}

impl BarProgress {
    fn new(quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} lines")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb
        };
        Self { pb }
    }
}

impl ImportProgress for BarProgress {
    fn on_line(&self, current: usize, total: usize) {
        self.pb.set_length(total as u64);
        self.pb.set_position(current as u64);
    }

    fn on_complete(&self, _message: &str) {
        self.pb.finish_and_clear();
    }
}

pub(crate) fn run_import(
    settings: &Settings,
    password: &str,
    input: &Path,
    normalize: bool,
) -> Result<(), CliError> {
    let (guard, ctx) = admin_context(settings, password)?;
    let text = read_input(input)?;
    let conn = open_db(settings)?;

    let source_name = if input.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        input.display().to_string()
    };
    let options = BulkOptions {
        normalize_keys: normalize,
        source_name,
    };

    let progress = BarProgress::new(!log::log_enabled!(log::Level::Info));
    let result = guarded_bulk_import(&conn, &text, &options, &guard, &ctx, Some(&progress))?;

    log::info!(
        "{} Imported {} report(s), {} match(es) found",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        result.success_count,
        result.match_count,
    );
    if !result.errors.is_empty() {
        log::warn!("{} line(s) were skipped:", result.errors.len());
        for e in &result.errors {
            log::warn!("  {}", e);
        }
    }

    Ok(())
}

pub(crate) fn run_set_active(
    settings: &Settings,
    password: &str,
    id: i64,
    active: bool,
) -> Result<(), CliError> {
    let (guard, ctx) = admin_context(settings, password)?;
    let conn = open_db(settings)?;

    if active {
        reactivate_report(&conn, &guard, &ctx, id)?;
        log::info!("Report #{} is active again", id);
    } else {
        deactivate_report(&conn, &guard, &ctx, id)?;
        log::info!("Report #{} deactivated", id);
    }
    Ok(())
}

pub(crate) fn run_history(settings: &Settings, password: &str, limit: u32) -> Result<(), CliError> {
    let (guard, ctx) = admin_context(settings, password)?;
    guard.require(&ctx)?;
    let conn = open_db(settings)?;

    let logs = wain_db::list_import_logs(&conn, limit)
        .map_err(|e| CliError::database(format!("Failed to list imports: {}", e)))?;
    if logs.is_empty() {
        log::info!("No bulk imports recorded.");
        return Ok(());
    }

    log::info!(
        "{}",
        "Recent bulk imports".if_supports_color(Stdout, |t| t.bold()),
    );
    for entry in &logs {
        log::info!(
            "  {}  {:<30} lines {:>5}  created {:>5}  errors {:>5}  matches {:>5}",
            entry.imported_at,
            truncate_str(&entry.source_name, 30),
            entry.lines_seen,
            entry.records_created,
            entry.errors_found,
            entry.matches_found,
        );
    }
    Ok(())
}
