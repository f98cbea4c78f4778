use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wain_lib::settings::{self, SettingSource};
use wain_lib::Settings;

use crate::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 2 {
        "****".to_string()
    } else {
        let head: String = s.chars().take(2).collect();
        format!("{}****", head)
    }
}

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings::config_path();

    log::info!(
        "{}",
        "wain Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let resolved = Settings::load()
        .map_err(|e| CliError::config(e.to_string()))?
        .with_database_path(db_override.clone());
    let sources = settings::setting_sources().map_err(|e| CliError::config(e.to_string()))?;
    let db_source = if db_override.is_some() {
        "--db flag".to_string()
    } else {
        sources.database_path.to_string()
    };

    let fields: [(&str, Option<String>, String); 6] = [
        (
            "database_path",
            Some(resolved.database_path.display().to_string()),
            db_source,
        ),
        (
            "upload_dir",
            Some(resolved.upload_dir.display().to_string()),
            sources.upload_dir.to_string(),
        ),
        (
            "admin_password",
            resolved.admin_password.as_deref().map(mask_value),
            sources.admin_password.to_string(),
        ),
        (
            "mediator_phone",
            Some(resolved.mediator_phone.clone()).filter(|v| !v.is_empty()),
            sources.mediator_phone.to_string(),
        ),
        (
            "mediator_whatsapp",
            Some(resolved.mediator_whatsapp.clone()).filter(|v| !v.is_empty()),
            sources.mediator_whatsapp.to_string(),
        ),
        (
            "sheet_path",
            Some(resolved.sheet_path.display().to_string()),
            sources.sheet_path.to_string(),
        ),
    ];

    for (name, value, source) in fields {
        match value {
            Some(v) => log::info!(
                "  {:<18} {} {}",
                format!("{}:", name),
                v,
                format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<18} {}",
                format!("{}:", name),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }

    if sources.admin_password == SettingSource::Missing {
        crate::log_blank();
        log::warn!("No admin password set; admin commands are disabled.");
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match settings::config_path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::config("Could not determine config directory")),
    }
}
