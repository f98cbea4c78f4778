//! Runtime settings: storage paths, admin credential, mediator contact.
//!
//! Settings are resolved once at startup and passed to the services. Each
//! field is looked up in priority order:
//!
//! 1. Environment variable (`WAIN_*`)
//! 2. `[wain]` table in `~/.config/wain/config.toml`
//! 3. Built-in default

use std::path::{Path, PathBuf};

use thiserror::Error;
use wain_catalog::types::Mediator;

pub const ENV_DATABASE: &str = "WAIN_DATABASE";
pub const ENV_UPLOAD_DIR: &str = "WAIN_UPLOAD_DIR";
pub const ENV_ADMIN_PASSWORD: &str = "WAIN_ADMIN_PASSWORD";
pub const ENV_MEDIATOR_PHONE: &str = "WAIN_MEDIATOR_PHONE";
pub const ENV_MEDIATOR_WHATSAPP: &str = "WAIN_MEDIATOR_WHATSAPP";
pub const ENV_SHEET_PATH: &str = "WAIN_SHEET_PATH";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Resolved settings for one process.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_path: PathBuf,
    /// Directory photos are written to; reports reference them as `uploads/<name>`.
    pub upload_dir: PathBuf,
    /// Shared admin secret. `None` disables admin access entirely.
    pub admin_password: Option<String>,
    pub mediator_phone: String,
    pub mediator_whatsapp: String,
    /// CSV file the legacy sheet integration appends to.
    pub sheet_path: PathBuf,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct SettingSources {
    pub database_path: SettingSource,
    pub upload_dir: SettingSource,
    pub admin_password: SettingSource,
    pub mediator_phone: SettingSource,
    pub mediator_whatsapp: SettingSource,
    pub sheet_path: SettingSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    wain: Option<FileSettings>,
}

/// The `[wain]` table of the config file. Every key is optional.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct FileSettings {
    pub database_path: Option<PathBuf>,
    pub upload_dir: Option<PathBuf>,
    pub admin_password: Option<String>,
    pub mediator_phone: Option<String>,
    pub mediator_whatsapp: Option<String>,
    pub sheet_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the process environment and the config file.
    ///
    /// A missing config file is fine; one that exists but does not parse is
    /// an error rather than being silently ignored.
    pub fn load() -> Result<Self, SettingsError> {
        let file = load_config_file()?;
        Ok(Self::resolve(|var| std::env::var(var).ok(), file.as_ref()))
    }

    /// Resolve settings from an environment lookup and optional file values.
    pub fn resolve(env: impl Fn(&str) -> Option<String>, file: Option<&FileSettings>) -> Self {
        let env = |var: &str| env(var).filter(|v| !v.is_empty());
        let data_dir = default_data_dir();

        let database_path = env(ENV_DATABASE)
            .map(PathBuf::from)
            .or_else(|| file.and_then(|f| f.database_path.clone()))
            .unwrap_or_else(|| data_dir.join("wain.db"));

        let upload_dir = env(ENV_UPLOAD_DIR)
            .map(PathBuf::from)
            .or_else(|| file.and_then(|f| f.upload_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("uploads"));

        let admin_password = env(ENV_ADMIN_PASSWORD)
            .or_else(|| file.and_then(|f| f.admin_password.clone()))
            .filter(|p| !p.is_empty());

        let mediator_phone = env(ENV_MEDIATOR_PHONE)
            .or_else(|| file.and_then(|f| f.mediator_phone.clone()))
            .unwrap_or_default();

        let mediator_whatsapp = env(ENV_MEDIATOR_WHATSAPP)
            .or_else(|| file.and_then(|f| f.mediator_whatsapp.clone()))
            .unwrap_or_else(|| mediator_phone.clone());

        let sheet_path = env(ENV_SHEET_PATH)
            .map(PathBuf::from)
            .or_else(|| file.and_then(|f| f.sheet_path.clone()))
            .unwrap_or_else(|| data_dir.join("reports-sheet.csv"));

        Self {
            database_path,
            upload_dir,
            admin_password,
            mediator_phone,
            mediator_whatsapp,
            sheet_path,
        }
    }

    /// Override the database path (e.g. from a `--db` flag).
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.database_path = p;
        }
        self
    }

    /// The contact shown alongside matches.
    pub fn mediator(&self) -> Mediator {
        Mediator {
            phone: self.mediator_phone.clone(),
            whatsapp: self.mediator_whatsapp.clone(),
        }
    }
}

/// Return the path to the config file: `~/.config/wain/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wain").join("config.toml"))
}

/// Default directory for the database and sheet: the platform data dir.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wain")
}

/// Parse the contents of a config file, returning its `[wain]` table.
pub fn parse_config(content: &str, path: &Path) -> Result<Option<FileSettings>, SettingsError> {
    let config: ConfigFile = toml::from_str(content).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(config.wain)
}

/// Determine where each setting is coming from.
pub fn setting_sources() -> Result<SettingSources, SettingsError> {
    let file = load_config_file()?;
    Ok(sources_from(|var| std::env::var(var).ok(), file.as_ref()))
}

/// Provenance of each setting for an environment lookup and optional file values.
pub fn sources_from(
    env: impl Fn(&str) -> Option<String>,
    file: Option<&FileSettings>,
) -> SettingSources {
    let pick = |var: &'static str, in_file: bool, fallback: SettingSource| {
        if env(var).is_some_and(|v| !v.is_empty()) {
            SettingSource::EnvVar(var)
        } else if in_file {
            SettingSource::ConfigFile
        } else {
            fallback
        }
    };
    let has = |f: fn(&FileSettings) -> bool| file.is_some_and(f);

    SettingSources {
        database_path: pick(
            ENV_DATABASE,
            has(|f| f.database_path.is_some()),
            SettingSource::Default,
        ),
        upload_dir: pick(
            ENV_UPLOAD_DIR,
            has(|f| f.upload_dir.is_some()),
            SettingSource::Default,
        ),
        admin_password: pick(
            ENV_ADMIN_PASSWORD,
            has(|f| f.admin_password.as_ref().is_some_and(|p| !p.is_empty())),
            SettingSource::Missing,
        ),
        mediator_phone: pick(
            ENV_MEDIATOR_PHONE,
            has(|f| f.mediator_phone.is_some()),
            SettingSource::Missing,
        ),
        mediator_whatsapp: pick(
            ENV_MEDIATOR_WHATSAPP,
            has(|f| f.mediator_whatsapp.is_some()),
            SettingSource::Default,
        ),
        sheet_path: pick(
            ENV_SHEET_PATH,
            has(|f| f.sheet_path.is_some()),
            SettingSource::Default,
        ),
    }
}

fn load_config_file() -> Result<Option<FileSettings>, SettingsError> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_config(&content, &path)
}
