//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use wain_catalog::{ReportKind, SearchMode};

#[derive(Parser)]
#[command(name = "wain")]
#[command(about = "Register lost and sighted vehicles and match them up", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides WAIN_DATABASE and the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Lost,
    Sighting,
}

impl From<KindArg> for ReportKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Lost => ReportKind::Lost,
            KindArg::Sighting => ReportKind::Sighting,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    Plate,
    Chassis,
}

impl From<ModeArg> for SearchMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Plate => SearchMode::Plate,
            ModeArg::Chassis => SearchMode::Chassis,
        }
    }
}

/// Fields of a single report submission.
#[derive(Args, Clone)]
pub(crate) struct ReportArgs {
    /// Make / name of the car
    #[arg(long)]
    pub car_name: String,

    /// Contact phone number
    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub color: String,

    /// Plate number (any spacing or separators)
    #[arg(long, default_value = "")]
    pub plate: String,

    /// Chassis number (any spacing or separators)
    #[arg(long, default_value = "")]
    pub chassis: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Photo of the car (png, jpg, jpeg or webp)
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a lost or sighting report and look for matches
    Report {
        /// Report kind
        #[arg(value_enum)]
        kind: KindArg,

        #[command(flatten)]
        fields: ReportArgs,
    },

    /// Check a plate or chassis number
    Search {
        #[arg(value_enum)]
        mode: ModeArg,

        /// Value to look up
        value: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show report and match counts
    Stats,

    /// Show the mediator contact
    Contact,

    /// Administrative commands (require the admin password)
    Admin {
        /// Admin password
        #[arg(long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },

    /// Append a JSON report to the legacy sheet
    Sheet {
        /// JSON file, or '-' for stdin
        input: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum AdminAction {
    /// Show the latest reports and matches
    List {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import reports from comma-separated lines
    Import {
        /// Input file, or '-' for stdin
        input: PathBuf,

        /// Normalize plate and chassis before storing
        #[arg(long)]
        normalize: bool,
    },

    /// Exclude a report from matching
    Deactivate {
        /// Report ID
        id: i64,
    },

    /// Return a deactivated report to matching
    Activate {
        /// Report ID
        id: i64,
    },

    /// Show recent bulk import runs
    History {
        /// Number of runs to show
        #[arg(long, default_value = "10")]
        limit: u32,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each came from
    Show,
    /// Print the config file path
    Path,
}
