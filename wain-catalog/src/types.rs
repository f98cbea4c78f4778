//! Data model types for vehicle reports.
//!
//! These types represent the persistent schema: reports (lost or sighting),
//! matches between them, and the joined read models the services return.

use serde::{Deserialize, Serialize};

// ── Report Kind ─────────────────────────────────────────────────────────────

/// Which side of the lost/found exchange a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Lost,
    Sighting,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Sighting => "sighting",
        }
    }

    /// Parse the stored form (`"lost"` / `"sighting"`).
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "lost" => Some(Self::Lost),
            "sighting" => Some(Self::Sighting),
            _ => None,
        }
    }

    /// Parse a report type literal from a bulk import row.
    ///
    /// Accepts the Arabic pair (`فقدان` / `رصد`) and the English pair
    /// (`lost` / `sighting`). Matching is exact, as typed by the operator.
    pub fn from_bulk_literal(s: &str) -> Option<Self> {
        match s {
            "فقدان" | "lost" => Some(Self::Lost),
            "رصد" | "sighting" => Some(Self::Sighting),
            _ => None,
        }
    }

    /// The kind a report has to be to match this one.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Lost => Self::Sighting,
            Self::Sighting => Self::Lost,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Match Rule ──────────────────────────────────────────────────────────────

/// Which identifier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    Plate,
    Chassis,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plate => "plate",
            Self::Chassis => "chassis",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "plate" => Some(Self::Plate),
            "chassis" => Some(Self::Chassis),
            _ => None,
        }
    }

    /// Column name holding the key for this rule.
    pub fn column(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which identifier a search looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Plate,
    Chassis,
}

impl SearchMode {
    /// The report field this mode searches, expressed as the matching rule.
    pub fn field(&self) -> MatchRule {
        match self {
            Self::Plate => MatchRule::Plate,
            Self::Chassis => MatchRule::Chassis,
        }
    }
}

// ── Report ──────────────────────────────────────────────────────────────────

/// A stored lost or sighting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub report_type: ReportKind,
    pub car_name: String,
    pub model: Option<String>,
    pub color: Option<String>,
    /// Chassis number, stored in the form it had at insertion.
    pub chassis: Option<String>,
    /// Licence plate, stored in the form it had at insertion.
    pub plate: Option<String>,
    pub location: Option<String>,
    pub phone: String,
    /// Relative path of an uploaded photo (`uploads/<name>`).
    pub image_path: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub is_active: bool,
}

impl Report {
    /// The stored key for a rule, if present and non-empty.
    pub fn key(&self, rule: MatchRule) -> Option<&str> {
        let value = match rule {
            MatchRule::Plate => self.plate.as_deref(),
            MatchRule::Chassis => self.chassis.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// A validated report ready to be inserted.
///
/// Has no id, timestamp or activity flag; the store assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub report_type: ReportKind,
    pub car_name: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub chassis: Option<String>,
    pub plate: Option<String>,
    pub location: Option<String>,
    pub phone: String,
    pub image_path: Option<String>,
    pub notes: Option<String>,
}

// ── Match ───────────────────────────────────────────────────────────────────

/// A recorded link between a lost report and a sighting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub lost_id: i64,
    pub sighting_id: i64,
    pub rule: MatchRule,
    pub created_at: String,
}

impl Match {
    /// The deduplication key: at most one match exists per triple.
    pub fn triple(&self) -> (i64, i64, MatchRule) {
        (self.lost_id, self.sighting_id, self.rule)
    }
}

/// A match joined with both of its reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    #[serde(rename = "match")]
    pub record: Match,
    pub lost: Report,
    pub sighting: Report,
}

// ── Mediator ────────────────────────────────────────────────────────────────

/// The fixed contact surfaced to users when a match is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mediator {
    pub phone: String,
    pub whatsapp: String,
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// Log entry for a bulk import run.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    pub source_name: String,
    pub imported_at: String,
    pub lines_seen: i64,
    pub records_created: i64,
    pub errors_found: i64,
    pub matches_found: i64,
}
