//! Admin authorization and the admin views.
//!
//! There are no sessions. Logging in with the shared secret yields an
//! [`AdminToken`]; each admin call presents it in a [`RequestContext`] and is
//! checked on its own by [`AdminGuard::is_authorized_admin`]. The data layer
//! never sees any of this.

use rusqlite::Connection;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use wain_catalog::types::{MatchPair, Report};
use wain_db::{operations, queries};

use crate::error::ServiceError;
use crate::settings::Settings;

/// Number of reports and matches the dashboard shows.
pub const DASHBOARD_LIMIT: u32 = 50;

/// Domain prefix mixed into token derivation.
const TOKEN_DOMAIN: &[u8] = b"wain-admin-token\0";

/// A stateless admin credential derived from the shared secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-call caller information an admin check is evaluated against.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub admin_token: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: &AdminToken) -> Self {
        Self {
            admin_token: Some(token.as_str().to_string()),
        }
    }
}

/// Checks admin credentials against the configured secret.
#[derive(Debug, Clone)]
pub struct AdminGuard {
    expected: Option<String>,
}

impl AdminGuard {
    pub fn new(settings: &Settings) -> Self {
        Self::from_password(settings.admin_password.as_deref())
    }

    /// Build a guard for a secret. `None` or an empty secret denies everyone.
    pub fn from_password(password: Option<&str>) -> Self {
        let expected = password.filter(|p| !p.is_empty()).map(derive_token);
        if expected.is_none() {
            log::warn!("No admin password configured; admin access is disabled");
        }
        Self { expected }
    }

    /// Exchange the shared secret for a token.
    pub fn login(&self, password: &str) -> Option<AdminToken> {
        let expected = self.expected.as_ref()?;
        let candidate = derive_token(password);
        if bool::from(candidate.as_bytes().ct_eq(expected.as_bytes())) {
            Some(AdminToken(candidate))
        } else {
            log::warn!("Rejected admin login");
            None
        }
    }

    /// True if the request carries a valid admin token.
    pub fn is_authorized_admin(&self, ctx: &RequestContext) -> bool {
        match (&self.expected, &ctx.admin_token) {
            (Some(expected), Some(token)) => token.as_bytes().ct_eq(expected.as_bytes()).into(),
            _ => false,
        }
    }

    /// `Err(Unauthorized)` unless [`Self::is_authorized_admin`].
    pub fn require(&self, ctx: &RequestContext) -> Result<(), ServiceError> {
        if self.is_authorized_admin(ctx) {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }
}

fn derive_token(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(TOKEN_DOMAIN);
    hasher.update(password.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

// ── Views ───────────────────────────────────────────────────────────────────

/// Latest reports and matches for the admin overview.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Dashboard {
    pub reports: Vec<Report>,
    pub matches: Vec<MatchPair>,
}

/// The newest [`DASHBOARD_LIMIT`] reports and matches, matches joined with
/// both of their reports.
pub fn dashboard(
    conn: &Connection,
    guard: &AdminGuard,
    ctx: &RequestContext,
) -> Result<Dashboard, ServiceError> {
    guard.require(ctx)?;
    Ok(Dashboard {
        reports: queries::recent_reports(conn, DASHBOARD_LIMIT)?,
        matches: queries::recent_match_pairs(conn, DASHBOARD_LIMIT)?,
    })
}

/// Take a report out of matching and the "raised" search status.
pub fn deactivate_report(
    conn: &Connection,
    guard: &AdminGuard,
    ctx: &RequestContext,
    report_id: i64,
) -> Result<(), ServiceError> {
    guard.require(ctx)?;
    operations::set_report_active(conn, report_id, false)?;
    log::info!("Deactivated report #{}", report_id);
    Ok(())
}

/// Put a deactivated report back into matching.
///
/// Reactivation does not rerun the match engine; the report is matched
/// again when a new counterpart is submitted.
pub fn reactivate_report(
    conn: &Connection,
    guard: &AdminGuard,
    ctx: &RequestContext,
    report_id: i64,
) -> Result<(), ServiceError> {
    guard.require(ctx)?;
    operations::set_report_active(conn, report_id, true)?;
    log::info!("Reactivated report #{}", report_id);
    Ok(())
}
