//! Typed submission input and its validation.
//!
//! A submission arrives as loosely filled text fields. [`SubmissionForm::validate`]
//! trims them, normalizes the plate and chassis keys, and either produces a
//! [`NewReport`] or the first rule it broke.

use thiserror::Error;

use crate::normalize::normalize;
use crate::types::{NewReport, ReportKind};

/// A rule a submission, search or import row failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("car name and phone number are required")]
    MissingRequired,
    #[error("at least one of plate or chassis number is required")]
    MissingIdentifier,
    #[error("report type must be one of \"فقدان\", \"رصد\", \"lost\" or \"sighting\", got \"{0}\"")]
    UnknownReportType(String),
    #[error("incomplete row: expected at least 8 fields, found {found}")]
    TooFewFields { found: usize },
    #[error("a search value is required")]
    EmptySearch,
    #[error("bulk data is empty")]
    EmptyBulkData,
}

/// Raw fields of a single report submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub car_name: String,
    pub model: String,
    pub color: String,
    pub chassis: String,
    pub plate: String,
    pub location: String,
    pub phone: String,
    pub notes: String,
}

impl SubmissionForm {
    /// Validate the form for a report of the given kind.
    ///
    /// Plate and chassis are normalized here, once; the requirement that one
    /// of them is present is checked on the normalized keys, so a plate made
    /// only of separators counts as missing.
    pub fn validate(&self, kind: ReportKind) -> Result<NewReport, ValidationError> {
        let car_name = self.car_name.trim();
        let phone = self.phone.trim();
        let chassis = normalize(self.chassis.trim());
        let plate = normalize(self.plate.trim());

        if car_name.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if chassis.is_empty() && plate.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }

        Ok(NewReport {
            report_type: kind,
            car_name: car_name.to_string(),
            model: non_empty(&self.model),
            color: non_empty(&self.color),
            chassis: Some(chassis).filter(|c| !c.is_empty()),
            plate: Some(plate).filter(|p| !p.is_empty()),
            location: non_empty(&self.location),
            phone: phone.to_string(),
            image_path: None,
            notes: non_empty(&self.notes),
        })
    }
}

/// Trim a field, mapping an empty result to `None`.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
