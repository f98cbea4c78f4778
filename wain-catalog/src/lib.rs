//! Vehicle report data model, key normalization, and input validation.
//!
//! This crate defines the persistent data model for lost and sighting reports
//! without any database dependencies. Consumers use these types directly for
//! display or pass them to `wain-db` for persistence.

pub mod normalize;
pub mod types;
pub mod uploads;
pub mod validate;

pub use normalize::{normalize, normalize_chassis, normalize_plate, normalized_or_none};
pub use types::*;
pub use uploads::{ImageUpload, UploadError, allowed_image, save_image, stored_image_name};
pub use validate::{SubmissionForm, ValidationError, non_empty};
