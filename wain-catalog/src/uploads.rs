//! Storage of report photos.
//!
//! Uploaded images are written under the configured upload directory as
//! `{base}_{unix_seconds}{ext}` and referenced from the report by the relative
//! path `uploads/<name>`.

use std::path::Path;

use thiserror::Error;

/// Extensions accepted for report photos (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// An image attached to a submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name as supplied by the client.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// True if the file name carries one of [`ALLOWED_EXTENSIONS`].
pub fn allowed_image(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Directory parts are dropped, whitespace becomes `_`, anything other than
/// ASCII alphanumerics, `.`, `-` and `_` is removed, and leading dots are
/// stripped so the result can never be hidden or escape the upload directory.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = last
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Build the stored file name for an upload taken at `unix_seconds`.
///
/// Returns `None` when the name is empty after sanitizing or the extension
/// is not allowed.
///
/// ```
/// use wain_catalog::uploads::stored_image_name;
///
/// assert_eq!(
///     stored_image_name("my car.JPG", 1_700_000_000),
///     Some("my_car_1700000000.JPG".to_string()),
/// );
/// assert_eq!(stored_image_name("notes.txt", 1_700_000_000), None);
/// ```
pub fn stored_image_name(filename: &str, unix_seconds: i64) -> Option<String> {
    let safe = sanitize_filename(filename);
    if safe.is_empty() || !allowed_image(&safe) {
        return None;
    }
    let (base, ext) = match safe.rfind('.') {
        Some(i) => safe.split_at(i),
        None => (safe.as_str(), ""),
    };
    Some(format!("{}_{}{}", base, unix_seconds, ext))
}

/// Save an upload under `upload_dir`, returning the relative stored path.
///
/// Returns `Ok(None)` for a missing or disallowed image; the report is then
/// stored without a photo.
pub fn save_image(
    upload_dir: &Path,
    upload: Option<&ImageUpload>,
) -> Result<Option<String>, UploadError> {
    let Some(upload) = upload else {
        return Ok(None);
    };
    let now = chrono::Utc::now().timestamp();
    let Some(name) = stored_image_name(&upload.filename, now) else {
        log::warn!("Ignoring image with unsupported name: {}", upload.filename);
        return Ok(None);
    };

    let io_err = |path: &Path, source: std::io::Error| UploadError::Io {
        path: path.display().to_string(),
        source,
    };
    std::fs::create_dir_all(upload_dir).map_err(|e| io_err(upload_dir, e))?;
    let path = upload_dir.join(&name);
    std::fs::write(&path, &upload.bytes).map_err(|e| io_err(&path, e))?;

    log::debug!("Saved image to {}", path.display());
    Ok(Some(format!("uploads/{}", name)))
}
