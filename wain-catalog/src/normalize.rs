//! Canonical comparison keys for plate and chassis numbers.
//!
//! Operators type identifiers inconsistently (`ab-12 34`, `AB1234`,
//! `ab/12.34`), so every key is reduced to one form before it is stored
//! or compared:
//! ```text
//! uppercase, then drop whitespace, '-', '_', '/', '.'
//! ```
//!
//! "Whitespace" also covers the ASCII information separators
//! `\x1c`..=`\x1f`, which `char::is_whitespace` leaves alone.
//!
//! No format validation happens here; any string survives.

/// Characters removed from a key after uppercasing.
const SEPARATORS: &[char] = &['-', '_', '/', '.'];

fn is_dropped(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f') || SEPARATORS.contains(&c)
}

/// Normalize a raw plate or chassis value into its comparison key.
///
/// # Examples
///
/// ```
/// use wain_catalog::normalize::normalize;
///
/// assert_eq!(normalize("ab-12 34"), "AB1234");
/// assert_eq!(normalize(" - / "), "");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    raw.to_uppercase()
        .chars()
        .filter(|&c| !is_dropped(c))
        .collect()
}

/// Normalize a licence plate.
pub fn normalize_plate(raw: &str) -> String {
    normalize(raw)
}

/// Normalize a chassis (VIN) number.
pub fn normalize_chassis(raw: &str) -> String {
    normalize(raw)
}

/// Normalize an optional value, mapping an empty key to `None`.
pub fn normalized_or_none(raw: Option<&str>) -> Option<String> {
    let key = normalize(raw.unwrap_or_default());
    if key.is_empty() { None } else { Some(key) }
}
