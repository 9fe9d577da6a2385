// crates/nearby-core/src/text.rs

//! Key derivation between the two naming schemes.
//!
//! Coordinates are named the way the geo CSV names them (`"Bondi NSW"`);
//! content records are keyed by their file name (`bondi.json` -> `"Bondi"`).

use std::path::Path;

/// State suffixes stripped from coordinate names, in priority order.
pub const STATE_SUFFIXES: [&str; 4] = [" NSW", " VIC", " QLD", " TAS"];

/// Content-partition key for a coordinate name.
///
/// Removes the first matching suffix from [`STATE_SUFFIXES`]; any other
/// name comes back unchanged.
///
/// ```
/// use nearby_core::text::content_key;
///
/// assert_eq!(content_key("Bondi NSW"), "Bondi");
/// assert_eq!(content_key("Southport QLD"), "Southport");
/// assert_eq!(content_key("Fremantle WA"), "Fremantle WA");
/// ```
pub fn content_key(name: &str) -> &str {
    STATE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

/// Content-partition key for a record file: the file stem with its first
/// character upper-cased. Returns `None` for paths without a usable stem.
pub fn key_from_filename(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let mut chars = stem.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
