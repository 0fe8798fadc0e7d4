//! Slug normalisation.

/// Lowercase, spaces to underscores, apostrophes removed.
///
/// Applied to every slug before it is written, whether it was supplied by
/// the caller or derived from the title.
pub fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_").replace('\'', "")
}
