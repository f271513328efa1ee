//! Filename derivation for report artifacts
//!
//! Converts a free-text label and an ISO-8601 timestamp into a
//! collision-resistant, filesystem-safe report filename of the form
//! `YYYY-MM-DD-HHmmss-<slug>.html`. Lexicographic filename order is
//! chronological by construction, so directory listings double as an index.

use chrono::{DateTime, Local};

use crate::error::{DevtrailError, Result};

/// Upper bound on slug length, to stay clear of path-length limits
const MAX_SLUG_LEN: usize = 100;

/// Slug substituted when a label sanitizes down to nothing
const FALLBACK_SLUG: &str = "untitled";

/// Sanitize a free-text label into a filename slug
///
/// Lower-cases, collapses every maximal run of non-alphanumeric characters
/// into a single hyphen, strips leading/trailing hyphens, and truncates to
/// [`MAX_SLUG_LEN`]. An empty, all-whitespace, or all-punctuation label
/// yields the literal `untitled` fallback; this function never returns an
/// empty string.
///
/// Output matches `[a-z0-9]+(-[a-z0-9]+)*` and sanitizing is idempotent.
pub fn sanitize_label(label: &str) -> String {
    let mut slug = String::with_capacity(label.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for c in label.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Render an ISO-8601 timestamp as a fixed-width filename stamp
///
/// The stamp uses local time-of-day components, zero-padded, in the form
/// `YYYY-MM-DD-HHmmss`, independent of locale.
///
/// # Errors
///
/// Returns a validation error when the timestamp cannot be parsed.
pub fn format_stamp(timestamp: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
        DevtrailError::Validation(format!("invalid timestamp '{}': {}", timestamp, e))
    })?;

    Ok(parsed
        .with_timezone(&Local)
        .format("%Y-%m-%d-%H%M%S")
        .to_string())
}

/// Compose the full report filename from a timestamp and a label
///
/// Two reports sharing the same second and the same sanitized label produce
/// the same filename, and the later write replaces the earlier one. That is
/// accepted behavior: callers wanting uniqueness vary the label.
pub fn report_filename(timestamp: &str, label: &str) -> Result<String> {
    Ok(format!(
        "{}-{}.html",
        format_stamp(timestamp)?,
        sanitize_label(label)
    ))
}
