//! Resource path composition.
//!
//! Identity-scoped operations live under `{server}/{identifier}/{topic}/...`
//! so every client's data is partitioned by its identity prefix. Composition
//! is pure string work; the only failure mode is a malformed input segment.

use common::crypto::Identifier;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A topic or operation must stay a single path segment. Anything that a
/// URL parser would treat as structure (separators, dot segments) would let
/// a caller walk out of the identifier prefix, so it is rejected up front.
fn check_segment(label: &str, value: &str) -> Result<(), PathError> {
    if value.is_empty() {
        return Err(PathError::InvalidArgument(format!("empty {label}")));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(PathError::InvalidArgument(format!(
            "{label} must be a single path segment: {value:?}"
        )));
    }
    Ok(())
}

/// Replace the base path with the given segments, percent-encoding each one.
/// Segments are never re-parsed as URL syntax.
fn rooted(base: &Url, segments: &[&str]) -> Result<Url, PathError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| PathError::InvalidArgument(format!("remote {base} cannot carry a path")))?
        .clear()
        .extend(segments);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Compose an identity-scoped resource URL:
/// `{server}/{identifier}/{topic}/{operation}`.
pub fn resource_path(
    base: &Url,
    identifier: &Identifier,
    topic: &str,
    operation: &str,
) -> Result<Url, PathError> {
    check_segment("topic", topic)?;
    check_segment("operation", operation)?;

    rooted(base, &[identifier.as_str(), topic, operation])
}

/// Compose an unscoped per-topic URL: `{server}/{topic}/{operation}`.
pub fn topic_path(base: &Url, topic: &str, operation: &str) -> Result<Url, PathError> {
    check_segment("topic", topic)?;
    check_segment("operation", operation)?;

    rooted(base, &[topic, operation])
}
