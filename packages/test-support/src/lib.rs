//! Shared helpers for scoreboard test binaries: one logging entry point and
//! collision-free fixture names.

pub mod logging;

use ulid::Ulid;

/// Unique string in the form `{prefix}-{ulid}`.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("seat");
/// assert_ne!(a, unique_str("seat"));
/// assert!(a.starts_with("seat-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `count` distinct player names sharing one prefix.
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|seat| unique_str(&format!("{prefix}{seat}")))
        .collect()
}
