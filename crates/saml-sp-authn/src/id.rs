//! Request identifier generation.
//!
//! Identifiers double as correlation handles: callers record the id of an
//! outbound request and match it against `InResponseTo` on the response.

use std::fmt::Debug;

use uuid::Uuid;

/// Source of unique SAML message identifiers.
///
/// Implementations must be safe to share across threads and must return
/// values that are valid XML `NCName`s (in particular, never starting with
/// a digit).
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}

/// Random identifier generator backed by v4 UUIDs.
///
/// Produces `_id` followed by a hyphenated UUID, giving 122 bits of
/// entropy per identifier.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    prefix: String,
}

impl RandomIdGenerator {
    /// Default identifier prefix.
    pub const DEFAULT_PREFIX: &'static str = "_id";

    /// Creates a generator with the default prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a custom prefix.
    ///
    /// The prefix must itself start with a letter or underscore so that the
    /// result stays a valid `NCName`; otherwise the default is used.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if starts_ncname(&prefix) {
            Self { prefix }
        } else {
            Self::default()
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        format!("{}{}", self.prefix, Uuid::new_v4())
    }
}

fn starts_ncname(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_start_with_prefix() {
        let id = RandomIdGenerator::new().next_id();
        assert!(id.starts_with("_id"));
        assert_eq!(id.len(), 3 + 36);
    }

    #[test]
    fn ids_are_ncname_safe() {
        let generator = RandomIdGenerator::new();
        for _ in 0..100 {
            let id = generator.next_id();
            assert!(starts_ncname(&id));
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        }
    }

    #[test]
    fn ids_are_unique() {
        let generator = RandomIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn digit_prefix_falls_back_to_default() {
        let id = RandomIdGenerator::with_prefix("9bad").next_id();
        assert!(id.starts_with("_id"));

        let id = RandomIdGenerator::with_prefix("SP_").next_id();
        assert!(id.starts_with("SP_"));
    }
}
