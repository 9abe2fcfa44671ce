//! Key namespacing
//!
//! A [`KeyPrefix`] is joined to the caller's key with a colon before every
//! operation. Keys with no prefix configured pass through untouched.

use std::fmt;

/// Optional key-namespace prefix applied ahead of every operation.
///
/// The prefix is concatenated with a colon separator; no escaping or
/// collision detection is performed. Prefix `"a"` with key `"b:c"` and
/// prefix `"a:b"` with key `"c"` address the same effective key.
///
/// An empty prefix string is treated as no prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPrefix(Option<String>);

impl KeyPrefix {
    /// Create a prefix from a string
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::from_option(Some(prefix.into()))
    }

    /// No prefix; keys pass through untouched
    pub fn none() -> Self {
        Self(None)
    }

    /// Create from an optional prefix, normalizing empty strings to none
    pub fn from_option(prefix: Option<String>) -> Self {
        Self(prefix.filter(|p| !p.is_empty()))
    }

    /// The configured prefix, if any
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Compute the effective key for `key` under this prefix
    pub fn apply(&self, key: &str) -> String {
        match &self.0 {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_with_prefix() {
        let prefix = KeyPrefix::new("sessions");
        assert_eq!(prefix.apply("username"), "sessions:username");
    }

    #[test]
    fn apply_without_prefix() {
        let prefix = KeyPrefix::none();
        assert_eq!(prefix.apply("username"), "username");
    }

    #[test]
    fn empty_prefix_is_none() {
        let prefix = KeyPrefix::new("");
        assert_eq!(prefix.as_str(), None);
        assert_eq!(prefix.apply("key"), "key");
    }

    #[test]
    fn from_option_round_trip() {
        assert_eq!(KeyPrefix::from_option(None), KeyPrefix::none());
        assert_eq!(
            KeyPrefix::from_option(Some("app".to_string())).as_str(),
            Some("app")
        );
    }

    #[test]
    fn prefix_boundaries_can_collide() {
        // Documented behavior: colon concatenation with no escaping means
        // distinct (prefix, key) pairs can share an effective key.
        let a = KeyPrefix::new("a");
        let ab = KeyPrefix::new("a:b");
        assert_eq!(a.apply("b:c"), ab.apply("c"));
    }

    #[test]
    fn display_matches_configured_prefix() {
        assert_eq!(KeyPrefix::new("app").to_string(), "app");
        assert_eq!(KeyPrefix::none().to_string(), "");
    }
}
