//! Namespaces and `namespace://topic` identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the namespace and the topic of an identifier.
pub const SCHEME_SEPARATOR: &str = "://";

/// A family of related documentation entries, one per sub-project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Primes,
    Esg,
    Aips,
    Scm,
    Common,
}

impl Namespace {
    /// Every namespace, in listing order.
    pub const ALL: [Namespace; 5] = [
        Namespace::Primes,
        Namespace::Esg,
        Namespace::Aips,
        Namespace::Scm,
        Namespace::Common,
    ];

    /// The scheme name used as the identifier prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primes => "primes",
            Self::Esg => "esg",
            Self::Aips => "aips",
            Self::Scm => "scm",
            Self::Common => "common",
        }
    }

    /// Look up a namespace by its exact scheme name.
    ///
    /// Matching is case-sensitive: `"Primes"` is not a namespace.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.as_str() == scheme)
    }

    /// The URI template clients can fill in for this namespace.
    pub fn uri_template(&self) -> String {
        format!("{}{}{{topic}}", self.as_str(), SCHEME_SEPARATOR)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `namespace://topic` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub namespace: Namespace,
    pub topic: String,
}

impl Identifier {
    /// Create an identifier from its parts.
    pub fn new(namespace: Namespace, topic: impl Into<String>) -> Self {
        Self {
            namespace,
            topic: topic.into(),
        }
    }

    /// Parse a raw identifier string.
    ///
    /// Returns `None` when the string has no `://` separator or when the
    /// prefix before it is not a known namespace. The topic is kept verbatim
    /// and may be empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (scheme, topic) = raw.split_once(SCHEME_SEPARATOR)?;
        let namespace = Namespace::from_scheme(scheme)?;
        Some(Self::new(namespace, topic))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SCHEME_SEPARATOR, self.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_namespace() {
        let id = Identifier::parse("primes://overview").unwrap();
        assert_eq!(id.namespace, Namespace::Primes);
        assert_eq!(id.topic, "overview");
        assert_eq!(id.to_string(), "primes://overview");
    }

    #[test]
    fn test_parse_keeps_topic_verbatim() {
        let id = Identifier::parse("aips://ai-features").unwrap();
        assert_eq!(id.topic, "ai-features");

        let id = Identifier::parse("scm://").unwrap();
        assert_eq!(id.namespace, Namespace::Scm);
        assert!(id.topic.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_or_malformed() {
        assert!(Identifier::parse("unknown://x").is_none());
        assert!(Identifier::parse("primes:/overview").is_none());
        assert!(Identifier::parse("primes").is_none());
        assert!(Identifier::parse("").is_none());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Identifier::parse("Primes://overview").is_none());
        assert!(Identifier::parse("ESG://overview").is_none());
    }

    #[test]
    fn test_uri_template() {
        assert_eq!(Namespace::Esg.uri_template(), "esg://{topic}");
    }
}
