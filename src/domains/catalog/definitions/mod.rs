//! Catalog content definitions.
//!
//! Each namespace is defined in its own file with:
//! - its not-found placeholder
//! - the topics it serves, in listing order
//!
//! ## Adding a New Topic
//!
//! 1. Add a `TopicDefinition` to the namespace file
//! 2. Write its body as a markdown constant (`{{key}}` for Swagger URLs)
//!
//! The registry, the resource listing and the tool router pick it up.

pub mod aips;
pub mod common;
pub mod esg;
pub mod primes;
pub mod scm;

pub use aips::AipsDocs;
pub use common::CommonDocs;
pub use esg::EsgDocs;
pub use primes::PrimesDocs;
pub use scm::ScmDocs;

use super::identifier::Namespace;

/// Text every namespace placeholder contains ("cannot be found").
pub const NOT_FOUND_MARKER: &str = "찾을 수 없습니다";

/// Static description of one topic within a namespace.
#[derive(Debug, Clone, Copy)]
pub struct TopicDefinition {
    /// Topic part of the identifier.
    pub topic: &'static str,

    /// Display title.
    pub title: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Name of the parameterless tool serving this topic.
    pub tool_name: &'static str,

    /// Markdown body with `{{key}}` placeholders.
    pub template: &'static str,
}

/// Trait for namespace definitions.
pub trait NamespaceDefinition {
    /// The namespace these topics live in.
    const NAMESPACE: Namespace;

    /// Body returned for an unknown topic in this namespace.
    const NOT_FOUND: &'static str;

    /// The topics of this namespace, in registration order.
    fn topics() -> Vec<TopicDefinition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<N: NamespaceDefinition>() {
        assert!(N::NOT_FOUND.contains(NOT_FOUND_MARKER));
        for topic in N::topics() {
            assert!(!topic.topic.is_empty());
            assert!(topic.tool_name.starts_with("get_"));
            assert!(topic.template.starts_with("# "));
        }
    }

    #[test]
    fn test_definitions_are_well_formed() {
        check::<PrimesDocs>();
        check::<EsgDocs>();
        check::<AipsDocs>();
        check::<ScmDocs>();
        check::<CommonDocs>();
    }
}
