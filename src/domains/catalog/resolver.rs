//! The catalog and its identifier resolution.
//!
//! Lookup is two-level: the namespace prefix selects a topic table, then the
//! topic is matched exactly within it. Entries are kept in registration order
//! for listing.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::definitions::{NamespaceDefinition, TopicDefinition};
use super::entry::{Entry, EntrySummary};
use super::error::CatalogError;
use super::identifier::{Identifier, Namespace};
use super::render::render_body;
use crate::core::config::SwaggerUrls;

/// Outcome of resolving an identifier.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    /// Known namespace and known topic.
    Content(&'a Entry),

    /// Known namespace, unknown topic: the namespace's not-found text.
    Placeholder {
        namespace: Namespace,
        message: &'static str,
    },

    /// The namespace prefix is not registered (or the separator is missing).
    UnknownNamespace,
}

impl<'a> Resolution<'a> {
    /// The text to serve, if any.
    pub fn body(&self) -> Option<&'a str> {
        match *self {
            Self::Content(entry) => Some(entry.body.as_str()),
            Self::Placeholder { message, .. } => Some(message),
            Self::UnknownNamespace => None,
        }
    }

    /// The matched entry, if the identifier was fully known.
    pub fn entry(&self) -> Option<&'a Entry> {
        match *self {
            Self::Content(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn is_unknown_namespace(&self) -> bool {
        matches!(self, Self::UnknownNamespace)
    }
}

/// Topic table for one namespace.
#[derive(Debug)]
struct NamespaceTable {
    not_found: &'static str,
    /// Topic -> index into `Catalog::entries`.
    topics: HashMap<String, usize>,
}

/// The immutable set of documentation entries.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
    namespaces: HashMap<Namespace, NamespaceTable>,
    tools: HashMap<&'static str, usize>,
    swagger_urls: SwaggerUrls,
    rejected_duplicates: usize,
}

impl Catalog {
    /// Start building a catalog whose bodies are rendered with `swagger_urls`.
    pub fn builder(swagger_urls: SwaggerUrls) -> CatalogBuilder {
        CatalogBuilder {
            entries: Vec::new(),
            namespaces: HashMap::new(),
            tools: HashMap::new(),
            swagger_urls,
            rejected_duplicates: 0,
        }
    }

    /// Summaries of every entry, in registration order.
    pub fn list_entries(&self) -> Vec<EntrySummary> {
        self.entries.iter().map(Entry::summary).collect()
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Resolve an identifier such as `primes://overview`.
    ///
    /// Never fails: an unknown topic in a known namespace yields the
    /// namespace's placeholder, anything else unknown yields
    /// [`Resolution::UnknownNamespace`].
    pub fn resolve(&self, identifier: &str) -> Resolution<'_> {
        let Some(parsed) = Identifier::parse(identifier) else {
            debug!("No namespace matches identifier: {}", identifier);
            return Resolution::UnknownNamespace;
        };

        let Some(table) = self.namespaces.get(&parsed.namespace) else {
            debug!("Namespace not registered: {}", parsed.namespace);
            return Resolution::UnknownNamespace;
        };

        match table.topics.get(parsed.topic.as_str()) {
            Some(&index) => Resolution::Content(&self.entries[index]),
            None => {
                debug!("Unknown topic '{}' in namespace {}", parsed.topic, parsed.namespace);
                Resolution::Placeholder {
                    namespace: parsed.namespace,
                    message: table.not_found,
                }
            }
        }
    }

    /// Find the entry served by a parameterless tool.
    pub fn entry_by_tool_name(&self, tool_name: &str) -> Option<&Entry> {
        self.tools.get(tool_name).map(|&index| &self.entries[index])
    }

    /// Registered namespaces, in declaration order of [`Namespace::ALL`].
    pub fn namespaces(&self) -> Vec<Namespace> {
        Namespace::ALL
            .into_iter()
            .filter(|ns| self.namespaces.contains_key(ns))
            .collect()
    }

    /// The configuration values interpolated into the bodies.
    pub fn swagger_urls(&self) -> &SwaggerUrls {
        &self.swagger_urls
    }

    /// Number of registrations rejected because their key was already taken.
    pub fn rejected_duplicates(&self) -> usize {
        self.rejected_duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`Catalog`].
///
/// Registration is first-write-wins: a topic whose identifier or tool name is
/// already taken is rejected and counted, never overwriting the earlier one.
pub struct CatalogBuilder {
    entries: Vec<Entry>,
    namespaces: HashMap<Namespace, NamespaceTable>,
    tools: HashMap<&'static str, usize>,
    swagger_urls: SwaggerUrls,
    rejected_duplicates: usize,
}

impl CatalogBuilder {
    /// Declare a namespace and register all of its topics.
    pub fn namespace<N: NamespaceDefinition>(mut self) -> Self {
        self.declare_namespace(N::NAMESPACE, N::NOT_FOUND);
        for topic in N::topics() {
            // Rejections are logged and counted by `register`.
            let _ = self.register(N::NAMESPACE, topic);
        }
        self
    }

    /// Declare a namespace with its not-found text.
    ///
    /// Declaring the same namespace again keeps the first text.
    pub fn declare_namespace(&mut self, namespace: Namespace, not_found: &'static str) {
        self.namespaces
            .entry(namespace)
            .or_insert_with(|| NamespaceTable {
                not_found,
                topics: HashMap::new(),
            });
    }

    /// Register one topic in a declared namespace.
    pub fn register(
        &mut self,
        namespace: Namespace,
        topic: TopicDefinition,
    ) -> Result<(), CatalogError> {
        let identifier = Identifier::new(namespace, topic.topic);

        let Some(table) = self.namespaces.get_mut(&namespace) else {
            warn!("Cannot register {}: namespace not declared", identifier);
            return Err(CatalogError::unknown_namespace(identifier.to_string()));
        };

        if table.topics.contains_key(topic.topic) {
            warn!("Duplicate identifier {} rejected, keeping the first registration", identifier);
            self.rejected_duplicates += 1;
            return Err(CatalogError::duplicate_identifier(identifier.to_string()));
        }

        if self.tools.contains_key(topic.tool_name) {
            warn!("Duplicate tool name {} rejected for {}", topic.tool_name, identifier);
            self.rejected_duplicates += 1;
            return Err(CatalogError::duplicate_identifier(topic.tool_name));
        }

        debug!("Registering catalog entry: {}", identifier);
        let index = self.entries.len();
        table.topics.insert(topic.topic.to_string(), index);
        self.tools.insert(topic.tool_name, index);
        self.entries.push(Entry {
            identifier,
            title: topic.title,
            description: topic.description,
            tool_name: topic.tool_name,
            body: render_body(topic.template, &self.swagger_urls),
        });

        Ok(())
    }

    /// Finish building.
    pub fn build(self) -> Catalog {
        info!(
            "Catalog built: {} entries in {} namespaces ({} duplicates rejected)",
            self.entries.len(),
            self.namespaces.len(),
            self.rejected_duplicates
        );

        Catalog {
            entries: self.entries,
            namespaces: self.namespaces,
            tools: self.tools,
            swagger_urls: self.swagger_urls,
            rejected_duplicates: self.rejected_duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: &str = "테스트 정보를 찾을 수 없습니다.";

    fn topic(name: &'static str, title: &'static str, tool: &'static str) -> TopicDefinition {
        TopicDefinition {
            topic: name,
            title,
            description: "test",
            tool_name: tool,
            template: "# Test\n{{esg}}",
        }
    }

    fn small_catalog() -> Catalog {
        let mut builder = Catalog::builder(SwaggerUrls::default());
        builder.declare_namespace(Namespace::Esg, NOT_FOUND);
        builder
            .register(Namespace::Esg, topic("overview", "Overview", "get_esg_overview"))
            .unwrap();
        builder
            .register(Namespace::Esg, topic("swagger", "Swagger", "get_esg_swagger"))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_resolve_known_topic() {
        let catalog = small_catalog();
        let resolution = catalog.resolve("esg://swagger");
        let entry = resolution.entry().expect("entry");
        assert_eq!(entry.title, "Swagger");
        assert!(entry.body.contains("https://api.esg.primes-cloud.co.kr/api-docs/esg"));
    }

    #[test]
    fn test_resolve_unknown_topic_is_placeholder() {
        let catalog = small_catalog();
        let resolution = catalog.resolve("esg://nothing");
        assert!(resolution.is_placeholder());
        assert_eq!(resolution.body(), Some(NOT_FOUND));
    }

    #[test]
    fn test_resolve_undeclared_namespace() {
        let catalog = small_catalog();
        assert!(catalog.resolve("primes://overview").is_unknown_namespace());
        assert!(catalog.resolve("nope://overview").is_unknown_namespace());
        assert!(catalog.resolve("esg:overview").is_unknown_namespace());
        assert!(catalog.resolve("esg://overview").body().is_some());
    }

    #[test]
    fn test_topic_match_is_exact() {
        let catalog = small_catalog();
        assert!(catalog.resolve("esg://Overview").is_placeholder());
        assert!(catalog.resolve("esg://overview/").is_placeholder());
        assert!(catalog.resolve("esg://over").is_placeholder());
        assert!(catalog.resolve("esg:// overview").is_placeholder());
    }

    #[test]
    fn test_duplicate_identifier_first_write_wins() {
        let mut builder = Catalog::builder(SwaggerUrls::default());
        builder.declare_namespace(Namespace::Esg, NOT_FOUND);
        builder
            .register(Namespace::Esg, topic("swagger", "First", "get_first"))
            .unwrap();
        let err = builder
            .register(Namespace::Esg, topic("swagger", "Second", "get_second"))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateIdentifier("esg://swagger".to_string()));

        let catalog = builder.build();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rejected_duplicates(), 1);
        assert_eq!(catalog.resolve("esg://swagger").entry().unwrap().title, "First");
        assert!(catalog.entry_by_tool_name("get_second").is_none());
    }

    #[test]
    fn test_duplicate_tool_name_rejected() {
        let mut builder = Catalog::builder(SwaggerUrls::default());
        builder.declare_namespace(Namespace::Esg, NOT_FOUND);
        builder
            .register(Namespace::Esg, topic("a", "A", "get_same"))
            .unwrap();
        assert!(builder
            .register(Namespace::Esg, topic("b", "B", "get_same"))
            .is_err());

        let catalog = builder.build();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.resolve("esg://b").is_placeholder());
    }

    #[test]
    fn test_register_requires_declared_namespace() {
        let mut builder = Catalog::builder(SwaggerUrls::default());
        let err = builder
            .register(Namespace::Scm, topic("overview", "O", "get_scm_overview"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownNamespace(_)));
    }

    #[test]
    fn test_list_entries_keeps_registration_order() {
        let catalog = small_catalog();
        let ids: Vec<_> = catalog
            .list_entries()
            .into_iter()
            .map(|s| s.identifier)
            .collect();
        assert_eq!(ids, vec!["esg://overview", "esg://swagger"]);
    }

    #[test]
    fn test_entry_by_tool_name() {
        let catalog = small_catalog();
        let entry = catalog.entry_by_tool_name("get_esg_overview").unwrap();
        assert_eq!(entry.uri(), "esg://overview");
        assert!(catalog.entry_by_tool_name("get_nothing").is_none());
    }
}
