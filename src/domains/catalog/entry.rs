//! Catalog entries and their listing summaries.

use serde::Serialize;

use super::identifier::Identifier;

/// Media type shared by every catalog body.
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// One addressable unit of documentation.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The `namespace://topic` key.
    pub identifier: Identifier,

    /// Short human-readable label.
    pub title: &'static str,

    /// One-line summary.
    pub description: &'static str,

    /// Name of the tool that serves this entry without parameters.
    pub tool_name: &'static str,

    /// Markdown body with configuration values already interpolated.
    pub body: String,
}

impl Entry {
    /// The media type of the body.
    pub fn mime_type(&self) -> &'static str {
        MARKDOWN_MIME_TYPE
    }

    /// The identifier rendered as a URI string.
    pub fn uri(&self) -> String {
        self.identifier.to_string()
    }

    /// Build the listing summary for this entry.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            identifier: self.uri(),
            title: self.title,
            description: self.description,
            mime_type: self.mime_type(),
        }
    }
}

/// What `list_entries` reports for each entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub identifier: String,
    pub title: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}
