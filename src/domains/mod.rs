//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: the documentation entries and their lookup
//! - **resources**: the catalog exposed as MCP resources
//! - **tools**: the catalog exposed as MCP tools

pub mod catalog;
pub mod resources;
pub mod tools;
