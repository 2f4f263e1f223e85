//! xmlify: render a value tree as an XML document
//!
//! This crate provides functionality to:
//! - Build trees of mappings, sequences, scalars and explicit tag descriptors
//! - Render them as compact or pretty-printed XML
//! - Substitute text and attribute values through caller-defined filters
//! - Read trees from JSON documents
//!
//! # Examples
//! ```
//! use xmlify::{to_xml, to_xml_with_config, Mapping, Node, RenderConfig};
//!
//! let doc = Node::from(Mapping::new().with("a", Mapping::new().with("b", "c")));
//! assert_eq!(to_xml(&doc), "<a><b>c</b></a>");
//!
//! let pretty = to_xml_with_config(&doc, &RenderConfig::new().indent("  "));
//! assert_eq!(pretty, "<a>\n  <b>c</b>\n</a>");
//! ```
//!
//! Explicit descriptors carry attributes and self-closing overrides:
//! ```
//! use xmlify::{to_xml, Node, Tag};
//!
//! let link = Tag::new("a")
//!     .with_attr("href", "/")
//!     .with_attr("download", true)
//!     .with_content("home");
//! assert_eq!(to_xml(&Node::from(link)), r#"<a href="/" download>home</a>"#);
//! ```

#![forbid(unsafe_code)]

use tracing::{debug, instrument};

pub mod classify;
pub mod config;
pub mod error;
pub mod escape;
pub mod json;
pub mod node;
pub mod render;

// Re-exports
pub use classify::{classify, kind_of, Classified, Descriptor, Kind};
pub use config::{Header, RenderConfig, DEFAULT_HEADER};
pub use error::{Error, Result};
pub use escape::{escape, Filter};
pub use node::{Attributes, Callable, Mapping, Node, Tag};
pub use render::{format_attributes, render, to_tag_sequence, RenderContext};

/// Renders `node` as compact XML without a declaration or filters
pub fn to_xml(node: &Node) -> String {
    to_xml_with_config(node, &RenderConfig::default())
}

/// Renders `node` with the given configuration
#[instrument(skip_all, fields(pretty = config.is_pretty(), header = config.header.is_enabled()))]
pub fn to_xml_with_config(node: &Node, config: &RenderConfig) -> String {
    debug!(kind = ?kind_of(node), "starting render");
    let output = render(node, RenderContext::new(config));
    debug!(bytes = output.len(), "render finished");
    output
}
