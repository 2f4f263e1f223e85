//! JSON input adapter
//!
//! JSON maps directly onto the node tree: objects become mappings (key order
//! preserved), arrays become sequences and `null` becomes [`Node::Null`], so
//! `{"a": null}` renders the verbatim text `a`. Objects with a truthy `"name"`
//! entry are tag descriptors.

use crate::error::Result;
use crate::node::Node;
use serde_json::Value as JsonValue;
use tracing::debug;

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or_default()),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Node {
    /// Parses a JSON document into a node tree
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) for malformed input.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(input)?;
        debug!(bytes = input.len(), "parsed JSON input");
        Ok(value.into())
    }
}
