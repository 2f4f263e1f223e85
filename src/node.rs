//! Value tree accepted by the renderer

mod attributes;
mod callable;
mod tag;

pub use self::{
    attributes::{Attributes, Iter as AttributeIter},
    callable::Callable,
    tag::{
        is_private_marker, Tag, ATTRS_KEY, CONTENT_KEY, NAME_KEY, PRIVATE_MARKERS, SELF_CLOSE_KEY,
    },
};

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::ops::Index;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// A node of the tree handed to the renderer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Absent value. Renders as empty text; as the content of a tag it
    /// switches the tag to verbatim mode.
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (f64)
    Number(f64),
    /// String value
    String(String),
    /// Timestamp, rendered as RFC 3339
    Date(OffsetDateTime),
    /// Siblings rendered at the depth of the enclosing container
    Sequence(Vec<Node>),
    /// One element per key, in insertion order
    Mapping(Mapping),
    /// Explicit element descriptor
    Tag(Box<Tag>),
    /// Deferred node produced at render time
    Callable(Callable),
}

impl Node {
    /// Builds a tag whose name is emitted as-is, without escaping or wrapping.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self::Tag(Box::new(Tag::verbatim(text)))
    }

    /// Wraps a closure invoked with the render context on every pass.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&crate::RenderContext<'_>) -> Self + Send + Sync + 'static,
    {
        Self::Callable(Callable::new(f))
    }

    /// Returns the boolean value if this is a boolean, None otherwise
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value if this is a string, None otherwise
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if this is a mapping, None otherwise
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Loose truthiness: `Null`, `false`, `0`, `NaN` and `""` are falsy,
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Date(_)
            | Self::Sequence(_)
            | Self::Mapping(_)
            | Self::Tag(_)
            | Self::Callable(_) => true,
        }
    }

    /// Stringifies the node the way text content and attribute values see it.
    ///
    /// Sequences join their items with `,`. Mappings, tags and callables have
    /// no text form and yield the empty string.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::String(s) => Cow::Borrowed(s),
            Self::Date(dt) => Cow::Owned(format_date(dt)),
            Self::Sequence(items) => Cow::Owned(
                items
                    .iter()
                    .map(Self::to_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Self::Mapping(_) | Self::Tag(_) | Self::Callable(_) => Cow::Borrowed(""),
        }
    }
}

/// Plain positional decimal notation, never exponent form. Negative zero
/// prints as `0`.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        n.to_string()
    }
}

pub(crate) fn format_date(dt: &OffsetDateTime) -> String {
    dt.format(&Rfc3339).unwrap_or_else(|_| dt.to_string())
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Node {
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for Node {
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Node {
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<OffsetDateTime> for Node {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(values: Vec<Node>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(map: IndexMap<String, Node>) -> Self {
        Self::Mapping(Mapping(map))
    }
}

impl From<Tag> for Node {
    fn from(value: Tag) -> Self {
        Self::Tag(Box::new(value))
    }
}

impl From<Callable> for Node {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An order-preserving map of element names to nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping(pub(crate) IndexMap<String, Node>);

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the node stored under `key`
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Inserts an entry, returning the previous node if the key existed.
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    /// Returns true if the mapping contains `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns an iterator over the keys
    pub fn keys(&self) -> Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over entries in insertion order
    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.0.iter()
    }

    /// True when the `name` entry is truthy, which turns the mapping into a
    /// tag descriptor.
    pub fn is_descriptor(&self) -> bool {
        self.get(NAME_KEY).is_some_and(Node::is_truthy)
    }
}

impl Index<&str> for Mapping {
    type Output = Node;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Node);
    type IntoIter = IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, Node>> for Mapping {
    fn from(map: IndexMap<String, Node>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
