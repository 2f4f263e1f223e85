//! Node classification
//!
//! Every node falls into exactly one [`Kind`]. The checks run in a fixed
//! order: sequence, tag descriptor, date, absent, then callable, mapping and
//! scalar. A mapping only counts as a tag descriptor when its `name` entry is
//! truthy; a falsy or missing name leaves it a plain mapping even if it has
//! `content` or `attrs` entries.

use crate::node::{
    Attributes, Callable, Mapping, Node, Tag, ATTRS_KEY, CONTENT_KEY, NAME_KEY, SELF_CLOSE_KEY,
};
use std::borrow::Cow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Sequence,
    Tag,
    Date,
    Absent,
    Callable,
    Mapping,
    Scalar,
}

impl Kind {
    /// Kinds that render as a single piece of text or markup
    pub fn is_unit(self) -> bool {
        matches!(self, Self::Tag | Self::Date | Self::Scalar)
    }
}

/// An element descriptor, borrowed from an explicit [`Tag`] or read out of a
/// mapping-form descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<'a> {
    pub name: Cow<'a, str>,
    pub content: Option<Cow<'a, Node>>,
    pub attrs: Option<Cow<'a, Attributes>>,
    pub self_close: Option<bool>,
}

impl<'a> Descriptor<'a> {
    pub fn from_tag(tag: &'a Tag) -> Self {
        Self {
            name: Cow::Borrowed(&tag.name),
            content: tag.content.as_ref().map(Cow::Borrowed),
            attrs: tag.attrs.as_ref().map(Cow::Borrowed),
            self_close: tag.self_close,
        }
    }

    /// Only a boolean `selfClose` entry counts as an override.
    pub fn from_mapping(map: &'a Mapping) -> Self {
        Self {
            name: map.get(NAME_KEY).map_or(Cow::Borrowed(""), Node::to_text),
            content: map.get(CONTENT_KEY).map(Cow::Borrowed),
            attrs: map
                .get(ATTRS_KEY)
                .and_then(Attributes::from_node)
                .map(Cow::Owned),
            self_close: map.get(SELF_CLOSE_KEY).and_then(Node::as_bool),
        }
    }

    /// Content explicitly set to [`Node::Null`]
    pub fn is_verbatim(&self) -> bool {
        matches!(self.content.as_deref(), Some(Node::Null))
    }
}

/// A node viewed through its kind
#[derive(Debug, Clone)]
pub enum Classified<'a> {
    Sequence(&'a [Node]),
    Tag(Descriptor<'a>),
    Date(&'a OffsetDateTime),
    Absent,
    Callable(&'a Callable),
    Mapping(&'a Mapping),
    Scalar(&'a Node),
}

impl Classified<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Sequence(_) => Kind::Sequence,
            Self::Tag(_) => Kind::Tag,
            Self::Date(_) => Kind::Date,
            Self::Absent => Kind::Absent,
            Self::Callable(_) => Kind::Callable,
            Self::Mapping(_) => Kind::Mapping,
            Self::Scalar(_) => Kind::Scalar,
        }
    }
}

pub fn classify(node: &Node) -> Classified<'_> {
    match node {
        Node::Sequence(items) => Classified::Sequence(items),
        Node::Tag(tag) => Classified::Tag(Descriptor::from_tag(tag)),
        Node::Mapping(map) if map.is_descriptor() => {
            Classified::Tag(Descriptor::from_mapping(map))
        }
        Node::Date(dt) => Classified::Date(dt),
        Node::Null => Classified::Absent,
        Node::Callable(callable) => Classified::Callable(callable),
        Node::Mapping(map) => Classified::Mapping(map),
        Node::Bool(_) | Node::Number(_) | Node::String(_) => Classified::Scalar(node),
    }
}

pub fn kind_of(node: &Node) -> Kind {
    classify(node).kind()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_kinds() {
        assert_eq!(kind_of(&Node::Sequence(Vec::new())), Kind::Sequence);
        assert_eq!(kind_of(&Node::from(Tag::new("a"))), Kind::Tag);
        assert_eq!(
            kind_of(&Node::from(datetime!(2020-01-01 0:00 UTC))),
            Kind::Date
        );
        assert_eq!(kind_of(&Node::Null), Kind::Absent);
        assert_eq!(kind_of(&Node::callable(|_| Node::Null)), Kind::Callable);
        assert_eq!(kind_of(&Node::from(Mapping::new())), Kind::Mapping);
        assert_eq!(kind_of(&Node::from("x")), Kind::Scalar);
        assert_eq!(kind_of(&Node::from(3)), Kind::Scalar);
        assert_eq!(kind_of(&Node::from(false)), Kind::Scalar);
    }

    #[test]
    fn test_mapping_with_truthy_name_is_tag() {
        let node = Node::from(Mapping::new().with("name", "br"));
        assert_eq!(kind_of(&node), Kind::Tag);

        let numeric = Node::from(Mapping::new().with("name", 5));
        assert_eq!(kind_of(&numeric), Kind::Tag);
    }

    #[test]
    fn test_mapping_with_falsy_name_is_mapping() {
        let empty = Mapping::new().with("name", "").with("attrs", Mapping::new());
        assert_eq!(kind_of(&Node::from(empty)), Kind::Mapping);

        let null = Mapping::new().with("name", Node::Null);
        assert_eq!(kind_of(&Node::from(null)), Kind::Mapping);
    }

    #[test]
    fn test_units() {
        assert!(Kind::Tag.is_unit());
        assert!(Kind::Scalar.is_unit());
        assert!(Kind::Date.is_unit());
        assert!(!Kind::Absent.is_unit());
        assert!(!Kind::Mapping.is_unit());
        assert!(!Kind::Sequence.is_unit());
        assert!(!Kind::Callable.is_unit());
    }

    #[test]
    fn test_descriptor_from_mapping() {
        let map = Mapping::new()
            .with("name", "img")
            .with("attrs", Mapping::new().with("src", "a.png"))
            .with("selfClose", "yes");
        let descriptor = Descriptor::from_mapping(&map);
        assert_eq!(descriptor.name, "img");
        assert_eq!(descriptor.content, None);
        assert_eq!(descriptor.attrs.as_ref().map(|a| a.len()), Some(1));
        assert_eq!(descriptor.self_close, None);
        assert!(!descriptor.is_verbatim());
    }

    #[test]
    fn test_descriptor_verbatim() {
        let map = Mapping::new().with("name", "raw").with("content", Node::Null);
        assert!(Descriptor::from_mapping(&map).is_verbatim());
        assert!(Descriptor::from_tag(&Tag::verbatim("raw")).is_verbatim());
    }
}
