use crate::classify::Descriptor;
use crate::node::{Attributes, Mapping, Node, Tag, ATTRS_KEY, CONTENT_KEY, SELF_CLOSE_KEY};
use std::borrow::Cow;

const HOISTED_KEYS: [&str; 3] = [ATTRS_KEY, SELF_CLOSE_KEY, CONTENT_KEY];

/// One descriptor per entry, in iteration order, content set to the value
pub fn to_tag_sequence(map: &Mapping) -> Vec<Tag> {
    map.iter()
        .map(|(key, value)| Tag::new(key.as_str()).with_content(value.clone()))
        .collect()
}

/// Descriptor for one entry of a plain mapping.
///
/// When `value` is itself a plain mapping, its `attrs` and `selfClose`
/// entries move onto the descriptor. A remaining `content` entry becomes the
/// element content on its own, or trails the other entries when it has
/// siblings. The hoisting works on a copy; `value` is left as it was.
pub fn implicit_descriptor<'a>(key: &'a str, value: &'a Node) -> Descriptor<'a> {
    let mut descriptor = Descriptor {
        name: Cow::Borrowed(key),
        content: Some(Cow::Borrowed(value)),
        attrs: None,
        self_close: None,
    };

    let Node::Mapping(inner) = value else {
        return descriptor;
    };
    if inner.is_descriptor() || !HOISTED_KEYS.iter().any(|marker| inner.contains_key(marker)) {
        return descriptor;
    }

    let mut rest = inner.clone();
    if let Some(attrs) = rest.remove(ATTRS_KEY) {
        descriptor.attrs = Attributes::from_node(&attrs).map(Cow::Owned);
    }
    if let Some(flag) = rest.remove(SELF_CLOSE_KEY) {
        descriptor.self_close = flag.as_bool();
    }

    let content = match rest.remove(CONTENT_KEY) {
        Some(content) if rest.is_empty() => content,
        Some(content) => {
            let mut items: Vec<Node> = to_tag_sequence(&rest)
                .into_iter()
                .map(Node::from)
                .collect();
            items.push(content);
            Node::Sequence(items)
        }
        None => Node::Mapping(rest),
    };
    descriptor.content = Some(Cow::Owned(content));
    descriptor
}
