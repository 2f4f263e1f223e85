use super::{Attributes, Node};

/// Key naming the element in a mapping-form descriptor
pub const NAME_KEY: &str = "name";
/// Key holding the element content
pub const CONTENT_KEY: &str = "content";
/// Key holding the attribute set
pub const ATTRS_KEY: &str = "attrs";
/// Key holding the self-closing override
pub const SELF_CLOSE_KEY: &str = "selfClose";

/// Reserved keys that never become element names
pub const PRIVATE_MARKERS: [&str; 4] = [ATTRS_KEY, SELF_CLOSE_KEY, CONTENT_KEY, NAME_KEY];

pub fn is_private_marker(name: &str) -> bool {
    PRIVATE_MARKERS.contains(&name)
}

/// An explicit element descriptor.
///
/// `content: None` means the content was omitted and renders as nothing;
/// `content: Some(Node::Null)` means verbatim mode, where `name` is written
/// to the output as-is and no element is produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tag {
    pub name: String,
    pub content: Option<Node>,
    pub attrs: Option<Attributes>,
    /// `Some(true)` self-closes empty content, `Some(false)` keeps an
    /// open/close pair for it. Non-empty content never self-closes.
    pub self_close: Option<bool>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A descriptor whose name is injected verbatim, e.g. a pre-built fragment
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            name: text.into(),
            content: Some(Node::Null),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl Into<Attributes>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    /// Adds a single attribute, starting a map-form set if there is none
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.attrs
            .get_or_insert_with(Attributes::new)
            .insert(key, value);
        self
    }

    #[must_use]
    pub fn self_close(mut self, self_close: bool) -> Self {
        self.self_close = Some(self_close);
        self
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self.content, Some(Node::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_markers() {
        for marker in ["attrs", "selfClose", "content", "name"] {
            assert!(is_private_marker(marker));
        }
        assert!(!is_private_marker("my_attrs"));
        assert!(!is_private_marker("Attrs"));
    }

    #[test]
    fn test_builder() {
        let tag = Tag::new("a")
            .with_attr("href", "/")
            .with_attr("hidden", true)
            .with_content("home")
            .self_close(false);
        assert_eq!(tag.name, "a");
        assert_eq!(tag.content, Some(Node::from("home")));
        assert_eq!(tag.attrs.as_ref().map(Attributes::len), Some(2));
        assert_eq!(tag.self_close, Some(false));
        assert!(!tag.is_verbatim());
    }

    #[test]
    fn test_verbatim_vs_omitted_content() {
        assert!(Tag::verbatim("<!-- x -->").is_verbatim());
        assert!(!Tag::new("x").is_verbatim());
    }
}
