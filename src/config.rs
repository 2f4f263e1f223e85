use crate::error::Result;
use crate::escape::Filter;

/// Declaration emitted for [`Header::Standard`]
pub const DEFAULT_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// XML declaration policy
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Header {
    #[default]
    Off,
    /// Emit [`DEFAULT_HEADER`]
    Standard,
    /// Emit the given string as-is
    Custom(String),
}

impl Header {
    /// The text to emit, if any. An empty custom declaration counts as off.
    pub fn declaration(&self) -> Option<&str> {
        match self {
            Self::Off => None,
            Self::Standard => Some(DEFAULT_HEADER),
            Self::Custom(text) if text.is_empty() => None,
            Self::Custom(text) => Some(text),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.declaration().is_some()
    }
}

impl From<bool> for Header {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Standard
        } else {
            Self::Off
        }
    }
}

impl From<&str> for Header {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<String> for Header {
    fn from(text: String) -> Self {
        if text.is_empty() {
            Self::Off
        } else {
            Self::Custom(text)
        }
    }
}

/// Configuration options for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// XML declaration to put in front of the output
    pub header: Header,
    /// Repeated once per nesting level; empty disables pretty-printing
    pub indent_unit: String,
    /// Applied to text content
    pub text_filter: Option<Filter>,
    /// Applied to attribute values
    pub attribute_filter: Option<Filter>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with [`Filter::xml_text`] and [`Filter::xml_attribute`] installed
    ///
    /// # Errors
    ///
    /// Propagates filter construction errors.
    pub fn escaped() -> Result<Self> {
        Ok(Self::default()
            .text_filter(Filter::xml_text()?)
            .attribute_filter(Filter::xml_attribute()?))
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<Header>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    #[must_use]
    pub fn text_filter(mut self, filter: Filter) -> Self {
        self.text_filter = Some(filter);
        self
    }

    #[must_use]
    pub fn attribute_filter(mut self, filter: Filter) -> Self {
        self.attribute_filter = Some(filter);
        self
    }

    /// True when an indent unit is set
    pub fn is_pretty(&self) -> bool {
        !self.indent_unit.is_empty()
    }
}
