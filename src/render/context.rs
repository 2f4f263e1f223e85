use crate::config::RenderConfig;

/// Position-dependent state threaded through one render pass.
///
/// The context is a small `Copy` value; every recursive call receives its own
/// copy produced by [`nested`](Self::nested) or [`sibling`](Self::sibling).
/// Callables receive a reference to the context of the position they are
/// rendered at.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a RenderConfig,
    depth: usize,
    is_first_item: bool,
    is_last_item: bool,
    leads_output: bool,
}

impl<'a> RenderContext<'a> {
    /// Context for the outermost call
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            depth: 0,
            is_first_item: false,
            is_last_item: false,
            leads_output: true,
        }
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// First element of its sequence or first entry of its mapping
    pub fn is_first_item(&self) -> bool {
        self.is_first_item
    }

    /// Last element of its sequence or last entry of its mapping
    pub fn is_last_item(&self) -> bool {
        self.is_last_item
    }

    /// Nothing has been rendered ahead of this position, so the declaration
    /// may still be emitted here.
    pub(crate) fn leads_output(&self) -> bool {
        self.leads_output
    }

    pub fn is_pretty(&self) -> bool {
        self.config.is_pretty()
    }

    /// The indent unit repeated `depth` times
    pub fn indent(&self) -> String {
        self.config.indent_unit.repeat(self.depth)
    }

    /// Context for the content of an element: one level deeper
    #[must_use]
    pub fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            leads_output: false,
            ..self
        }
    }

    /// Context for item `index` of a container holding `len` items, at the
    /// container's depth
    #[must_use]
    pub fn sibling(self, index: usize, len: usize) -> Self {
        Self {
            is_first_item: index == 0,
            is_last_item: index + 1 == len,
            leads_output: self.leads_output && index == 0,
            ..self
        }
    }

    #[must_use]
    pub(crate) fn without_header(self) -> Self {
        Self {
            leads_output: false,
            ..self
        }
    }
}
