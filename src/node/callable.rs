use super::Node;
use crate::RenderContext;
use std::fmt;
use std::sync::Arc;

type CallableFn = dyn Fn(&RenderContext<'_>) -> Node + Send + Sync;

/// A node computed at render time.
///
/// The closure receives the context of the position it is rendered at and is
/// invoked again on every render pass; results are never cached.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Node + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, ctx: &RenderContext<'_>) -> Node {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// Two callables are equal when they share the same closure.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
