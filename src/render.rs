//! Recursive renderer
//!
//! One depth-first walk over the tree. Mappings and sequences add no nesting
//! level of their own; only element content is rendered one level deeper.
//!
//! Pretty-printing puts a newline and indent in front of every element that
//! is not at the start of the output, and in front of a closing tag whose
//! content contains markup. A depth-0 element always counts as the start of
//! the output, so siblings at the top level are never separated by newlines.

mod attributes;
mod context;
mod mapping;

pub use self::{
    attributes::format_attributes,
    context::RenderContext,
    mapping::{implicit_descriptor, to_tag_sequence},
};

use crate::classify::{classify, Classified, Descriptor, Kind};
use crate::escape::escape;
use crate::node::{format_date, is_private_marker, Mapping, Node};
use tracing::trace;

/// Renders `node` at the position described by `ctx`
pub fn render(node: &Node, ctx: RenderContext<'_>) -> String {
    render_classified(classify(node), ctx)
}

fn render_classified(class: Classified<'_>, ctx: RenderContext<'_>) -> String {
    let kind = class.kind();
    let output_start = is_output_start(kind, &ctx);
    let header = if output_start && ctx.leads_output() {
        ctx.config().header.declaration()
    } else {
        None
    };
    let ctx = if header.is_some() {
        ctx.without_header()
    } else {
        ctx
    };
    trace!(?kind, depth = ctx.depth(), output_start, "rendering node");

    let body = match class {
        Classified::Sequence(items) => render_sequence(items, ctx),
        Classified::Mapping(map) => render_mapping(map, ctx),
        Classified::Callable(callable) => render(&callable.call(&ctx), ctx),
        Classified::Tag(descriptor) => render_tag(&descriptor, ctx, output_start),
        Classified::Scalar(node) => render_text(&node.to_text(), ctx),
        Classified::Date(dt) => render_text(&format_date(dt), ctx),
        Classified::Absent => String::new(),
    };

    match header {
        Some(declaration) => {
            let mut out = String::with_capacity(declaration.len() + 1 + body.len());
            out.push_str(declaration);
            if ctx.is_pretty() {
                out.push('\n');
            }
            out.push_str(&body);
            out
        }
        None => body,
    }
}

/// Units at depth 0 always start the output; containers at depth 0 only when
/// they are the first item of their group.
fn is_output_start(kind: Kind, ctx: &RenderContext<'_>) -> bool {
    ctx.depth() == 0 && (kind.is_unit() || ctx.is_first_item())
}

fn render_sequence(items: &[Node], ctx: RenderContext<'_>) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| render(item, ctx.sibling(index, items.len())))
        .collect()
}

fn render_mapping(map: &Mapping, ctx: RenderContext<'_>) -> String {
    let len = map.len();
    map.iter()
        .enumerate()
        .map(|(index, (key, value))| {
            render_classified(
                Classified::Tag(implicit_descriptor(key, value)),
                ctx.sibling(index, len),
            )
        })
        .collect()
}

fn render_tag(tag: &Descriptor<'_>, ctx: RenderContext<'_>, output_start: bool) -> String {
    if tag.is_verbatim() {
        return tag.name.to_string();
    }
    if is_private_marker(&tag.name) {
        return String::new();
    }

    let child = tag
        .content
        .as_deref()
        .map(|content| render(content, ctx.nested()))
        .unwrap_or_default();
    let child_is_simple = !child.contains('<');
    let self_closing = child.is_empty() && tag.self_close.unwrap_or(true);

    let pretty = ctx.is_pretty();
    let indent = ctx.indent();
    let attributes = format_attributes(
        tag.attrs.as_deref(),
        ctx.config().attribute_filter.as_ref(),
    );

    let mut out = String::with_capacity(
        child.len() + attributes.len() + 2 * (tag.name.len() + indent.len()) + 8,
    );
    if pretty && !output_start {
        out.push('\n');
    }
    out.push_str(&indent);
    out.push('<');
    out.push_str(&tag.name);
    out.push_str(&attributes);
    if self_closing {
        out.push_str("/>");
        return out;
    }
    out.push('>');
    out.push_str(&child);
    if pretty && !child_is_simple {
        out.push('\n');
        out.push_str(&indent);
    }
    out.push_str("</");
    out.push_str(&tag.name);
    out.push('>');
    out
}

fn render_text(text: &str, ctx: RenderContext<'_>) -> String {
    escape(text, ctx.config().text_filter.as_ref()).into_owned()
}
