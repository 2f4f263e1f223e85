use crate::escape::{escape, Filter};
use crate::node::{Attributes, Node};

/// Renders an attribute set as ` k1="v1" k2="v2"`.
///
/// Returns the empty string for a missing or empty set. A `true` value
/// renders as the bare key; every other value is stringified, passed through
/// `filter` and double-quoted.
pub fn format_attributes(attrs: Option<&Attributes>, filter: Option<&Filter>) -> String {
    let Some(attrs) = attrs else {
        return String::new();
    };

    let mut out = String::new();
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        if matches!(value, Node::Bool(true)) {
            continue;
        }
        out.push_str("=\"");
        out.push_str(&escape(&value.to_text(), filter));
        out.push('"');
    }
    out
}
