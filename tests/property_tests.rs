#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use xmlify::{to_xml, to_xml_with_config, Filter, Mapping, Node, RenderConfig, Tag, DEFAULT_HEADER};

// Strategy for element names; the `k` prefix keeps clear of the reserved keys
fn key_strategy() -> impl Strategy<Value = String> {
    "k[a-z0-9]{0,6}"
}

// Text without whitespace, markup or anything an indent could be confused with
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{0,12}"
}

fn leaf_strategy() -> impl Strategy<Value = Node> {
    prop_oneof![
        text_strategy().prop_map(Node::from),
        (-1000i32..1000i32).prop_map(Node::from),
        any::<bool>().prop_map(Node::from),
    ]
}

// Strategy for arbitrary trees of mappings, sequences and explicit tags
fn node_strategy() -> impl Strategy<Value = Node> {
    leaf_strategy().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..5).prop_map(Node::Sequence),
            vec((key_strategy(), inner.clone()), 0..5)
                .prop_map(|entries| Node::from(entries.into_iter().collect::<Mapping>())),
            (key_strategy(), inner).prop_map(|(name, content)| Node::from(
                Tag::new(name).with_content(content)
            )),
        ]
    })
}

fn expected_element(key: &str, text: &str) -> String {
    if text.is_empty() {
        format!("<{key}/>")
    } else {
        format!("<{key}>{text}</{key}>")
    }
}

proptest! {
    // One element per key, in key order
    #[test]
    fn test_mapping_renders_one_tag_per_key(
        entries in vec((key_strategy(), text_strategy()), 0..8)
    ) {
        let map: Mapping = entries.iter().cloned().collect();
        let expected: String = map
            .iter()
            .map(|(key, value)| expected_element(key, value.as_str().unwrap_or_default()))
            .collect();

        prop_assert_eq!(to_xml(&Node::from(map)), expected);
    }

    // Pretty-printing only ever adds newlines and indentation
    #[test]
    fn test_indentation_only_adds_whitespace(node in node_strategy()) {
        let compact = to_xml(&node);
        let pretty = to_xml_with_config(&node, &RenderConfig::new().indent("  "));
        let stripped: String = pretty.chars().filter(|c| *c != '\n' && *c != ' ').collect();

        prop_assert_eq!(stripped, compact);
    }

    // The declaration shows up at most once and only at the very start
    #[test]
    fn test_header_at_most_once(node in node_strategy(), indent in "( {0,2}|\t)") {
        let config = RenderConfig::new().header(true).indent(indent);
        let output = to_xml_with_config(&node, &config);
        let count = output.matches(DEFAULT_HEADER).count();

        prop_assert!(count <= 1);
        if count == 1 {
            prop_assert!(output.starts_with(DEFAULT_HEADER));
        }
    }

    // A descriptor self-closes only when its content renders empty
    #[test]
    fn test_self_close_only_when_empty(
        name in key_strategy(),
        text in text_strategy(),
        flag in proptest::option::of(any::<bool>())
    ) {
        let mut tag = Tag::new(name.clone()).with_content(text.clone());
        tag.self_close = flag;
        let output = to_xml(&Node::from(tag));

        if text.is_empty() && flag != Some(false) {
            prop_assert_eq!(output, format!("<{name}/>"));
        } else {
            prop_assert_eq!(output, format!("<{name}>{text}</{name}>"));
        }
    }

    // Escaped text never carries raw markup characters
    #[test]
    fn test_escaped_text_has_no_markup(text in ".{1,24}") {
        let config = RenderConfig::new().text_filter(Filter::xml_text().unwrap());
        let output = to_xml_with_config(&Node::from(Mapping::new().with("k", text)), &config);
        let inner = output
            .strip_prefix("<k>")
            .and_then(|rest| rest.strip_suffix("</k>"))
            .unwrap();

        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    // Rendering is deterministic and leaves the input untouched
    #[test]
    fn test_render_is_pure(node in node_strategy()) {
        let snapshot = node.clone();
        let first = to_xml(&node);
        let second = to_xml(&node);

        prop_assert_eq!(first, second);
        prop_assert_eq!(node, snapshot);
    }
}
