#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlify::{to_xml_with_config, Filter, Node, RenderConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(node) = Node::from_json_str(s) {
            if let (Ok(text), Ok(attribute)) = (Filter::xml_text(), Filter::xml_attribute()) {
                let config = RenderConfig::new()
                    .header(true)
                    .indent("\t")
                    .text_filter(text)
                    .attribute_filter(attribute);
                let _ = to_xml_with_config(&node, &config);
            }
        }
    }
});
