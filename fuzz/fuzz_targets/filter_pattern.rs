#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlify::{escape, Filter};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(2, '\n');
        let key = parts.next().unwrap_or_default();
        let text = parts.next().unwrap_or_default();
        if let Ok(filter) = Filter::new([(key, "_")]) {
            let _ = escape(text, Some(&filter));
        }
    }
});
