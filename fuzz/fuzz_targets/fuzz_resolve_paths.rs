#![no_main]

use dotrules::primitives::{has, lookup, resolve, resolve_single};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split between pattern and JSON document.
    let split = data[0] as usize % data.len().max(1);
    let (pattern_bytes, value_bytes) = data.split_at(split.min(data.len()));

    let pattern = String::from_utf8_lossy(pattern_bytes);

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(value_bytes) {
        for (attribute, found) in resolve(&value, &pattern) {
            assert_eq!(lookup(&value, &attribute), Some(found));
        }
        assert_eq!(has(&value, &pattern), resolve_single(&value, &pattern).is_some());
    }
});
