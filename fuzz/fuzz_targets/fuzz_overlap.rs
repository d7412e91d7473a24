#![no_main]

use arbitrary::Arbitrary;
use dotrules::overlap::{correlate, merge, overlap};
use dotrules::pattern::Pattern;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    a: String,
    b: String,
    attribute: String,
}

fuzz_target!(|input: Input| {
    let a = Pattern::parse(&input.a);
    let b = Pattern::parse(&input.b);

    let shared = overlap(&a, &b);
    assert_eq!(shared, overlap(&b, &a));

    if let Some(shared) = shared {
        assert!(shared.len() <= a.len().min(b.len()));
        let _ = merge(&shared, &input.attribute, &b);
    }
    if let Ok(correlation) = correlate(&input.a, &input.b) {
        let _ = correlation.attribute_for(&input.attribute);
    }
});
