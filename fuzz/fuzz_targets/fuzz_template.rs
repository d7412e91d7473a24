#![no_main]

use dotrules::error::ErrorRecord;
use dotrules::message::Template;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

fuzz_target!(|input: (String, String, String)| {
    let (template, attribute, field) = input;
    let record = ErrorRecord {
        attribute,
        rule: "fuzz".to_string(),
        replacements: BTreeMap::from([("field".to_string(), field)]),
    };
    let _ = Template::parse(&template).render(&record);
});
