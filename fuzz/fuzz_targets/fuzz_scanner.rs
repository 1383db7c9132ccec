#![no_main]

use csvscan::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parser = Parser::default();
    // Invalid UTF-8 must be rejected, never panic
    let Ok(records) = parser.parse_bytes(data) else {
        return;
    };

    // Without quotes every terminator splits a record
    if !data.contains(&b'"') {
        let text = std::str::from_utf8(data).unwrap();
        let terminators = text.replace("\r\n", "\n").matches(['\r', '\n']).count();
        assert_eq!(records.len(), terminators + 1);
    }
});
