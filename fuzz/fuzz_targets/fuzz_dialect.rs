#![no_main]

use arbitrary::Arbitrary;
use csvscan::{Config, Parser};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    delimiter: char,
    quote: char,
    strict: bool,
    text: &'a str,
}

fuzz_target!(|input: Input| {
    // Rejected dialects are fine, panics are not
    let Ok(config) = Config::from_chars(input.delimiter, input.quote) else {
        return;
    };
    let parser = Parser::with_config(config.strict(input.strict));
    let _ = parser.parse(input.text);
});
