#![no_main]

use libfuzzer_sys::fuzz_target;
use lines::Parser;

fuzz_target!(|data: &str| {
    // Whitespace-separated tokens stand in for argv
    let mut parser = Parser::new(data.split_whitespace());
    // We don't care if it fails, just that it doesn't panic
    let _ = parser.parse();
});
