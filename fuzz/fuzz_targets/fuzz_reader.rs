#![no_main]

use libfuzzer_sys::fuzz_target;
use lines::LineReader;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut reader = LineReader::with_capacity(Cursor::new(data), 4);
    let mut rebuilt = Vec::with_capacity(data.len());

    while let Ok(Some(line)) = reader.next_line() {
        rebuilt.extend_from_slice(line.bytes);
    }

    // Lines are delivered verbatim and in order
    assert_eq!(rebuilt, data);
});
