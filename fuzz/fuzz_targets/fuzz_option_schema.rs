#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Malformed schemas are errors, never panics
        let _ = cdpcli::Schema::from_json(content);
    }
});
