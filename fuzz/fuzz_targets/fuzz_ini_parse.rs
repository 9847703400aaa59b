#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and re-serialising must never panic
        if let Ok(store) = cdpcli::ConfigStore::parse(content) {
            if let Ok(text) = store.to_ini_string() {
                let _ = cdpcli::ConfigStore::parse(&text);
            }
        }
    }
});
