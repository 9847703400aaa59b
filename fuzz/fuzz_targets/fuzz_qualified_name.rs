#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(name) = cdpcli::domain::services::name_resolver::resolve(raw, "default") {
            assert!(!name.key.is_empty());
        }
    }
});
