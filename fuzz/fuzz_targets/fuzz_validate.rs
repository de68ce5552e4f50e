#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must never panic the validator.
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = teif::core::validate(&value);
    }
});
