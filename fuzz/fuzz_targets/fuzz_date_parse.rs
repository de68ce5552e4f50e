#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (format, date_text) = input;
    let dtm = teif::core::Dtm {
        function_code: "137".into(),
        format,
        date_text,
    };
    // Must not panic; errors are fine.
    let _ = dtm.parse();
});
