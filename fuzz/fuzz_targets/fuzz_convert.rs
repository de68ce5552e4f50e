#![no_main]

use libfuzzer_sys::fuzz_target;
use teif::xml::{ConvertOptions, XmlOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Whatever validates must project to XML.
        let options = ConvertOptions {
            xml: XmlOptions::new().include_partners(true),
            ..Default::default()
        };
        match teif::xml::convert(&value, &options) {
            Ok(_) | Err(teif::TeifError::Validation(_)) => {}
            Err(e) => panic!("projection failed for a validated document: {e}"),
        }
    }
});
