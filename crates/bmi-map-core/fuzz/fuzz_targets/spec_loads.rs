//! Fuzzing target for specification loading
//!
//! Arbitrary documents must either load or fail with an error, never panic.

#![no_main]

use bmi_map_core::{loads, render_all, Language};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(document) = std::str::from_utf8(data) {
        if let Ok(spec) = loads(document) {
            for language in Language::ALL {
                let _ = render_all(&spec, language);
            }
        }
    }
});
