//! Fuzzing target for parameter parsing and rendering
//!
//! Any accepted parameter must render in every language without panicking.

#![no_main]

use bmi_map_core::{render_one, Language, Parameter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut fields = text.splitn(3, '\n');
    let (Some(name), Some(intent), Some(ty)) = (fields.next(), fields.next(), fields.next()) else {
        return;
    };

    if let Ok(param) = Parameter::new(name, intent, ty) {
        // Accepted input re-validates to the same parameter
        let again = Parameter::new(param.name(), param.intent().as_str(), &param.type_string())
            .expect("validated parameter must re-validate");
        assert_eq!(param, again);

        for language in Language::ALL {
            let _ = render_one("fuzzed", std::slice::from_ref(&param), language);
        }
    }
});
