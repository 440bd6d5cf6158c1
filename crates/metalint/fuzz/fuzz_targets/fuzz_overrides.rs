//! Fuzz target for configuration overrides.
//!
//! Malformed override trees must be rejected with an error, not a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use metalint::StandardKind;

fuzz_target!(|data: &[u8]| {
    let Ok(overrides) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    for standard in [StandardKind::Ead, StandardKind::Lido] {
        let mut config = standard.default_config();
        let _ = config.apply_overrides(&overrides);
        let _ = serde_json::to_string(&config);
    }
});
