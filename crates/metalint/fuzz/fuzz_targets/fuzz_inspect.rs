//! Fuzz target for whole-document inspection.
//!
//! Any JSON document is a valid input: unknown shapes simply produce
//! fewer records or more findings, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use metalint::record::JsonElement;
use metalint::{Ead, Inspector, Lido};

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }
    let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let root = JsonElement::document(&doc);

    let lido = Inspector::new(Lido).inspect(&root);
    let ead = Inspector::new(Ead).inspect(&root);

    let _ = lido.to_json();
    let _ = ead.write_csv(Vec::new(), Default::default(), b',');
});
