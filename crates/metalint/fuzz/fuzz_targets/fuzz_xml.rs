//! Fuzz target for XML documents.
//!
//! Malformed markup must fail with an error; anything that parses must
//! inspect without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use metalint::record::{XmlElement, parse_document};
use metalint::{Ead, Inspector, Lido};

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = parse_document(text) else {
        return;
    };
    let root = XmlElement::document(&doc);

    let ead = Inspector::new(Ead).inspect(&root);
    let lido = Inspector::new(Lido).inspect(&root);

    let _ = ead.to_localized_json(Default::default());
    let _ = lido.to_json();
});
