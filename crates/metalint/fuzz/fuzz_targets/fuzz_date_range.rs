//! Fuzz target for normalized date parsing.
//!
//! Parsing must never panic, and a complete range must survive a
//! display/parse cycle unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use metalint::checks::{DateConsistencyChecker, DateRange};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let range = DateRange::parse(input);
    if range.is_complete() {
        assert_eq!(DateRange::parse(&range.to_string()), range);
    }

    let checker = DateConsistencyChecker::new(std::slice::from_ref(&range));
    assert!(checker.is_consistent(&range));
});
