//! Fuzz target: expression evaluation.
//!
//! Arbitrary UTF-8 input must never panic or hang the evaluator, and a
//! successful result must survive a second evaluation unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(expression) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = calc_core::calc(expression) {
        let again = calc_core::calc(expression).map(f64::to_bits);
        assert_eq!(again, Ok(value.to_bits()), "evaluation must be deterministic");
    }
});
