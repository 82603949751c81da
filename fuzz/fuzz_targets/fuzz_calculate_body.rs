//! Fuzz target: request body decoding followed by evaluation.
//!
//! Decode errors are expected; only panics count as failures.

#![no_main]

use calc_gateway::routes::decode_expression;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(expression) = decode_expression(data) {
        let _ = calc_core::calc(&expression);
    }
});
