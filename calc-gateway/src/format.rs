//! Textual rendering of calculation results.

/// Formats `value` as fixed-point decimal with six fractional digits.
///
/// Non-finite values render as `+Inf`, `-Inf` and `NaN`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_owned()
    } else {
        format!("{value:.6}")
    }
}
