//! Pre-evaluation checks over the raw expression text.
//!
//! Three independent passes, each returning the first violation it finds:
//!
//! - [`validate_expression`] checks operator placement using the *symbol*
//!   character class,
//! - [`validate_brackets`] checks parenthesis balance,
//! - [`reject_adjacent_operators`] checks for back-to-back arithmetic
//!   operator characters and runs after tokenization.
//!
//! The first and third passes overlap only for `+`. The symbol class does not
//! contain `-`, `*` or `/`, so `"1--2"` passes [`validate_expression`] and is
//! only rejected by [`reject_adjacent_operators`].

use tracing::trace;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::CalcError;

/// Returns `true` if `byte`, read as a Latin-1 code point, is in one of the
/// Unicode symbol categories (`Sm`, `Sc`, `Sk`, `So`).
///
/// Multi-byte UTF-8 sequences are classified byte by byte. Their bytes all
/// fall in `0x80..=0xFF`, so a lead byte such as `0xC3` is never a symbol even
/// when the encoded character (`×`) is.
#[must_use]
pub fn is_symbol_byte(byte: u8) -> bool {
    char::from(byte).general_category_group() == GeneralCategoryGroup::Symbol
}

/// Returns `true` for the four arithmetic operator characters.
#[must_use]
pub fn is_operator_byte(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'*' | b'/')
}

/// Rejects structurally invalid expressions before any numeric work.
///
/// # Errors
/// Returns [`CalcError::Expression`] if the expression is empty, starts or
/// ends with a symbol, contains two adjacent symbols, or ends with one of
/// `+ - * /`.
pub fn validate_expression(expression: &str) -> Result<(), CalcError> {
    let bytes = expression.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        trace!("rejecting empty expression");
        return Err(CalcError::Expression);
    };

    if is_symbol_byte(first) || is_symbol_byte(last) {
        trace!("symbol at expression boundary");
        return Err(CalcError::Expression);
    }

    if let Some(pos) = bytes
        .windows(2)
        .position(|pair| is_symbol_byte(pair[0]) && is_symbol_byte(pair[1]))
    {
        trace!(pos, "adjacent symbols");
        return Err(CalcError::Expression);
    }

    if is_operator_byte(last) {
        trace!("trailing operator");
        return Err(CalcError::Expression);
    }

    Ok(())
}

/// Verifies that every `)` closes an earlier `(` and that nothing is left open.
///
/// # Errors
/// Returns [`CalcError::Brackets`] on the first unmatched `)` or if any `(`
/// remains open at the end.
pub fn validate_brackets(expression: &str) -> Result<(), CalcError> {
    let mut depth: usize = 0;
    for ch in expression.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or(CalcError::Brackets)?;
            }
            _ => {}
        }
    }

    if depth > 0 {
        trace!(depth, "unclosed brackets");
        return Err(CalcError::Brackets);
    }
    Ok(())
}

/// Rejects two arithmetic operator characters that sit next to each other in
/// the raw text.
///
/// Only immediate neighbours count: `"1- -2"` passes this check.
///
/// # Errors
/// Returns [`CalcError::Expression`] on the first adjacent pair.
pub fn reject_adjacent_operators(expression: &str) -> Result<(), CalcError> {
    match expression
        .as_bytes()
        .windows(2)
        .position(|pair| is_operator_byte(pair[0]) && is_operator_byte(pair[1]))
    {
        Some(pos) => {
            trace!(pos, "adjacent operators");
            Err(CalcError::Expression)
        }
        None => Ok(()),
    }
}
