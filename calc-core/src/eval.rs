//! Single-pass tokenizer and two-stack evaluator.
//!
//! The evaluator walks the expression once. Numeric literals accumulate in a
//! pending buffer; operators and `(` go onto the operator stack; `)` reduces
//! back to its matching `(`. Whatever is left is reduced at end of input in
//! stack order, most recently pushed operator first. There is no precedence
//! table: `2+3*4+5` evaluates as `2+(3*(4+5))`.

use tracing::debug;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::error::CalcError;
use crate::reduce::{apply_operator, Operator, Reduction, StackToken};
use crate::validate::{reject_adjacent_operators, validate_brackets, validate_expression};

/// Evaluates an arithmetic expression.
///
/// Accepts digits, `.`, the binary operators `+ - * /` and parentheses. Any
/// other character terminates the current literal and is otherwise ignored,
/// so `"1 + 2"` evaluates to `3`.
///
/// Every Unicode decimal digit (`Nd`) joins the current literal, but only
/// ASCII digits parse, so `"7\u{0660}"` is an unparsable literal.
///
/// # Errors
/// Returns [`CalcError::Brackets`] for unbalanced parentheses and
/// [`CalcError::Expression`] for every other malformed input, including a
/// division by zero.
pub fn calc(expression: &str) -> Result<f64, CalcError> {
    validate_expression(expression)?;
    validate_brackets(expression)?;

    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<StackToken> = Vec::new();
    let mut literal = String::new();

    for ch in expression.chars() {
        if is_decimal_digit(ch) || ch == '.' {
            literal.push(ch);
            continue;
        }

        flush_literal(&mut literal, &mut operands)?;

        if let Some(operator) = Operator::from_char(ch) {
            operators.push(StackToken::Op(operator));
        } else if ch == '(' {
            operators.push(StackToken::Open);
        } else if ch == ')' {
            close_bracket(&mut operands, &mut operators)?;
        }
    }

    reject_adjacent_operators(expression)?;
    flush_literal(&mut literal, &mut operands)?;

    while !operators.is_empty() {
        reduce_once(&mut operands, &mut operators)?;
    }

    match operands.as_slice() {
        [result] => {
            debug!(expression, result, "evaluated");
            Ok(*result)
        }
        rest => {
            debug!(expression, operands = rest.len(), "operand stack did not reduce to one value");
            Err(CalcError::Expression)
        }
    }
}

fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ch.general_category() == GeneralCategory::DecimalNumber
}

/// Parses the pending literal onto the operand stack and clears it.
fn flush_literal(literal: &mut String, operands: &mut Vec<f64>) -> Result<(), CalcError> {
    if literal.is_empty() {
        return Ok(());
    }
    operands.push(parse_literal(literal)?);
    literal.clear();
    Ok(())
}

/// A literal must parse to a finite value; out-of-range digit strings are rejected.
fn parse_literal(literal: &str) -> Result<f64, CalcError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            debug!(literal, "unparsable literal");
            Err(CalcError::Expression)
        }
    }
}

/// Reduces until the innermost `(` is on top, then discards it.
fn close_bracket(
    operands: &mut Vec<f64>,
    operators: &mut Vec<StackToken>,
) -> Result<(), CalcError> {
    loop {
        match operators.last() {
            None => return Err(CalcError::Brackets),
            Some(StackToken::Open) => {
                operators.pop();
                return Ok(());
            }
            Some(StackToken::Op(_)) => reduce_once(operands, operators)?,
        }
    }
}

/// One reduction step. A step that cannot make progress fails the whole
/// evaluation so every drain loop terminates.
fn reduce_once(operands: &mut Vec<f64>, operators: &mut Vec<StackToken>) -> Result<(), CalcError> {
    match apply_operator(operands, operators) {
        Reduction::Applied(_) => Ok(()),
        Reduction::DivisionByZero => {
            debug!("division by zero dropped its operands");
            Ok(())
        }
        Reduction::Skipped => {
            debug!(
                operands = operands.len(),
                operators = operators.len(),
                "reduction stalled"
            );
            Err(CalcError::Expression)
        }
    }
}
