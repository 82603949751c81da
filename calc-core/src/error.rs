/// Errors produced by the `calc-core` crate.
///
/// Each variant carries a fixed message; callers surface it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalcError {
    /// The expression is malformed: empty input, a misplaced operator, an
    /// unparsable literal, or operands left over after reduction.
    #[error("There is an error in the expression")]
    Expression,

    /// Parentheses are unbalanced or closed before being opened.
    #[error("There is an error in the brackets")]
    Brackets,

    /// Division by zero.
    ///
    /// [`crate::calc`] never returns this variant: a zero divisor drops its
    /// operands and surfaces as [`CalcError::Expression`].
    #[error("Division by zero")]
    DivideByZero,
}
