//! Operator tokens and the single-step stack reduction.

use std::fmt;

use tracing::trace;

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps an operator character to its [`Operator`], if it is one.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An entry on the operator stack.
///
/// `)` is never stored; it drains the stack down to the matching [`Open`].
///
/// [`Open`]: StackToken::Open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackToken {
    /// A pending binary operator.
    Op(Operator),
    /// An opening bracket marker.
    Open,
}

/// What a call to [`apply_operator`] did to the stacks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub enum Reduction {
    /// Two operands and one operator were replaced by the result.
    Applied(f64),
    /// The divisor was zero: two operands and the operator were removed and
    /// nothing was pushed.
    DivisionByZero,
    /// Preconditions were not met and the stacks are unchanged.
    Skipped,
}

/// Pops the top operator and the top two operands and pushes the result.
///
/// `num2` is the most recently pushed operand and `num1` the one below it, so
/// `-` computes `num1 - num2`.
///
/// A zero divisor removes the operands and the operator without pushing a
/// result. Fewer than two operands, an empty operator stack, or an [`Open`]
/// marker on top leave both stacks untouched.
///
/// [`Open`]: StackToken::Open
#[allow(clippy::float_cmp)]
pub fn apply_operator(operands: &mut Vec<f64>, operators: &mut Vec<StackToken>) -> Reduction {
    let Some(&StackToken::Op(operator)) = operators.last() else {
        return Reduction::Skipped;
    };
    if operands.len() < 2 {
        return Reduction::Skipped;
    }

    let (Some(num2), Some(num1)) = (operands.pop(), operands.pop()) else {
        return Reduction::Skipped;
    };
    operators.pop();

    let result = match operator {
        Operator::Add => num1 + num2,
        Operator::Sub => num1 - num2,
        Operator::Mul => num1 * num2,
        Operator::Div => {
            if num2 == 0.0 {
                trace!(num1, "dropping division by zero");
                return Reduction::DivisionByZero;
            }
            num1 / num2
        }
    };

    trace!(num1, %operator, num2, result, "reduced");
    operands.push(result);
    Reduction::Applied(result)
}
