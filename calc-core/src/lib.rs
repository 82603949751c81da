//! Expression engine for the calc arithmetic service.
//!
//! Validates and evaluates expressions built from numbers, `+ - * /` and
//! parentheses. Evaluation is a single pass with an operand stack and an
//! operator stack; no syntax tree is built.
//!
//! ```
//! assert_eq!(calc_core::calc("(2+3)*4"), Ok(20.0));
//! assert!(calc_core::calc("1++2").is_err());
//! ```

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod eval;
pub mod reduce;
pub mod validate;

pub use error::CalcError;
pub use eval::calc;
pub use reduce::{apply_operator, Operator, Reduction, StackToken};
pub use validate::{reject_adjacent_operators, validate_brackets, validate_expression};
