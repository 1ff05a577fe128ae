/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing input text and
/// converting it to postfix order. Parse errors cover characters outside the
/// calculator's alphabet and unbalanced parentheses, the two ways malformed
/// input is detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// program to a result or while transforming a display value, such as an
/// expression that does not reduce to a single value or an operator with
/// missing operands.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
