use crate::{
    engine::postfix::{Op, PostfixToken},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a postfix program to a single numeric result.
///
/// Numbers are pushed onto a value stack. A binary operator pops its right
/// operand, then its left, applies itself, and pushes the result; the unary
/// sign pops and negates one value. When every token has been processed the
/// stack must hold exactly one value, which is the result.
///
/// Division by zero is not an error: it produces an infinite or `NaN` value
/// under the usual floating-point rules, and that value is the result.
///
/// # Parameters
/// - `tokens`: The postfix program.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator is reached with
///   fewer values on the stack than it pops.
/// - [`EvalError::InvalidExpression`] when the final stack does not hold
///   exactly one value. The empty program fails this way too.
///
/// # Example
/// ```
/// use deskcalc::engine::{
///     evaluator::evaluate_postfix,
///     postfix::{Op, PostfixToken},
/// };
///
/// // The postfix form of "3+4": 3 4 +
/// let program = [PostfixToken::Number(3.0),
///                PostfixToken::Number(4.0),
///                PostfixToken::Op(Op::Add)];
/// assert_eq!(evaluate_postfix(&program).unwrap(), 7.0);
///
/// // Two numbers and no operator do not reduce to one value.
/// let program = [PostfixToken::Number(1.0), PostfixToken::Number(2.0)];
/// assert!(evaluate_postfix(&program).is_err());
/// ```
pub fn evaluate_postfix(tokens: &[PostfixToken]) -> EvalResult<f64> {
    use Op::{Add, Div, Mul, Neg, Pow, Sub};

    let mut values: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            PostfixToken::Number(value) => values.push(*value),

            PostfixToken::Op(Neg) => {
                let operand = values.pop()
                                    .ok_or(EvalError::InsufficientOperands { operator: '-' })?;
                values.push(-operand);
            },

            PostfixToken::Op(op) => {
                let right = values.pop()
                                  .ok_or(EvalError::InsufficientOperands { operator: op.symbol(), })?;
                let left = values.pop()
                                 .ok_or(EvalError::InsufficientOperands { operator: op.symbol(), })?;

                values.push(match op {
                                Add => left + right,
                                Sub => left - right,
                                Mul => left * right,
                                // x / 0.0 is inf or NaN, never an error
                                Div => left / right,
                                Pow => left.powf(right),
                                Neg => unreachable!(),
                            });
            },
        }
    }

    match values.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::InvalidExpression { values: values.len() }),
    }
}
