/// The lexer module tokenizes display text for conversion.
///
/// The lexer reads the raw display text and produces a stream of tokens:
/// numbers, the five arithmetic operators, and parentheses. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Validates number literals with the crate's shared decimal parse.
/// - Fails safely on characters outside the calculator's alphabet.
pub mod lexer;
/// The postfix module reorders tokens with the shunting-yard algorithm.
///
/// Infix tokens from the lexer are converted into a postfix program using an
/// operator stack and an output queue, respecting operator precedence and
/// associativity. Both structures live only for the duration of one
/// conversion call.
///
/// # Responsibilities
/// - Defines the operator type, its precedence and associativity.
/// - Classifies prefix-position minus as the unary sign.
/// - Detects unbalanced parentheses.
pub mod postfix;
/// The evaluator module reduces postfix programs to results.
///
/// The evaluator walks the postfix program once, pushing operands on a value
/// stack and applying operators as they arrive. It is the final stage of
/// evaluation.
///
/// # Responsibilities
/// - Applies the arithmetic operations, with floating-point semantics for
///   division by zero.
/// - Reports programs that do not reduce to exactly one value.
pub mod evaluator;
