//! # deskcalc
//!
//! deskcalc is the core of an interactive infix calculator written in Rust.
//! It tokenizes a typed expression, converts it to postfix order with the
//! shunting-yard algorithm, reduces the postfix program on a value stack,
//! and keeps a history of successful evaluations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::engine::{evaluator::evaluate_postfix, lexer::tokenize, postfix::to_postfix};

/// Drives the display state around the evaluation pipeline.
///
/// This module holds the calculator session type that a presentation layer
/// talks to: the display text, the button operations that edit it, the
/// equals operation that evaluates it, and the square-root transform. All
/// failures surface as a single `ERROR` sentinel on the display.
///
/// # Responsibilities
/// - Owns the display text and the evaluation history.
/// - Converts every evaluation failure into the `ERROR` sentinel.
/// - Implements the display edits: press, clear, backspace, sign toggle.
pub mod calculator;
/// Runs the evaluation pipeline itself.
///
/// This module ties together the three stages that turn display text into a
/// number: the lexer, the infix-to-postfix conversion, and the postfix
/// evaluator. Each stage is usable on its own; [`evaluate`] chains them.
///
/// # Responsibilities
/// - Coordinates the lexer, the conversion and the evaluator.
/// - Keeps every intermediate structure local to one evaluation call.
pub mod engine;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or reducing an expression. Every fallible operation in the
/// crate reports failure through one of these types; nothing panics on user
/// input.
///
/// # Responsibilities
/// - Defines error enums for the parse and evaluation phases.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Records what the calculator has evaluated.
///
/// The history is the only state that outlives a single evaluation. It is an
/// append-only sequence of expression/result pairs, cleared only by explicit
/// user action.
pub mod history;
/// Shared numeric helpers.
///
/// The single decimal parse used by the lexer and the square-root transform,
/// and the formatting of results for the display.
pub mod util;

pub use calculator::{Calculator, ERROR_DISPLAY};
pub use history::{History, HistoryEntry};

/// Evaluates an infix expression to a number.
///
/// This is the full pipeline: the expression is tokenized, converted to
/// postfix order, and reduced to a single value. Whitespace is ignored; the
/// recognized alphabet is digits, `.`, the operators `+ - * / ^`, and
/// parentheses.
///
/// # Errors
/// Returns an error when the input contains a character outside that
/// alphabet, when parentheses do not balance, or when the expression does
/// not reduce to exactly one value.
///
/// # Examples
/// ```
/// use deskcalc::evaluate;
///
/// assert_eq!(evaluate("3+4*2").unwrap(), 11.0);
/// assert_eq!(evaluate("(3+4)*2").unwrap(), 14.0);
///
/// // Unbalanced parentheses are an error, not a panic.
/// assert!(evaluate("(1+2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    let result = evaluate_postfix(&postfix)?;

    debug!(expression, result, "evaluated");

    Ok(result)
}
