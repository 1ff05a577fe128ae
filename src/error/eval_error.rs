#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix program or
/// transforming a display value.
pub enum EvalError {
    /// The postfix program did not reduce to exactly one value.
    InvalidExpression {
        /// How many values were left on the value stack.
        values: usize,
    },
    /// An operator was reached with fewer operands available than it needs.
    InsufficientOperands {
        /// The symbol of the operator that came up short.
        operator: char,
    },
    /// A display value fed to the square-root transform did not parse as a
    /// number.
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { values } => {
                write!(f,
                       "Invalid expression: reduced to {values} values instead of one.")
            },

            Self::InsufficientOperands { operator } => {
                write!(f, "Operator '{operator}' is missing its operands.")
            },

            Self::InvalidNumber { text } => write!(f, "Not a number: {text}."),
        }
    }
}

impl std::error::Error for EvalError {}
