#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning input text into a
/// postfix program.
pub enum ParseError {
    /// Found a character sequence that is not part of the calculator's
    /// input alphabet.
    UnexpectedToken {
        /// The offending text.
        token: String,
    },
    /// The expression's parentheses do not balance.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for ParseError {}
