use logos::Logos;

use crate::{error::ParseError, util::parse_decimal};

/// Represents a lexical token in the calculator's input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines every token the button set can produce.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `12.`.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    ///
    /// Always lexed as a plain minus; whether it is binary subtraction or a
    /// unary sign is decided during postfix conversion, not here.
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a number literal from the current token slice.
///
/// Delegates to the shared [`parse_decimal`] helper so the lexer and the
/// square-root transform validate numbers the same way.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If it is not, which fails the token.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    parse_decimal(lex.slice())
}

/// Splits input text into a sequence of tokens.
///
/// Whitespace is skipped, each operator and parenthesis becomes its own
/// token, and every maximal run of digits and dots between them becomes a
/// `Number` token. On the calculator's input alphabet this never fails; any
/// other character fails safely with an error instead of producing a token.
///
/// # Parameters
/// - `input`: The raw display text.
///
/// # Returns
/// The token sequence, in input order.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] when the input contains a
/// character outside the recognized alphabet.
///
/// # Example
/// ```
/// use deskcalc::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1+2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
///
/// assert!(tokenize("2+x").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(), });
        }
    }

    Ok(tokens)
}
