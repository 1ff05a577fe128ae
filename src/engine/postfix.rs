use tracing::trace;

use crate::{engine::lexer::Token, error::ParseError};

/// An arithmetic operator, with its precedence and associativity.
///
/// The five binary operators are the ones the button set can type. `Neg` is
/// the unary sign; the lexer never produces it, the postfix conversion does
/// when it finds a minus in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-` (binary subtraction)
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `-` (unary sign)
    Neg,
}

impl Op {
    /// Returns the binding strength of the operator.
    ///
    /// # Example
    /// ```
    /// use deskcalc::engine::postfix::Op;
    ///
    /// assert!(Op::Mul.precedence() > Op::Add.precedence());
    /// assert!(Op::Pow.precedence() > Op::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
            Self::Neg => 4,
        }
    }

    /// Returns `true` when the operator groups right to left.
    ///
    /// Only the unary sign does. Every binary operator groups left to right,
    /// including `^`: `2^3^2` evaluates as `(2^3)^2`, the behavior of the
    /// calculators this one is modeled on.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Returns the display symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub | Self::Neg => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token of a postfix program: operands in order, operators after the
/// operands they apply to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
    /// An operand.
    Number(f64),
    /// An operator applied to the values before it.
    Op(Op),
}

/// Operator-stack entries during conversion. Only operators and opening
/// parentheses ever live on the stack.
#[derive(Debug, Clone, Copy)]
enum StackItem {
    Op(Op),
    LParen,
}

/// Classifies an input token as an operator, if it is one.
///
/// A minus that does not follow an operand is the unary sign rather than
/// subtraction; everything else maps directly.
///
/// # Parameters
/// - `token`: Token to classify.
/// - `after_operand`: Whether the previous token could end an operand.
///
/// # Returns
/// `Some(Op)` if the token is an operator, otherwise `None`.
const fn classify_operator(token: Token, after_operand: bool) -> Option<Op> {
    match token {
        Token::Minus if !after_operand => Some(Op::Neg),
        Token::Plus => Some(Op::Add),
        Token::Minus => Some(Op::Sub),
        Token::Star => Some(Op::Mul),
        Token::Slash => Some(Op::Div),
        Token::Caret => Some(Op::Pow),
        _ => None,
    }
}

/// Converts an infix token sequence to postfix order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output
/// queue. An operator first pops every stacked operator that binds at least
/// as tightly (strictly tighter for the right-associative unary sign), then
/// goes on the stack. An opening parenthesis goes on the stack
/// unconditionally; a closing one pops operators to the output queue until
/// its partner is found and discarded. At the end the stack is drained into
/// the output queue.
///
/// The `>=` comparison for binary operators is what makes every one of them
/// left-associative, `^` included.
///
/// # Parameters
/// - `tokens`: The infix token sequence.
///
/// # Returns
/// The postfix program.
///
/// # Errors
/// Returns [`ParseError::MismatchedParentheses`] when a closing parenthesis
/// has no partner on the stack, or an opening one is still on the stack
/// after all tokens are consumed.
///
/// # Example
/// ```
/// use deskcalc::engine::{
///     lexer::tokenize,
///     postfix::{Op, PostfixToken, to_postfix},
/// };
///
/// let tokens = tokenize("1+2*3").unwrap();
/// assert_eq!(to_postfix(&tokens).unwrap(),
///            vec![PostfixToken::Number(1.0),
///                 PostfixToken::Number(2.0),
///                 PostfixToken::Number(3.0),
///                 PostfixToken::Op(Op::Mul),
///                 PostfixToken::Op(Op::Add)]);
///
/// assert!(to_postfix(&tokenize("(1+2").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixToken>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackItem> = Vec::new();
    // Tracks whether the previous token could end an operand; a minus that
    // does not follow one is the unary sign.
    let mut after_operand = false;

    for token in tokens {
        match token {
            Token::Number(value) => {
                output.push(PostfixToken::Number(*value));
                after_operand = true;
            },

            Token::LParen => {
                stack.push(StackItem::LParen);
                after_operand = false;
            },

            Token::RParen => {
                loop {
                    match stack.pop() {
                        Some(StackItem::Op(op)) => output.push(PostfixToken::Op(op)),
                        Some(StackItem::LParen) => break,
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                }
                after_operand = true;
            },

            _ => {
                // The lexer emits nothing besides numbers, parentheses and
                // the five operator tokens classified here.
                if let Some(op) = classify_operator(*token, after_operand) {
                    while let Some(StackItem::Op(top)) = stack.last().copied()
                          && (top.precedence() > op.precedence()
                              || (!op.is_right_associative()
                                  && top.precedence() == op.precedence()))
                    {
                        stack.pop();
                        output.push(PostfixToken::Op(top));
                    }
                    stack.push(StackItem::Op(op));
                    after_operand = false;
                }
            },
        }
    }

    while let Some(item) = stack.pop() {
        match item {
            StackItem::Op(op) => output.push(PostfixToken::Op(op)),
            StackItem::LParen => return Err(ParseError::MismatchedParentheses),
        }
    }

    trace!(?output, "converted to postfix");

    Ok(output)
}
