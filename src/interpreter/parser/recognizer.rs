use crate::interpreter::{lexer::Token, operation::Operation};

/// Decides whether a token stream is exactly one specific operation.
///
/// A recognizer returns `Some` only when the whole stream matches its shape;
/// partial matches are rejected.
pub type Recognizer = fn(&[Token]) -> Option<Operation>;

/// Every known recognizer, in the order the parser tries them.
///
/// Operator tokens are disjoint between entries, so at most one can match any
/// input and the order does not affect results.
pub const RECOGNIZERS: &[Recognizer] = &[recognize_sum, recognize_difference];

/// Recognizes `<integer>+<integer>`.
///
/// # Example
/// ```
/// use uselesscalc::interpreter::{
///     lexer::Token, operation::Operation, parser::recognizer::recognize_sum,
/// };
///
/// let tokens = [Token::Integer(8), Token::Plus, Token::Integer(34)];
/// assert_eq!(recognize_sum(&tokens), Some(Operation::Sum { a: 8, b: 34 }));
///
/// let tokens = [Token::Integer(10), Token::Minus, Token::Integer(34)];
/// assert_eq!(recognize_sum(&tokens), None);
/// ```
#[must_use]
pub fn recognize_sum(tokens: &[Token]) -> Option<Operation> {
    binary_operands(tokens, Token::Plus).map(|(a, b)| Operation::Sum { a, b })
}

/// Recognizes `<integer>-<integer>`.
///
/// The left operand is the minuend; nothing stops it from being smaller than
/// the right one.
#[must_use]
pub fn recognize_difference(tokens: &[Token]) -> Option<Operation> {
    binary_operands(tokens, Token::Minus).map(|(a, b)| Operation::Difference { a, b })
}

/// Extracts both operands when `tokens` is exactly `Integer op Integer`.
fn binary_operands(tokens: &[Token], op: Token) -> Option<(u64, u64)> {
    match tokens {
        [Token::Integer(a), found, Token::Integer(b)] if *found == op => Some((*a, *b)),
        _ => None,
    }
}
