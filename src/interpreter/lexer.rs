use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of an input line.
///
/// The lexer knows only what the supported operations are built from. It
/// never skips anything, so whitespace and every other character surface as
/// lexer errors.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Unsigned integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
}

/// Splits an input line into tokens.
///
/// # Errors
/// - `LiteralTooLarge` if a run of digits does not fit in a `u64`.
/// - `UnexpectedToken` for any other character, whitespace included.
///
/// # Example
/// ```
/// use uselesscalc::{
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// assert_eq!(tokenize("8+34").unwrap(),
///            vec![Token::Integer(8), Token::Plus, Token::Integer(34)]);
///
/// let err = tokenize("10 34").unwrap_err();
/// assert_eq!(err,
///            ParseError::UnexpectedToken { token:    " ".to_string(),
///                                          position: 2, });
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            let position = lexer.span().start;

            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { position });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed value.
/// - `None`: If the literal overflows a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}
