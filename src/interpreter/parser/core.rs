use crate::{
    error::ParseError,
    interpreter::{lexer::tokenize, operation::Operation, parser::recognizer::RECOGNIZERS},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an input line into an operation.
///
/// This is the entry point of the parser. The whole line must be a single
/// supported operation: no whitespace, no extra operators or operands, no
/// leading or trailing characters. The function is pure and never panics.
///
/// # Parameters
/// - `input`: The raw line, or `None` when the caller has nothing to offer.
///
/// # Returns
/// The recognized operation.
///
/// # Errors
/// - `MissingInput` if `input` is `None`.
/// - `UnexpectedToken` or `LiteralTooLarge` if the line does not tokenize.
/// - `Unrecognized` if it tokenizes but no recognizer accepts it.
///
/// # Example
/// ```
/// use uselesscalc::{
///     error::ParseError,
///     interpreter::{operation::Operation, parser::core::try_parse},
/// };
///
/// assert_eq!(try_parse(Some("34-8")), Ok(Operation::Difference { a: 34, b: 8 }));
/// assert_eq!(try_parse(None), Err(ParseError::MissingInput));
/// assert!(matches!(try_parse(Some("10+34+4")),
///                  Err(ParseError::Unrecognized { .. })));
/// ```
pub fn try_parse(input: Option<&str>) -> ParseResult<Operation> {
    let source = input.ok_or(ParseError::MissingInput)?;
    let tokens = tokenize(source)?;

    RECOGNIZERS.iter()
               .find_map(|recognize| recognize(&tokens))
               .ok_or_else(|| ParseError::Unrecognized { input: source.to_string() })
}
