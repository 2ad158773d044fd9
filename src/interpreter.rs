/// The engine module turns input lines into results.
///
/// It runs the parser and the evaluation for one request and replaces any
/// failure to parse with the unrecognized marker, so its entry point is total.
pub mod engine;
/// The lexer module tokenizes input lines.
///
/// Produces integer literals and operator tokens, rejecting everything else
/// with the offending slice and its position.
pub mod lexer;
/// Recognized operations and their evaluation.
pub mod operation;
/// The parser module recognizes operations in token streams.
///
/// # Responsibilities
/// - Matches the entire line against each supported operation's shape.
/// - Extracts operands.
/// - Reports why a line was not recognized.
pub mod parser;
