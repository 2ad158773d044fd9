/// Entry point of the parser.
///
/// Tokenizes a line and hands the tokens to each recognizer in turn, reporting
/// why nothing matched when that is the outcome.
pub mod core;
/// Per-operation recognizers.
///
/// Each recognizer owns the exact token shape of one operation and extracts
/// its operands. Supporting a new operation means adding one here.
pub mod recognizer;
