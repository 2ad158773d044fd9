/// Parsing errors.
///
/// Defines every reason an input line can fail to become an operation, from
/// characters the lexer does not know to well-formed token streams that no
/// recognizer accepts.
pub mod parse_error;
/// Shell errors.
///
/// Terminal I/O failures raised by the interactive loop. The evaluation core
/// never produces these.
pub mod shell_error;

pub use parse_error::ParseError;
pub use shell_error::ShellError;
