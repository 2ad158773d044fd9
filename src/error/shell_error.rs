use rustyline::error::ReadlineError;

#[derive(Debug)]
/// Represents failures of the interactive shell's terminal I/O.
pub enum ShellError {
    /// The line editor failed to start or to read a line.
    Readline(ReadlineError),
    /// Writing a response to the output failed.
    Io(std::io::Error),
}

impl From<ReadlineError> for ShellError {
    fn from(e: ReadlineError) -> Self {
        Self::Readline(e)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Readline(e) => write!(f, "Failed to read input: {e}"),
            Self::Io(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Readline(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}
