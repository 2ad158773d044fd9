#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every reason an input line can fail to become an operation.
///
/// None of these reach the user as a failure: the engine turns all of them into
/// the unrecognized marker. They exist so callers and logs can tell why.
pub enum ParseError {
    /// No input was supplied at all.
    MissingInput,
    /// Found a character sequence the lexer does not know.
    UnexpectedToken {
        /// The offending slice of the input.
        token:    String,
        /// Byte offset of the slice within the input.
        position: usize,
    },
    /// An operand has more digits than an unsigned 64-bit integer can hold.
    LiteralTooLarge {
        /// Byte offset of the literal within the input.
        position: usize,
    },
    /// The input tokenized cleanly but its shape matches no operation.
    Unrecognized {
        /// The full input line.
        input: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => write!(f, "No input was given."),

            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token at offset {position}: '{token}'.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Literal at offset {position} is too large.")
            },

            Self::Unrecognized { input } => {
                write!(f, "'{input}' does not match any supported operation.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
