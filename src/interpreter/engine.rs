use log::{debug, trace};

use crate::interpreter::parser::core::{ParseResult, try_parse};

/// The marker returned for any input that is not a supported operation.
pub const UNRECOGNIZED_MARKER: &str = "Boh!";

/// The outcome of evaluating one input line.
///
/// Either the numeric value of a recognized operation or the engine's
/// unrecognized marker. The two never share a representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    /// The value of a recognized operation.
    Number(i128),
    /// No operation was recognized; holds the engine's marker text.
    Unrecognized(String),
}

impl EvalResult {
    /// Returns `true` if no operation was recognized.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Returns the numeric value, if there is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<i128> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for EvalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Unrecognized(marker) => write!(f, "{marker}"),
        }
    }
}

/// Evaluates input lines one request at a time.
///
/// The engine holds nothing but its marker text, so it can be shared freely
/// and requests never influence each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    marker: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine that answers unrecognized input with
    /// [`UNRECOGNIZED_MARKER`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker(UNRECOGNIZED_MARKER)
    }

    /// Creates an engine with a custom unrecognized marker.
    #[must_use]
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self { marker: marker.into() }
    }

    /// The text returned for unrecognized input.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Evaluates one input line.
    ///
    /// This never fails: anything the parser rejects, including a missing
    /// line, comes back as [`EvalResult::Unrecognized`].
    ///
    /// # Example
    /// ```
    /// use uselesscalc::interpreter::engine::{Engine, EvalResult};
    ///
    /// let engine = Engine::new();
    /// assert_eq!(engine.evaluate(Some("8+34")), EvalResult::Number(42));
    /// assert_eq!(engine.evaluate(Some("10-34")), EvalResult::Number(-24));
    /// assert_eq!(engine.evaluate(Some("a+1")),
    ///            EvalResult::Unrecognized("Boh!".to_string()));
    /// assert!(engine.evaluate(None).is_unrecognized());
    /// ```
    #[must_use]
    pub fn evaluate(&self, input: Option<&str>) -> EvalResult {
        match self.try_evaluate(input) {
            Ok(value) => EvalResult::Number(value),
            Err(e) => {
                trace!("input not recognized: {e}");
                EvalResult::Unrecognized(self.marker.clone())
            },
        }
    }

    /// Evaluates one input line, keeping the reason when it is not recognized.
    ///
    /// # Errors
    /// Returns the [`ParseError`](crate::error::ParseError) describing why no
    /// operation matched.
    #[allow(clippy::unused_self)]
    pub fn try_evaluate(&self, input: Option<&str>) -> ParseResult<i128> {
        let operation = try_parse(input)?;
        debug!("recognized {operation:?}");
        Ok(operation.evaluate())
    }
}
