//! # uselesscalc
//!
//! uselesscalc evaluates single two-operand integer expressions such as `8+34`
//! or `34-8`. Anything else, from whitespace to a third operand, is answered
//! with a fixed marker instead of an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::engine::{Engine, EvalResult};

/// Provides the error types of the crate.
///
/// # Responsibilities
/// - Describes why an input line was not recognized, with the offending token
///   and its position where there is one.
/// - Wraps terminal I/O failures of the interactive shell.
pub mod error;
/// Turns input lines into results.
///
/// This module ties together the lexer, the per-operation recognizers, the
/// operation type and the engine that answers one request at a time.
///
/// # Responsibilities
/// - Tokenizes a line and matches it against every supported operation.
/// - Evaluates recognized operations exactly.
/// - Maps every unrecognized line to the marker.
pub mod interpreter;
/// The interactive shell.
///
/// Reads lines from the terminal, handles the exit command, and prints each
/// result. It is a caller of the engine and holds no evaluation logic.
pub mod shell;

/// Evaluates `input` with a default [`Engine`].
///
/// # Examples
/// ```
/// use uselesscalc::{evaluate, interpreter::engine::EvalResult};
///
/// assert_eq!(evaluate("8+34"), EvalResult::Number(42));
/// assert_eq!(evaluate("34-8"), EvalResult::Number(26));
///
/// // Only one operator and two operands are supported.
/// assert_eq!(evaluate("10+34+4").to_string(), "Boh!");
/// ```
#[must_use]
pub fn evaluate(input: &str) -> EvalResult {
    Engine::new().evaluate(Some(input))
}
