use std::io::{self, Write};

use log::info;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    error::ShellError,
    interpreter::engine::{Engine, EvalResult},
};

/// The command that ends a session, matched without regard to letter case.
pub const EXIT_COMMAND: &str = "exit";

const HELP: &str = "USO di UselessCalc:\n\n   exit    Esce dall'applicazione\n";

/// Options controlling what the interactive loop prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the banner before every prompt.
    pub banner: bool,
    /// Follow an unrecognized response with an error line and the usage help.
    pub strict: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { banner: true,
               strict: false, }
    }
}

/// The interactive read-evaluate-print loop around an [`Engine`].
///
/// The shell owns all terminal I/O. It recognizes the exit command itself and
/// passes every other line to the engine untouched.
pub struct Shell {
    engine: Engine,
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell around `engine`.
    #[must_use]
    pub const fn new(engine: Engine, config: ShellConfig) -> Self {
        Self { engine, config }
    }

    /// Returns `true` if `line` is the exit command in any letter case.
    ///
    /// # Example
    /// ```
    /// use uselesscalc::shell::Shell;
    ///
    /// assert!(Shell::is_exit("EXIT"));
    /// assert!(Shell::is_exit("Exit"));
    /// assert!(!Shell::is_exit(" exit"));
    /// ```
    #[must_use]
    pub fn is_exit(line: &str) -> bool {
        line.eq_ignore_ascii_case(EXIT_COMMAND)
    }

    /// The text printed before each prompt.
    #[must_use]
    pub fn banner() -> String {
        format!("=======================\nUSELESS CALC v.{}\n-----------------------\nCosa posso fare \
                 per te?\n",
                env!("CARGO_PKG_VERSION"))
    }

    /// Handles one line read from the user.
    ///
    /// # Returns
    /// - `None` if the line is the exit command; the engine is not consulted.
    /// - `Some(text)` with everything to print in response otherwise.
    ///
    /// # Example
    /// ```
    /// use uselesscalc::{
    ///     interpreter::engine::Engine,
    ///     shell::{Shell, ShellConfig},
    /// };
    ///
    /// let shell = Shell::new(Engine::new(), ShellConfig::default());
    /// assert_eq!(shell.handle_line("8+34").as_deref(), Some("RESPONSE: 42"));
    /// assert_eq!(shell.handle_line("8*34").as_deref(), Some("RESPONSE: Boh!"));
    /// assert_eq!(shell.handle_line("eXiT"), None);
    /// ```
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Option<String> {
        if Self::is_exit(line) {
            return None;
        }

        let result = self.engine.evaluate(Some(line));
        let mut response = format!("RESPONSE: {result}");

        if self.config.strict && result.is_unrecognized() {
            response.push_str(&format!("\nERRORE: Il comando '{line}' non è valido o non è \
                                        supportato\n\n{HELP}"));
        }

        Some(response)
    }

    /// Evaluates `expressions` without entering the loop.
    ///
    /// Each result is rendered bare, one per expression.
    #[must_use]
    pub fn evaluate_all<S: AsRef<str>>(&self, expressions: &[S]) -> Vec<EvalResult> {
        expressions.iter()
                   .map(|expr| self.engine.evaluate(Some(expr.as_ref())))
                   .collect()
    }

    /// Runs the loop on the terminal until the exit command or end of input.
    ///
    /// # Errors
    /// Returns an error if the line editor cannot be created or fails to read,
    /// or if writing to standard output fails.
    pub fn run(&self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        let mut out = io::stdout();

        info!("session started");

        loop {
            if self.config.banner {
                write!(out, "{}", Self::banner())?;
                out.flush()?;
            }

            let line = match editor.readline("") {
                Ok(line) => line,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(e) => return Err(e.into()),
            };
            editor.add_history_entry(line.as_str())?;

            match self.handle_line(&line) {
                Some(response) => writeln!(out, "{response}")?,
                None => break,
            }
        }

        info!("session ended");
        Ok(())
    }
}
