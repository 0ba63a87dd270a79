//! Interactive operation dispatcher
//!
//! A session asks for whatever the request leaves open (the operation and
//! the two file paths), loads both matrices, applies the operation and prints
//! the result. Load and arithmetic failures are reported on the error stream
//! and end the session without a result; they are not propagated as errors.

use crate::error::{Failure, SessionError};
use crate::file_io::MatrixFile;
use crate::output::OutputFormat;
use spmx_core::{Operation, SparseMatrix};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const OPERATION_PROMPT: &str =
    "Select an operation:\n 1.addition\n 2.subtraction\n 3.multiplication\n Your choice: ";
pub const INVALID_OPERATION: &str = "invalid option, please select a number 1, 2 or 3";
pub const FIRST_PATH_PROMPT: &str = "Enter your first matrix file pathaway: ";
pub const SECOND_PATH_PROMPT: &str = "Enter your second matrix file pathway: ";

/// What is already known before the session starts
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub operation: Option<Operation>,
    pub first: Option<PathBuf>,
    pub second: Option<PathBuf>,
    pub format: OutputFormat,
}

/// How a session ended
#[derive(Debug)]
pub enum Outcome {
    /// The result was computed and printed
    Completed(SparseMatrix),
    /// A matrix could not be loaded or combined; the message was printed
    Failed(Failure),
    /// Input ended before all answers were given
    Aborted,
}

/// Prompt-driven session over arbitrary streams
pub struct Session<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Run the session to completion
    pub fn run(&mut self, request: &Request) -> Result<Outcome, SessionError> {
        let operation = match request.operation {
            Some(op) => op,
            None => match self.choose_operation()? {
                Some(op) => op,
                None => return Ok(Outcome::Aborted),
            },
        };
        info!(%operation, "operation selected");

        let Some(first) = self.path_or_prompt(request.first.as_deref(), FIRST_PATH_PROMPT)? else {
            return Ok(Outcome::Aborted);
        };
        let Some(second) = self.path_or_prompt(request.second.as_deref(), SECOND_PATH_PROMPT)?
        else {
            return Ok(Outcome::Aborted);
        };

        let result = match compute(operation, &first, &second) {
            Ok(result) => result,
            Err(failure) => {
                debug!(error = ?failure, "session failed");
                writeln!(self.err, "{failure}")?;
                return Ok(Outcome::Failed(failure));
            }
        };

        let (rows, cols) = result.dimensions();
        debug!(rows, cols, nnz = result.nnz(), "computed result");
        self.out.write_all(request.format.render(&result)?.as_bytes())?;
        self.out.flush()?;
        Ok(Outcome::Completed(result))
    }

    /// Ask for an operation until a valid menu choice is given
    ///
    /// Returns `None` when input ends first.
    fn choose_operation(&mut self) -> Result<Option<Operation>, SessionError> {
        loop {
            let Some(answer) = self.ask(OPERATION_PROMPT)? else {
                return Ok(None);
            };
            if let Some(op) = Operation::from_choice(&answer) {
                return Ok(Some(op));
            }
            warn!(choice = %answer, "invalid operation choice");
            writeln!(self.out, "{INVALID_OPERATION}")?;
        }
    }

    fn path_or_prompt(
        &mut self,
        given: Option<&Path>,
        prompt: &str,
    ) -> Result<Option<PathBuf>, SessionError> {
        match given {
            Some(path) => Ok(Some(path.to_path_buf())),
            None => Ok(self.ask(prompt)?.map(PathBuf::from)),
        }
    }

    /// Print `prompt` and read one answer line without its line ending
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }
}

/// Load both operands and apply `operation`
pub fn compute(
    operation: Operation,
    first: &Path,
    second: &Path,
) -> Result<SparseMatrix, Failure> {
    let lhs = MatrixFile::read(first)?;
    let rhs = MatrixFile::read(second)?;
    Ok(operation.apply(&lhs, &rhs)?)
}
