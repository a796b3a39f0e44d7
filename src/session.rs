//! Load two matrices, run a requested operation, persist the result
//!
//! This is the library side of the command line tool: everything the tool
//! does between reading the user's choices and printing a message, with the
//! paths, operation and output settings passed in explicitly.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::config::OutputConfig;
use crate::error::{Result, SparseError};
use crate::io::{read_matrix, save_matrix};
use crate::matrix::{ensure_compatible, Operation, SparseMatrix};
use crate::utils::file_stem;

/// Element type used by the command line tool
pub type Element = i64;

/// Name of the file holding `op` applied to the matrices at `left` and `right`
///
/// `data/a.txt`, `data/b.txt`, multiply gives `a_multiply_b.txt`.
pub fn result_file_name(left: &Path, right: &Path, op: Operation) -> String {
    format!("{}_{}_{}.txt", file_stem(left), op.name(), file_stem(right))
}

/// Check the operands with the dimension gate, then run the operation
pub fn compute(
    op: Operation,
    left: &SparseMatrix<Element>,
    right: &SparseMatrix<Element>,
) -> Result<SparseMatrix<Element>> {
    ensure_compatible(op, left, right)?;
    left.apply(op, right)
}

/// Two loaded matrices and the paths they came from
#[derive(Debug, Clone)]
pub struct Session {
    pub left_path: PathBuf,
    pub right_path: PathBuf,
    pub left: SparseMatrix<Element>,
    pub right: SparseMatrix<Element>,
}

impl Session {
    /// Load both matrix files
    pub fn load(left_path: impl Into<PathBuf>, right_path: impl Into<PathBuf>) -> Result<Self> {
        let left_path = left_path.into();
        let right_path = right_path.into();
        let left = read_matrix(&left_path)?;
        let right = read_matrix(&right_path)?;

        Ok(Self {
            left_path,
            right_path,
            left,
            right,
        })
    }

    /// Run `op` and write the result under `config.result_dir`
    ///
    /// Returns the path of the written file. Nothing is written when the
    /// operands are incompatible.
    pub fn run(&self, op: Operation, config: &OutputConfig) -> Result<PathBuf> {
        let result = compute(op, &self.left, &self.right)?;

        fs::create_dir_all(&config.result_dir)?;
        let path = config
            .result_dir
            .join(result_file_name(&self.left_path, &self.right_path, op));
        save_matrix(&path, &result, config.layout)?;

        info!(
            "{} of {} and {} written to {}",
            op,
            self.left_path.display(),
            self.right_path.display(),
            path.display()
        );
        Ok(path)
    }
}

/// Menu label for an operation
pub fn title(op: Operation) -> &'static str {
    match op {
        Operation::Add => "Addition",
        Operation::Subtract => "Subtraction",
        Operation::Multiply => "Multiplication",
    }
}

/// Write `message`, then read one trimmed line; end of input reads as empty
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Operation menu over an already loaded session
///
/// `1`, `2` and `3` run addition, subtraction and multiplication; `0` or end
/// of input quits; anything else re-prompts. Incompatible shapes and
/// overflowing results are reported and the menu continues. Other errors
/// end the loop.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    session: &Session,
    config: &OutputConfig,
) -> Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "Choose an operation:")?;
        writeln!(output, "1. Addition")?;
        writeln!(output, "2. Subtraction")?;
        writeln!(output, "3. Multiplication")?;
        writeln!(output)?;
        writeln!(output, "0. Quit")?;

        let choice = prompt(input, output, "Enter your choice: ")?;
        let op = match choice.as_str() {
            "1" => Operation::Add,
            "2" => Operation::Subtract,
            "3" => Operation::Multiply,
            "0" | "" => {
                writeln!(output, "Exiting program...")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid choice. Please enter a valid option.")?;
                continue;
            }
        };

        match session.run(op, config) {
            Ok(path) => writeln!(output, "{} result written to {}", title(op), path.display())?,
            Err(err @ (SparseError::DimensionMismatch { .. } | SparseError::Overflow { .. })) => {
                writeln!(output, "Can not perform {}: {}", op, err)?
            }
            Err(err) => return Err(err),
        }
    }
}
