//! Text format for sparse matrices
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! The first two non-blank lines declare the shape as `key=value`; the key is
//! ignored and only the position matters. Every further non-blank line is one
//! `(row, col, value)` entry. Result files carry the entry lines only, unless
//! the layout asks for the header.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};
use num_traits::Num;

use crate::config::OutputLayout;
use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrix;

/// Parse a matrix from its text form
///
/// Entries addressing a coordinate outside the declared shape are skipped.
/// Later entries overwrite earlier ones and a zero value clears the
/// coordinate, exactly as [`SparseMatrix::set`] does.
pub fn parse_matrix<T>(text: &str) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    let end_line = text.lines().count() + 1;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let n_rows = parse_dimension(lines.next(), "rows", end_line)?;
    let n_cols = parse_dimension(lines.next(), "cols", end_line)?;
    let mut matrix = SparseMatrix::new(n_rows, n_cols);

    for (line_no, line) in lines {
        let (row, col, value) = parse_entry::<T>(line_no, line)?;
        if row >= n_rows || col >= n_cols {
            warn!(
                "line {}: skipping entry ({}, {}) outside a {}×{} matrix",
                line_no, row, col, n_rows, n_cols
            );
            continue;
        }
        matrix.set(row, col, value)?;
    }

    debug!("parsed {}×{} matrix with {} entries", n_rows, n_cols, matrix.nnz());
    Ok(matrix)
}

/// Read and parse a matrix file
pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("loading matrix from {}", path.display());
    parse_matrix(&text)
}

/// Write one `(row, col, value)` line per stored entry, without a header
pub fn write_entries<T, W>(writer: &mut W, matrix: &SparseMatrix<T>, sorted: bool) -> Result<()>
where
    T: Copy + Num + std::fmt::Display,
    W: Write,
{
    if sorted {
        for (row, col, value) in matrix.sorted_entries() {
            writeln!(writer, "({}, {}, {})", row, col, value)?;
        }
    } else {
        for ((row, col), value) in matrix.iter() {
            writeln!(writer, "({}, {}, {})", row, col, value)?;
        }
    }
    Ok(())
}

/// Write a matrix according to `layout`
pub fn write_matrix<T, W>(writer: &mut W, matrix: &SparseMatrix<T>, layout: OutputLayout) -> Result<()>
where
    T: Copy + Num + std::fmt::Display,
    W: Write,
{
    if layout.header {
        writeln!(writer, "rows={}", matrix.n_rows)?;
        writeln!(writer, "cols={}", matrix.n_cols)?;
    }
    write_entries(writer, matrix, layout.sorted)
}

/// Render a matrix as text according to `layout`
pub fn format_matrix<T>(matrix: &SparseMatrix<T>, layout: OutputLayout) -> Result<String>
where
    T: Copy + Num + std::fmt::Display,
{
    let mut buffer = Vec::new();
    write_matrix(&mut buffer, matrix, layout)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a matrix to a file, replacing any existing content
pub fn save_matrix<T, P>(path: P, matrix: &SparseMatrix<T>, layout: OutputLayout) -> Result<()>
where
    T: Copy + Num + std::fmt::Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_matrix(&mut writer, matrix, layout)?;
    writer.flush()?;

    info!("wrote {} entries to {}", matrix.nnz(), path.display());
    Ok(())
}

fn parse_dimension(line: Option<(usize, &str)>, name: &str, end_line: usize) -> Result<usize> {
    let (line_no, line) =
        line.ok_or_else(|| SparseError::parse(end_line, format!("missing {} declaration", name)))?;

    let (_, value) = line
        .split_once('=')
        .ok_or_else(|| SparseError::parse(line_no, format!("expected {}=<integer>, found '{}'", name, line)))?;

    value
        .trim()
        .parse()
        .map_err(|_| SparseError::parse(line_no, format!("invalid {} count '{}'", name, value.trim())))
}

fn parse_entry<T>(line_no: usize, line: &str) -> Result<(usize, usize, T)>
where
    T: FromStr,
{
    let fields: Vec<&str> = line
        .trim_matches(|c| c == '(' || c == ')')
        .split(',')
        .map(str::trim)
        .collect();

    if fields.len() != 3 {
        return Err(SparseError::parse(
            line_no,
            format!("expected 3 fields, found {} in '{}'", fields.len(), line),
        ));
    }

    let row = fields[0]
        .parse()
        .map_err(|_| SparseError::parse(line_no, format!("invalid row index '{}'", fields[0])))?;
    let col = fields[1]
        .parse()
        .map_err(|_| SparseError::parse(line_no, format!("invalid column index '{}'", fields[1])))?;
    let value = fields[2]
        .parse()
        .map_err(|_| SparseError::parse(line_no, format!("invalid value '{}'", fields[2])))?;

    Ok((row, col, value))
}
