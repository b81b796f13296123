//! Text-format boundary for matrices and vectors.
//!
//! The reader accepts the binary adjacency format only:
//!
//! ```text
//! SparseMatrix: <m> by <n>
//! row <i>: <col> <col> ... -1
//! ```
//!
//! [`write_matrix`] dumps `<col>:<value>` pairs (it also works for normalized
//! matrices) and its output is **not** re-readable by [`read_matrix`];
//! [`write_adjacency`] emits the reader's column-only format. Values are
//! printed with five significant digits, `%g`-style.
//!
//! The library layer reports problems as [`Error`] values; terminating on a
//! malformed file is the caller's call (the demo binary does).

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::sparse::SparseMatrix;
use crate::vector::Vector;
use crate::{Error, Result};

/// Parse a sparse adjacency matrix from the text format above.
///
/// Every listed column becomes a 1.0 entry. Blank lines are skipped. The
/// numeric part of a `row <i>:` label is parsed but not compared against the
/// row's position: rows apply in file order, as in the format's original
/// reader. Any negative column index terminates a row; requiring it to be
/// exactly `-1` is not enforced.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<SparseMatrix> {
    let mut lines = reader.lines().enumerate();

    let (line_no, header) = next_content_line(&mut lines)?;
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let (m, n) = match tokens[..] {
        ["SparseMatrix:", m, "by", n] => {
            (parse_dim(m, line_no)?, parse_dim(n, line_no)?)
        }
        _ => {
            return Err(Error::Parse(format!(
                "line {line_no}: expected `SparseMatrix: <m> by <n>`"
            )))
        }
    };

    let mut matrix = SparseMatrix::new(m, n);
    let mut cols: Vec<usize> = Vec::new();
    for i in 0..m {
        let (line_no, line) = match next_content_line(&mut lines) {
            Ok(found) => found,
            Err(Error::Parse(_)) => {
                return Err(Error::Parse(format!("missing line for row {i}")))
            }
            Err(e) => return Err(e),
        };
        let mut tokens = line.split_whitespace();

        match (tokens.next(), tokens.next()) {
            (Some("row"), Some(label))
                if label
                    .strip_suffix(':')
                    .is_some_and(|idx| idx.parse::<usize>().is_ok()) => {}
            _ => {
                return Err(Error::Parse(format!(
                    "line {line_no}: expected `row <i>: <col> ... -1`"
                )))
            }
        }

        cols.clear();
        let mut terminated = false;
        for token in tokens.by_ref() {
            let c: i64 = token.parse().map_err(|_| {
                Error::Parse(format!("line {line_no}: bad column `{token}`"))
            })?;
            if c < 0 {
                terminated = true;
                break;
            }
            let c = c as usize;
            if c >= n {
                return Err(Error::Parse(format!(
                    "line {line_no}: column {c} out of range (n={n})"
                )));
            }
            cols.push(c);
        }
        if !terminated {
            return Err(Error::Parse(format!(
                "line {line_no}: missing -1 terminator"
            )));
        }
        if tokens.next().is_some() {
            return Err(Error::Parse(format!(
                "line {line_no}: trailing tokens after terminator"
            )));
        }

        matrix.set_row(i, &cols)?;
    }

    Ok(matrix)
}

/// [`read_matrix`] on a file path.
pub fn read_matrix_path<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

/// Write a matrix with its values: `row <i>: <col>:<value> ... -1`.
///
/// Works for normalized matrices too, which is exactly why the output is not
/// valid [`read_matrix`] input.
pub fn write_matrix<W: Write>(mut w: W, matrix: &SparseMatrix) -> Result<()> {
    writeln!(
        w,
        "SparseMatrix: {} by {}",
        matrix.row_count(),
        matrix.col_count()
    )?;
    for (i, row) in matrix.rows().iter().enumerate() {
        write!(w, "row {i}: ")?;
        for &(col, val) in row.entries() {
            write!(w, "{col}:{} ", fmt_g(val))?;
        }
        writeln!(w, "-1")?;
    }
    Ok(())
}

/// Write a matrix in the column-only *input* format.
///
/// The output is always valid [`read_matrix`] input and reproduces the
/// sparsity pattern exactly; values are dropped, so the round trip is
/// lossless only for binary matrices.
pub fn write_adjacency<W: Write>(mut w: W, matrix: &SparseMatrix) -> Result<()> {
    writeln!(
        w,
        "SparseMatrix: {} by {}",
        matrix.row_count(),
        matrix.col_count()
    )?;
    for (i, row) in matrix.rows().iter().enumerate() {
        write!(w, "row {i}: ")?;
        for &(col, _) in row.entries() {
            write!(w, "{col} ")?;
        }
        writeln!(w, "-1")?;
    }
    Ok(())
}

/// Write a vector: a `Vector: <dim>` header, then all entries on one line.
pub fn write_vector<W: Write>(mut w: W, v: &Vector) -> Result<()> {
    writeln!(w, "Vector: {}", v.dim())?;
    for x in v.as_slice() {
        write!(w, "{} ", fmt_g(*x))?;
    }
    writeln!(w)?;
    Ok(())
}

fn next_content_line<I>(lines: &mut I) -> Result<(usize, String)>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    loop {
        match lines.next() {
            None => return Err(Error::Parse("unexpected end of input".to_string())),
            Some((idx, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok((idx + 1, line));
                }
            }
        }
    }
}

fn parse_dim(token: &str, line_no: usize) -> Result<usize> {
    token
        .parse()
        .map_err(|_| Error::Parse(format!("line {line_no}: bad dimension `{token}`")))
}

/// `%.5g` rendering: five significant digits, fixed or scientific notation
/// picked by exponent, trailing zeros trimmed, two-digit exponent.
fn fmt_g(x: f64) -> String {
    const P: usize = 5;
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Decimal exponent after rounding to P significant digits (rounding can
    // carry into the next decade, e.g. 99999.6 -> 1e+05).
    let sci = format!("{:.*e}", P - 1, x);
    let (mantissa, exp) = sci.split_once('e').expect("scientific float format");
    let exp: i32 = exp.parse().expect("scientific float exponent");

    if exp >= -4 && exp < P as i32 {
        let precision = (P as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(format!("{:.*}", precision, x))
    } else {
        let mantissa = trim_trailing_zeros(mantissa.to_string());
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

fn trim_trailing_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
