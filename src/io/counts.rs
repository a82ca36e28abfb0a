//!
//! Read count matrices and recombination fractions from text
//!
//! ```text
//! # markers in rows, individuals in columns
//! 5   0   3
//! 0   2   0
//! ```
//!
use crate::common::{Count, CountMatrix};
use crate::errors::{InputError, ReadError};
use itertools::Itertools;
use std::io::BufRead;
use std::str::FromStr;

///
/// parse whitespace separated tokens of each meaningful line
/// into `(line number, tokens)`.
/// blank lines and lines starting with `#` are skipped.
///
fn parse_lines<R: BufRead, T: FromStr>(reader: R) -> Result<Vec<(usize, Vec<T>)>, ReadError>
where
    T::Err: std::fmt::Display,
{
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let row = text
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|e| InputError::Parse {
                    line: i + 1,
                    token: token.to_string(),
                    msg: e.to_string(),
                })
            })
            .collect::<Result<Vec<T>, InputError>>()?;
        rows.push((i + 1, row));
    }
    Ok(rows)
}

///
/// Read a `[marker, individual]` count matrix.
///
pub fn read_count_matrix<R: BufRead>(reader: R) -> Result<CountMatrix, ReadError> {
    let rows: Vec<(usize, Vec<Count>)> = parse_lines(reader)?;
    let n_individuals = match rows.first() {
        Some((_, first)) => first.len(),
        None => return Err(InputError::EmptyMatrix.into()),
    };
    // all rows should have the same number of columns
    if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != n_individuals) {
        return Err(InputError::RaggedMatrix {
            line: *line,
            got: row.len(),
            expected: n_individuals,
        }
        .into());
    }
    Ok(CountMatrix::from_shape_fn(
        (rows.len(), n_individuals),
        |(m, i)| rows[m].1[i],
    ))
}

///
/// Read a count matrix from the file.
///
pub fn count_matrix_from_file<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<CountMatrix, ReadError> {
    let file = std::fs::File::open(path)?;
    read_count_matrix(std::io::BufReader::new(file))
}

///
/// Read recombination fractions separated by whitespaces or newlines.
///
pub fn read_rec_fracs<R: BufRead>(reader: R) -> Result<Vec<f64>, ReadError> {
    let rows: Vec<(usize, Vec<f64>)> = parse_lines(reader)?;
    Ok(rows.into_iter().flat_map(|(_, row)| row).collect())
}

///
/// Read recombination fractions from the file.
///
pub fn rec_fracs_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<f64>, ReadError> {
    let file = std::fs::File::open(path)?;
    read_rec_fracs(std::io::BufReader::new(file))
}

///
/// Write a count matrix in the format `read_count_matrix` accepts.
///
pub fn write_count_matrix<W: std::io::Write>(
    counts: &CountMatrix,
    mut writer: W,
) -> std::io::Result<()> {
    for row in counts.rows() {
        writeln!(writer, "{}", row.iter().join("\t"))?;
    }
    Ok(())
}
