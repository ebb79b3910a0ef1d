//! Readers for the plain-text inputs of a polymer build: the coordinate list, the
//! optional monomer-name sequence, and the optional list of cut points.

use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RawInputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid coordinate on line {line}: '{value}' is not a finite number")]
    InvalidCoordinate { line: usize, value: String },
    #[error("Invalid cut point on line {line}: '{value}' (expected a nonnegative integer)")]
    InvalidCut { line: usize, value: String },
}

/// Strips a trailing `#` comment and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Reads one 3-D point per line. Lines that do not consist of exactly three
/// whitespace-separated tokens are ignored.
pub fn read_coordinates(reader: &mut impl BufRead) -> Result<Vec<Point3<f64>>, RawInputError> {
    let mut coordinates = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            continue;
        }
        let mut xyz = [0.0; 3];
        for (slot, token) in xyz.iter_mut().zip(&tokens) {
            *slot = token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| RawInputError::InvalidCoordinate {
                    line: line_num + 1,
                    value: token.to_string(),
                })?;
        }
        coordinates.push(Point3::from(xyz));
    }
    Ok(coordinates)
}

/// Reads one monomer name per non-blank, non-comment line.
pub fn read_sequence(reader: &mut impl BufRead) -> Result<Vec<String>, RawInputError> {
    let mut names = Vec::new();
    for line_res in reader.lines() {
        let line = line_res?;
        let content = strip_comment(&line);
        if !content.is_empty() {
            names.push(content.to_string());
        }
    }
    Ok(names)
}

/// Reads one cut point (a nonnegative monomer index) per non-blank, non-comment line.
pub fn read_cuts(reader: &mut impl BufRead) -> Result<Vec<usize>, RawInputError> {
    let mut cuts = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let content = strip_comment(&line);
        if content.is_empty() {
            continue;
        }
        let cut = content.parse().map_err(|_| RawInputError::InvalidCut {
            line: line_num + 1,
            value: content.to_string(),
        })?;
        cuts.push(cut);
    }
    Ok(cuts)
}

pub fn read_coordinates_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Point3<f64>>, RawInputError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_coordinates(&mut reader)
}

pub fn read_sequence_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RawInputError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_sequence(&mut reader)
}

pub fn read_cuts_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<usize>, RawInputError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_cuts(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn coordinates_keep_only_three_column_lines() {
        let input = "# header\n0 0 0\n1.5 -2 3e1\n\n4 5\n7 8 9 10\n  2.0\t1.0   0.5  \n";
        let coords = read_coordinates(&mut Cursor::new(input)).unwrap();
        assert_eq!(
            coords,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.5, -2.0, 30.0),
                Point3::new(2.0, 1.0, 0.5),
            ]
        );
    }

    #[test]
    fn coordinates_report_bad_number_with_line() {
        let input = "0 0 0\n1 x 2\n";
        let result = read_coordinates(&mut Cursor::new(input));
        assert!(matches!(
            result,
            Err(RawInputError::InvalidCoordinate { line: 2, ref value }) if value == "x"
        ));
    }

    #[test]
    fn coordinates_reject_nan_and_infinity() {
        let result = read_coordinates(&mut Cursor::new("0 0 0\nnan 1 2\n"));
        assert!(matches!(
            result,
            Err(RawInputError::InvalidCoordinate { line: 2, ref value }) if value == "nan"
        ));

        let result = read_coordinates(&mut Cursor::new("0 -inf 0\n"));
        assert!(matches!(
            result,
            Err(RawInputError::InvalidCoordinate { line: 1, ref value }) if value == "-inf"
        ));
    }

    #[test]
    fn sequence_strips_comments_and_blank_lines() {
        let input = "ALA\n# a comment\n\n  GLY  # trailing comment\nSER\n";
        let names = read_sequence(&mut Cursor::new(input)).unwrap();
        assert_eq!(names, vec!["ALA", "GLY", "SER"]);
    }

    #[test]
    fn cuts_parse_nonnegative_integers() {
        let input = "7\n# comment\n4   # inline\n\n";
        let cuts = read_cuts(&mut Cursor::new(input)).unwrap();
        assert_eq!(cuts, vec![7, 4]);
    }

    #[test]
    fn cuts_reject_negative_and_non_integer_values() {
        let result = read_cuts(&mut Cursor::new("3\n-1\n"));
        assert!(matches!(result, Err(RawInputError::InvalidCut { line: 2, .. })));

        let result = read_cuts(&mut Cursor::new("2.5\n"));
        assert!(matches!(result, Err(RawInputError::InvalidCut { line: 1, .. })));
    }

    #[test]
    fn path_readers_load_from_files() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "0 0 0\n1 0 0\n").unwrap();
        let coords = read_coordinates_from_path(file.path()).unwrap();
        assert_eq!(coords.len(), 2);

        let result = read_cuts_from_path("nonexistent_cuts.txt");
        assert!(matches!(result, Err(RawInputError::Io(_))));
    }
}
