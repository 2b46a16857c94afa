use std::{io, num::ParseIntError, path::PathBuf};

/// Malformed puzzle text. Line numbers are 1-based.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("puzzle input is empty")]
    Empty,
    #[error("line {line} has no numbers on it")]
    EmptyLine { line: usize },
    #[error("line {line}: {token:?} is not a valid integer")]
    Token {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: expected {expected} numbers, found {found}")]
    Width {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure to produce parsed puzzle data from a file on disk.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("failed to read puzzle input {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse puzzle input {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
