//! Reading puzzle input from disk.
use std::{fs, path::Path};

use crate::{InputError, ParseError};

/// Reads the whole puzzle file into memory.
pub fn read_puzzle(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the puzzle file and hands its contents to `parse`.
pub fn load<T, F>(path: &Path, parse: F) -> Result<T, InputError>
where
    F: FnOnce(&str) -> Result<T, ParseError>,
{
    let puzzle = read_puzzle(path)?;
    parse(&puzzle).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::parse_lines;
    use std::io::Write;

    #[test]
    fn loads_and_parses_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "7 6 4 2 1").unwrap();
        writeln!(file, "1 2 7 8 9").unwrap();
        let reports = load(file.path(), parse_lines::<i32>).unwrap();
        assert_eq!(reports, vec![vec![7, 6, 4, 2, 1], vec![1, 2, 7, 8, 9]]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load(&path, parse_lines::<i32>).unwrap_err();
        match err {
            InputError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 3").unwrap();
        writeln!(file, "4 five 6").unwrap();
        let err = load(file.path(), parse_lines::<i32>).unwrap_err();
        assert!(matches!(
            err,
            InputError::Parse {
                source: ParseError::Token { line: 2, .. },
                ..
            }
        ));
    }
}
