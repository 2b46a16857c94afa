use std::{num::ParseIntError, str::FromStr};

use crate::ParseError;

/// Numbers on a line may be separated by any mix of ASCII whitespace and commas.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ','
}

/// Parses every integer on a single line.
///
/// A line with no numbers on it parses to an empty vector; whether that's
/// acceptable is up to the caller.
pub fn parse_line<T>(line: &str, line_no: usize) -> Result<Vec<T>, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    line.split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<T>().map_err(|source| ParseError::Token {
                line: line_no,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

/// Parses one record per line.
///
/// Trailing blank lines are ignored, but a blank line between two records is
/// an error rather than an empty record.
pub fn parse_lines<T>(puzzle: &str) -> Result<Vec<Vec<T>>, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    let puzzle = puzzle.trim_end();
    if puzzle.is_empty() {
        return Err(ParseError::Empty);
    }
    puzzle
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let line_no = idx + 1;
            let nums = parse_line(line, line_no)?;
            if nums.is_empty() {
                return Err(ParseError::EmptyLine { line: line_no });
            }
            Ok(nums)
        })
        .collect()
}

/// Parses one record per line where every record has exactly `N` numbers.
pub fn parse_rows<T, const N: usize>(puzzle: &str) -> Result<Vec<[T; N]>, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    parse_lines::<T>(puzzle)?
        .into_iter()
        .enumerate()
        .map(|(idx, nums)| {
            <[T; N]>::try_from(nums).map_err(|nums| ParseError::Width {
                line: idx + 1,
                expected: N,
                found: nums.len(),
            })
        })
        .collect()
}
