//! Parses the puzzle input format: zero or more puzzles, each a
//! cardinality-bound line followed by one or more equal-length field
//! lines, terminated by a blank line or end-of-file.

use nom::character::complete::{digit1, one_of};
use nom::multi::many1;
use nom::IResult;

use crate::error::CliError;
use crate::grid::Grid;

/// One parsed puzzle: its cardinality bound and its field.
#[derive(Debug)]
pub struct Puzzle {
    /// the cardinality bound K
    pub k: usize,
    /// the parsed field
    pub grid: Grid,
}

/// Parses the leading decimal digits of a puzzle's first line, without
/// converting them to a number yet — the digit string may be too long to
/// fit a `usize`, which the caller turns into a clean error rather than a
/// panic.
fn parse_k(line: &str) -> IResult<&str, &str> {
    digit1(line)
}

/// Parses one field row into a `0`/`1` vector; `'.'` is empty, `'@'` is a
/// strawberry.
fn parse_row(line: &str) -> IResult<&str, Vec<u8>> {
    let (rest, cells) = many1(one_of(".@"))(line)?;
    Ok((rest, cells.into_iter().map(|c| if c == '@' { 1 } else { 0 }).collect()))
}

/// Parses the whole input text into puzzles.
pub fn parse_puzzles(text: &str) -> Result<Vec<Puzzle>, CliError> {
    let mut puzzles = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue; // tolerate blank runs between puzzles
        }

        let (_, digits) = parse_k(line.trim_start())
            .map_err(|_| CliError::MalformedInput(format!("expected a cardinality digit, got {line:?}")))?;
        let k = digits.parse::<usize>().map_err(|e| {
            CliError::MalformedInput(format!("cardinality {digits:?} is not a valid number: {e}"))
        })?;

        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut width = None;
        while let Some(next) = lines.peek() {
            if next.trim().is_empty() {
                lines.next();
                break;
            }
            let row_line = lines.next().expect("peek just confirmed a line is present");
            match width {
                None => width = Some(row_line.len()),
                Some(expected) if expected != row_line.len() => {
                    return Err(CliError::MalformedInput(format!(
                        "ragged row: expected {expected} columns, got {} in {row_line:?}",
                        row_line.len()
                    )));
                }
                _ => {}
            }
            let (remainder, row) = parse_row(row_line)
                .map_err(|_| CliError::MalformedInput(format!("unrecognized cell character in {row_line:?}")))?;
            if !remainder.is_empty() {
                return Err(CliError::MalformedInput(format!("unrecognized cell character in {row_line:?}")));
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(CliError::MalformedInput(format!(
                "puzzle with K={k} has a cardinality line but no field rows"
            )));
        }

        puzzles.push(Puzzle { k, grid: Grid::new(rows) });
    }

    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_puzzle() {
        let text = "1\n@..\n...\n..@\n";
        let puzzles = parse_puzzles(text).unwrap();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].k, 1);
        assert_eq!(puzzles[0].grid.num_rows(), 3);
        assert_eq!(puzzles[0].grid.num_columns(), 3);
    }

    #[test]
    fn parses_multiple_blank_separated_puzzles() {
        let text = "1\n@\n\n2\n@.@\n";
        let puzzles = parse_puzzles(text).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[1].k, 2);
    }

    #[test]
    fn trailing_puzzle_without_blank_line_is_still_processed() {
        let text = "1\n@..\n...\n..@";
        let puzzles = parse_puzzles(text).unwrap();
        assert_eq!(puzzles.len(), 1);
    }

    #[test]
    fn rejects_ragged_rows() {
        let text = "1\n@..\n.\n";
        assert!(matches!(parse_puzzles(text), Err(CliError::MalformedInput(_))));
    }

    #[test]
    fn rejects_unrecognized_characters() {
        let text = "1\n@.x\n";
        assert!(matches!(parse_puzzles(text), Err(CliError::MalformedInput(_))));
    }

    #[test]
    fn rejects_missing_cardinality_line() {
        let text = "@..\n...\n";
        assert!(matches!(parse_puzzles(text), Err(CliError::MalformedInput(_))));
    }

    #[test]
    fn rejects_cardinality_overflowing_usize() {
        let text = "99999999999999999999999999\n@\n";
        assert!(matches!(parse_puzzles(text), Err(CliError::MalformedInput(_))));
    }
}
