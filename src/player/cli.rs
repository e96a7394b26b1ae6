#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::core::{Coordinate, ShotError};

use super::MoveSource;

/// Why a line of input could not be turned into a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Enter two coordinates: row and column (e.g. 3 4)")]
    WrongTokenCount,
    #[error("Coordinates must be whole numbers")]
    NotANumber,
}

/// Parse a line of the form `row col` in one-based display coordinates.
///
/// Numbers outside the board are accepted here; the board rejects them.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::WrongTokenCount);
    };
    let parse = |t: &str| -> Result<i32, InputError> {
        if !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        t.parse().map_err(|_| InputError::NotANumber)
    };
    Ok(Coordinate::from_display(parse(row)?, parse(col)?))
}

/// Format `coord` the way players type it.
pub fn coord_to_string(coord: Coordinate) -> String {
    let (row, col) = coord.to_display();
    format!("{} {}", row, col)
}

/// Human player reading targets from a console.
pub struct CliSource<R, W> {
    input: R,
    output: W,
}

impl CliSource<StdinLock<'static>, Stdout> {
    /// Read from standard input, prompt on standard output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, msg: &str) {
        if let Err(e) = writeln!(self.output, "{}", msg) {
            log::warn!("failed to write to console: {}", e);
        }
    }

    fn prompt(&mut self) {
        let written = write!(self.output, "Your move: ").and_then(|()| self.output.flush());
        if let Err(e) = written {
            log::warn!("failed to write to console: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for CliSource<R, W> {
    fn next_target(&mut self, _board_size: usize) -> Option<Coordinate> {
        loop {
            self.prompt();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    log::info!("console input closed");
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read console input: {}", e);
                    return None;
                }
            }
            match parse_target(&line) {
                Ok(coord) => return Some(coord),
                Err(e) => self.say(&format!(" {} ", e)),
            }
        }
    }

    fn handle_rejected_shot(&mut self, _coord: Coordinate, error: &ShotError) {
        let msg = match error {
            ShotError::OutOfBounds { .. } => "You are trying to shoot off the board!".to_string(),
            ShotError::AlreadyTargeted { coord } => {
                format!("You already shot at {}", coord_to_string(*coord))
            }
        };
        self.say(&msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_one_based_pairs() {
        assert_eq!(parse_target("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_target("  6\t3 \n"), Ok(Coordinate::new(5, 2)));
        assert_eq!(parse_target("0 7"), Ok(Coordinate::new(-1, 6)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_target(""), Err(InputError::WrongTokenCount));
        assert_eq!(parse_target("3"), Err(InputError::WrongTokenCount));
        assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount));
        assert_eq!(parse_target("a 2"), Err(InputError::NotANumber));
        assert_eq!(parse_target("-1 2"), Err(InputError::NotANumber));
        assert_eq!(parse_target("99999999999 2"), Err(InputError::NotANumber));
    }

    #[test]
    fn reprompts_until_valid() {
        let input = Cursor::new("hello\n4\nx y\n2 5\n");
        let mut source = CliSource::new(input, Vec::<u8>::new());
        assert_eq!(source.next_target(6), Some(Coordinate::new(1, 4)));
        let (_, out) = source.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Your move: ").count(), 4);
        assert_eq!(out.matches("Enter two coordinates").count(), 2);
        assert_eq!(out.matches("whole numbers").count(), 1);
    }

    #[test]
    fn closed_input_ends_the_source() {
        let mut source = CliSource::new(Cursor::new(""), Vec::<u8>::new());
        assert_eq!(source.next_target(6), None);
    }

    #[test]
    fn reports_rejections() {
        let mut source = CliSource::new(Cursor::new(""), Vec::<u8>::new());
        let coord = Coordinate::new(1, 1);
        source.handle_rejected_shot(coord, &ShotError::AlreadyTargeted { coord });
        source.handle_rejected_shot(coord, &ShotError::OutOfBounds { coord });
        let out = String::from_utf8(source.into_inner().1).unwrap();
        assert!(out.contains("already shot at 2 2"));
        assert!(out.contains("off the board"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn output_failures_do_not_stop_input() {
        let mut source = CliSource::new(Cursor::new("oops\n3 3\n"), BrokenPipe);
        assert_eq!(source.next_target(6), Some(Coordinate::new(2, 2)));
        source.handle_rejected_shot(
            Coordinate::new(2, 2),
            &ShotError::OutOfBounds {
                coord: Coordinate::new(2, 2),
            },
        );
    }
}
