//! Text rendering of boards. Read-only: nothing here mutates game state.

use alloc::string::{String, ToString};
use core::fmt;

use crate::core::{Board, CellState, Coordinate};

pub const WATER: char = 'O';
pub const SHIP: char = '■';
pub const HIT: char = 'X';
pub const MISS: char = 'T';

/// Marker for a single cell, honouring the board's concealment.
pub fn cell_marker(board: &Board, coord: Coordinate) -> char {
    match board.cell(coord) {
        Some(CellState::Occupied) if board.is_concealed() => WATER,
        Some(CellState::Occupied) => SHIP,
        Some(CellState::Hit) => HIT,
        Some(CellState::Miss) => MISS,
        Some(CellState::Water) | None => WATER,
    }
}

/// `Display` adapter drawing a board as a numbered grid:
///
/// ```text
///   | 1 | 2 | 3 |
/// 1 | O | ■ | O |
/// 2 | T | X | O |
/// 3 | O | O | O |
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let size = board.size();
        let width = size.to_string().len();
        write!(f, "{:width$} |", "", width = width)?;
        for col in 1..=size {
            write!(f, " {:<width$} |", col, width = width)?;
        }
        for row in 0..size {
            write!(f, "\n{:<width$} |", row + 1, width = width)?;
            for col in 0..size {
                let marker = cell_marker(board, Coordinate::new(row as i32, col as i32));
                write!(f, " {:<width$} |", marker, width = width)?;
            }
        }
        Ok(())
    }
}

/// Render `board` to a string.
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Vessel};

    fn board() -> Board {
        let mut board = Board::new(3, 2);
        board
            .place_vessel(Vessel::new(Coordinate::new(0, 1), 1, Orientation::Vertical))
            .unwrap();
        board
            .place_vessel(Vessel::new(Coordinate::new(2, 0), 2, Orientation::Horizontal))
            .unwrap();
        board.begin_play();
        board.shoot(Coordinate::new(2, 2)).unwrap();
        board.shoot(Coordinate::new(2, 0)).unwrap();
        board
    }

    #[test]
    fn renders_all_states() {
        let b = board();
        assert_eq!(
            render_board(&b),
            "  | 1 | 2 | 3 |\n1 | O | ■ | O |\n2 | O | O | O |\n3 | X | ■ | T |"
        );
    }

    #[test]
    fn concealed_hides_intact_ships_only() {
        let mut b = board();
        b.set_concealed(true);
        assert_eq!(
            render_board(&b),
            "  | 1 | 2 | 3 |\n1 | O | O | O |\n2 | O | O | O |\n3 | X | O | T |"
        );
    }
}
