//! Board representation: squares, cells, sides.
//!
//! Rows are numbered 0..8 from black's home edge; white starts on rows
//! 5..8 and moves toward row 0. Only dark squares (odd `row + col`) hold
//! pieces.

use serde::{Deserialize, Serialize};

use crate::core::ValidationError;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Diagonal directions as (row delta, col delta), in generation order.
pub const UP_LEFT: (i8, i8) = (-1, -1);
pub const UP_RIGHT: (i8, i8) = (-1, 1);
pub const DOWN_LEFT: (i8, i8) = (1, -1);
pub const DOWN_RIGHT: (i8, i8) = (1, 1);
pub const ALL_DIRECTIONS: [(i8, i8); 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

const FILES: &[u8; 8] = b"abcdefgh";

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square. Bounds are checked where squares enter the engine.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check the square lies on the board.
    #[must_use]
    pub fn on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Check the square is a playable (dark) square.
    #[must_use]
    pub fn is_dark(self) -> bool {
        (u16::from(self.row) + u16::from(self.col)) % 2 == 1
    }

    /// The square `(dr, dc)` away, if it is on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Bit for this square in a 64-bit square set.
    #[must_use]
    pub fn bit(self) -> u64 {
        1u64 << (self.row as usize * BOARD_SIZE + self.col as usize)
    }

    /// Parse algebraic notation: file letter `a`-`h`, rank `1`-`8` (rank = row + 1).
    pub fn parse(text: &str) -> Result<Square, ValidationError> {
        let bytes = text.trim().as_bytes();
        let bad = || ValidationError::BadNotation(text.trim().to_string());
        if bytes.len() != 2 {
            return Err(bad());
        }
        let col = FILES.iter().position(|&f| f == bytes[0].to_ascii_lowercase()).ok_or_else(bad)?;
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(bad()),
        };
        Ok(Square::new(row, col as u8))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", FILES[self.col as usize % BOARD_SIZE] as char, self.row + 1)
    }
}

/// The two colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other colour.
    #[must_use]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row where this side's men are crowned.
    #[must_use]
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Forward diagonals for this side's men.
    #[must_use]
    pub fn forward_directions(self) -> &'static [(i8, i8)] {
        match self {
            Side::White => &[UP_LEFT, UP_RIGHT],
            Side::Black => &[DOWN_LEFT, DOWN_RIGHT],
        }
    }
}

/// Contents of a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Cell {
    /// Owner of the piece, `None` for an empty square.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
            Cell::BlackMan | Cell::BlackKing => Some(Side::Black),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn is_king(self) -> bool {
        matches!(self, Cell::WhiteKing | Cell::BlackKing)
    }

    /// The king of the same colour; kings and empty squares are unchanged.
    #[must_use]
    pub fn crowned(self) -> Cell {
        match self {
            Cell::WhiteMan => Cell::WhiteKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// Directions for a simple step or the first jump of a turn.
    #[must_use]
    pub fn move_directions(self) -> &'static [(i8, i8)] {
        match (self.side(), self.is_king()) {
            (None, _) => &[],
            (Some(_), true) => &ALL_DIRECTIONS,
            (Some(side), false) => side.forward_directions(),
        }
    }

    /// Text form: `w`/`b` for men, `W`/`B` for kings, space when empty.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::WhiteMan => 'w',
            Cell::WhiteKing => 'W',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }

    /// Parse the text form; `.` is accepted as empty.
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' => Some(Cell::Empty),
            'w' => Some(Cell::WhiteMan),
            'W' => Some(Cell::WhiteKing),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }
}

/// 8x8 grid of cells. `Copy`, so every derived state owns its own board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard setup: black men on rows 0..3, white men on rows 5..8.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let sq = Square::new(row, col);
                if !sq.is_dark() {
                    continue;
                }
                match row {
                    0..=2 => board.set(sq, Cell::BlackMan),
                    5..=7 => board.set(sq, Cell::WhiteMan),
                    _ => {}
                }
            }
        }
        board
    }

    /// Parse eight rows of eight characters, row 0 first.
    ///
    /// ```
    /// use rust_duel::games::checkers::{Board, Cell, Square};
    ///
    /// let board = Board::from_rows([
    ///     "        ",
    ///     "        ",
    ///     "        ",
    ///     "  b     ",
    ///     "   w    ",
    ///     "        ",
    ///     "        ",
    ///     "        ",
    /// ]).unwrap();
    /// assert_eq!(board.get(Square::new(4, 3)), Cell::WhiteMan);
    /// ```
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, ValidationError> {
        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ValidationError::BadBoardRow {
                    row,
                    reason: format!("expected {} cells, got {}", BOARD_SIZE, chars.len()),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| ValidationError::BadBoardRow {
                    row,
                    reason: format!("unknown piece {:?}", c),
                })?;
                let sq = Square::new(row as u8, col as u8);
                if !cell.is_empty() && !sq.is_dark() {
                    return Err(ValidationError::LightSquare {
                        row: sq.row,
                        col: sq.col,
                    });
                }
                board.set(sq, cell);
            }
        }
        Ok(board)
    }

    /// Contents of a square. Squares off the board read as empty.
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells
            .get(sq.row as usize)
            .and_then(|row| row.get(sq.col as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite a square.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row as usize][sq.col as usize] = cell;
    }

    /// Pieces of one side in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, &cell)| {
                (cell.side() == Some(side)).then_some((Square::new(row as u8, col as u8), cell))
            })
        })
    }

    /// Number of pieces a side has.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Check a side has at least one piece.
    #[must_use]
    pub fn has_pieces(&self, side: Side) -> bool {
        self.pieces(side).next().is_some()
    }

    /// Rows of cells, row 0 first.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in (0..BOARD_SIZE as u8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                let sq = Square::new(row, col);
                let c = if sq.is_dark() { self.get(sq).to_char() } else { '.' };
                write!(f, "{} ", c)?;
            }
            writeln!(f, "{}", row + 1)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
