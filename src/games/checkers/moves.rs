//! Checkers moves and move generation.
//!
//! A move is the path its piece travels: two squares for a simple step,
//! or the start square followed by every landing square of a capture chain.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ValidationError;

use super::board::{Board, Side, Square, ALL_DIRECTIONS};

/// Path buffer; most chains are short.
type Path = SmallVec<[Square; 8]>;

/// A single step or a complete capture chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCheckersMove")]
pub struct CheckersMove {
    path: Path,
}

/// Unchecked wire form; deserialization goes through [`CheckersMove::new`].
#[derive(Deserialize)]
struct RawCheckersMove {
    path: Vec<Square>,
}

impl TryFrom<RawCheckersMove> for CheckersMove {
    type Error = ValidationError;

    fn try_from(raw: RawCheckersMove) -> Result<Self, Self::Error> {
        CheckersMove::new(&raw.path)
    }
}

impl CheckersMove {
    /// Build a move from its path, checking it is well formed.
    ///
    /// Every square must be a dark square on the board, and each hop a
    /// diagonal of length 1 (only as a lone step) or 2 (a jump).
    pub fn new(squares: &[Square]) -> Result<Self, ValidationError> {
        if squares.len() < 2 {
            return Err(ValidationError::SequenceTooShort { len: squares.len() });
        }

        for &sq in squares {
            if !sq.on_board() {
                return Err(ValidationError::OffBoard {
                    row: sq.row,
                    col: sq.col,
                });
            }
            if !sq.is_dark() {
                return Err(ValidationError::LightSquare {
                    row: sq.row,
                    col: sq.col,
                });
            }
        }

        for pair in squares.windows(2) {
            let dr = (pair[1].row as i16 - pair[0].row as i16).abs();
            let dc = (pair[1].col as i16 - pair[0].col as i16).abs();
            if dr != dc || !(1..=2).contains(&dr) {
                return Err(ValidationError::NotDiagonal {
                    from: (pair[0].row, pair[0].col),
                    to: (pair[1].row, pair[1].col),
                });
            }
            if dr == 1 && squares.len() > 2 {
                return Err(ValidationError::MixedSteps);
            }
        }

        Ok(Self {
            path: SmallVec::from_slice(squares),
        })
    }

    /// Squares visited, start first.
    #[must_use]
    pub fn sequence(&self) -> &[Square] {
        &self.path
    }

    /// Start square.
    #[must_use]
    pub fn from(&self) -> Square {
        self.path[0]
    }

    /// Final landing square.
    #[must_use]
    pub fn to(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// True for captures (every hop is a jump).
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.path[0].row.abs_diff(self.path[1].row) == 2
    }

    /// Squares of the pieces jumped over, in order.
    pub fn captured(&self) -> impl Iterator<Item = Square> + '_ {
        self.path.windows(2).filter_map(|pair| {
            (pair[0].row.abs_diff(pair[1].row) == 2).then(|| {
                Square::new((pair[0].row + pair[1].row) / 2, (pair[0].col + pair[1].col) / 2)
            })
        })
    }
}

impl std::fmt::Display for CheckersMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, sq) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", sq)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for CheckersMove {
    type Err = ValidationError;

    /// Parse `c3 -> d4` style notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .split("->")
            .map(Square::parse)
            .collect::<Result<Vec<_>, _>>()?;
        CheckersMove::new(&squares)
    }
}

/// Append the simple steps of the piece on `from`.
pub(super) fn simple_steps(board: &Board, from: Square, out: &mut Vec<CheckersMove>) {
    for &(dr, dc) in board.get(from).move_directions() {
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to).is_empty() {
                out.push(CheckersMove {
                    path: SmallVec::from_slice(&[from, to]),
                });
            }
        }
    }
}

/// Append every maximal capture chain of the piece on `from`.
///
/// `opening` marks the first jump of a turn, which a man may only make
/// forward; later jumps of the same chain may go any diagonal direction.
pub(super) fn capture_chains(board: &Board, from: Square, opening: bool, out: &mut Vec<CheckersMove>) {
    let Some(side) = board.get(from).side() else {
        return;
    };

    let search = ChainSearch {
        board,
        origin: from,
        enemy: side.opponent(),
        opening_directions: board.get(from).move_directions(),
    };

    let mut path = Path::new();
    path.push(from);
    search.extend(&mut path, from, 0, opening, out);
}

/// Check whether the piece on `from` has at least one capture.
pub(super) fn can_capture(board: &Board, from: Square, opening: bool) -> bool {
    let mut out = Vec::new();
    capture_chains(board, from, opening, &mut out);
    !out.is_empty()
}

struct ChainSearch<'a> {
    board: &'a Board,
    origin: Square,
    enemy: Side,
    opening_directions: &'static [(i8, i8)],
}

impl ChainSearch<'_> {
    /// Depth-first chain extension.
    ///
    /// `captured` is the set of squares already jumped on this branch; it is
    /// passed by value so sibling branches never see each other's captures.
    /// Jumped pieces stay on the board until the move is applied, and the
    /// moving piece's origin counts as empty.
    fn extend(
        &self,
        path: &mut Path,
        at: Square,
        captured: u64,
        opening: bool,
        out: &mut Vec<CheckersMove>,
    ) {
        let directions: &[(i8, i8)] = if opening { self.opening_directions } else { &ALL_DIRECTIONS };
        let mut extended = false;

        for &(dr, dc) in directions {
            let (Some(over), Some(land)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
                continue;
            };
            if captured & over.bit() != 0 || self.board.get(over).side() != Some(self.enemy) {
                continue;
            }
            if land != self.origin && !self.board.get(land).is_empty() {
                continue;
            }

            extended = true;
            path.push(land);
            self.extend(path, land, captured | over.bit(), false, out);
            path.pop();
        }

        if !extended && path.len() > 1 {
            out.push(CheckersMove { path: path.clone() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_new_validates_path() {
        assert_eq!(
            CheckersMove::new(&[sq(5, 0)]),
            Err(ValidationError::SequenceTooShort { len: 1 })
        );
        assert_eq!(
            CheckersMove::new(&[sq(5, 0), sq(8, 1)]),
            Err(ValidationError::OffBoard { row: 8, col: 1 })
        );
        assert_eq!(
            CheckersMove::new(&[sq(5, 0), sq(4, 0)]),
            Err(ValidationError::LightSquare { row: 4, col: 0 })
        );
        assert_eq!(
            CheckersMove::new(&[sq(5, 0), sq(2, 3)]),
            Err(ValidationError::NotDiagonal {
                from: (5, 0),
                to: (2, 3)
            })
        );
        assert_eq!(
            CheckersMove::new(&[sq(5, 0), sq(3, 2), sq(2, 3)]),
            Err(ValidationError::MixedSteps)
        );

        let step = CheckersMove::new(&[sq(5, 0), sq(4, 1)]).unwrap();
        assert!(!step.is_capture());
        let jump = CheckersMove::new(&[sq(5, 0), sq(3, 2), sq(1, 4)]).unwrap();
        assert!(jump.is_capture());
        assert_eq!(jump.from(), sq(5, 0));
        assert_eq!(jump.to(), sq(1, 4));
        assert_eq!(jump.captured().collect::<Vec<_>>(), vec![sq(4, 1), sq(2, 3)]);
    }

    #[test]
    fn test_notation_round_trip() {
        let mv: CheckersMove = "a6 -> c4 -> e2".parse().unwrap();
        assert_eq!(mv.sequence(), &[sq(5, 0), sq(3, 2), sq(1, 4)]);
        assert_eq!(mv.to_string(), "a6 -> c4 -> e2");

        assert!("a6".parse::<CheckersMove>().is_err());
        assert!("a6 -> z1".parse::<CheckersMove>().is_err());
    }

    #[test]
    fn test_simple_steps_of_men() {
        let board = Board::initial();
        let mut out = Vec::new();

        simple_steps(&board, sq(5, 2), &mut out);
        let targets: Vec<_> = out.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![sq(4, 1), sq(4, 3)]);

        out.clear();
        simple_steps(&board, sq(6, 1), &mut out);
        assert!(out.is_empty(), "back-row man is blocked");
    }

    #[test]
    fn test_single_capture() {
        let board = Board::from_rows([
            "        ",
            "        ",
            "        ",
            "        ",
            "   b    ",
            "  w     ",
            "        ",
            "        ",
        ])
        .unwrap();

        let mut out = Vec::new();
        capture_chains(&board, sq(5, 2), true, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sequence(), &[sq(5, 2), sq(3, 4)]);
        assert!(can_capture(&board, sq(5, 2), true));
        // Black captures forward (down the board) over the same pair.
        assert!(can_capture(&board, sq(4, 3), true));
    }

    #[test]
    fn test_chain_is_maximal() {
        let board = Board::from_rows([
            "        ",
            "        ",
            "     b  ",
            "        ",
            "   b    ",
            "  w     ",
            "        ",
            "        ",
        ])
        .unwrap();

        let mut out = Vec::new();
        capture_chains(&board, sq(5, 2), true, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sequence(), &[sq(5, 2), sq(3, 4), sq(1, 6)]);
    }

    #[test]
    fn test_chain_branches_independently() {
        // After the first jump the man can continue left or right.
        let board = Board::from_rows([
            "        ",
            "        ",
            "   b b  ",
            "        ",
            "   b    ",
            "  w     ",
            "        ",
            "        ",
        ])
        .unwrap();

        let mut out = Vec::new();
        capture_chains(&board, sq(5, 2), true, &mut out);

        let paths: Vec<_> = out.iter().map(|m| m.sequence().to_vec()).collect();
        assert_eq!(
            paths,
            vec![
                vec![sq(5, 2), sq(3, 4), sq(1, 2)],
                vec![sq(5, 2), sq(3, 4), sq(1, 6)],
            ]
        );
    }

    #[test]
    fn test_man_continues_backward() {
        // Second jump goes back down the board.
        let board = Board::from_rows([
            "        ",
            "        ",
            "        ",
            "        ",
            "   b b  ",
            "  w     ",
            "        ",
            "        ",
        ])
        .unwrap();

        let mut out = Vec::new();
        capture_chains(&board, sq(5, 2), true, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].sequence(), &[sq(5, 2), sq(3, 4), sq(5, 6)]);
    }

    #[test]
    fn test_king_cycle_does_not_repeat_captures() {
        // A king can loop around four enemies and return to its origin square.
        let board = Board::from_rows([
            "        ",
            "        ",
            "        ",
            "        ",
            "   b b  ",
            "  W     ",
            "   b b  ",
            "        ",
        ])
        .unwrap();

        let mut out = Vec::new();
        capture_chains(&board, sq(5, 2), true, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].sequence(),
            &[sq(5, 2), sq(3, 4), sq(5, 6), sq(7, 4), sq(5, 2)]
        );

        assert!(!out.is_empty());
        for mv in &out {
            let captured: Vec<_> = mv.captured().collect();
            let mut unique = captured.clone();
            unique.sort_by_key(|s| (s.row, s.col));
            unique.dedup();
            assert_eq!(captured.len(), unique.len(), "{} jumps a piece twice", mv);
        }
        assert!(out.iter().all(|m| m.captured().count() == 4));
    }
}
