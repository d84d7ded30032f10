//! Checkers game state.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{GameResult, GameState};

use super::board::{Board, Cell, Side, Square};
use super::moves::{can_capture, capture_chains, simple_steps, CheckersMove};

/// A checkers position.
///
/// `must_continue` is set when the side to move is in the middle of a
/// capture chain: only further captures by the piece on that square are
/// legal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersState {
    board: Board,
    current: Player,
    other: Player,
    white_to_move: bool,
    must_continue: Option<Square>,
}

impl CheckersState {
    /// Label of the white player in a default game.
    pub const WHITE_LABEL: char = 'W';
    /// Label of the black player in a default game.
    pub const BLACK_LABEL: char = 'B';

    /// Standard opening position; white moves first.
    pub fn new(white: Player, black: Player) -> Self {
        Self::from_board(Board::initial(), white, black, true)
    }

    /// Standard opening position with players `'W'` and `'B'`.
    pub fn standard() -> Self {
        Self::new(Player::new(Self::WHITE_LABEL), Player::new(Self::BLACK_LABEL))
    }

    /// Custom position.
    pub fn from_board(board: Board, white: Player, black: Player, white_to_move: bool) -> Self {
        let (current, other) = if white_to_move { (white, black) } else { (black, white) };
        Self {
            board,
            current,
            other,
            white_to_move,
            must_continue: None,
        }
    }

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Square of the piece that must keep capturing, if mid-chain.
    #[must_use]
    pub fn must_continue(&self) -> Option<Square> {
        self.must_continue
    }

    /// Colour of the side to move.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        if self.white_to_move {
            Side::White
        } else {
            Side::Black
        }
    }

    #[must_use]
    pub fn white_player(&self) -> Player {
        if self.white_to_move {
            self.current
        } else {
            self.other
        }
    }

    #[must_use]
    pub fn black_player(&self) -> Player {
        if self.white_to_move {
            self.other
        } else {
            self.current
        }
    }

    /// Colour controlled by `player`, if they play in this game.
    #[must_use]
    pub fn side_of(&self, player: Player) -> Option<Side> {
        if player == self.white_player() {
            Some(Side::White)
        } else if player == self.black_player() {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// All capture chains available to the side to move.
    fn captures(&self) -> Vec<CheckersMove> {
        let mut jumps = Vec::new();
        for (sq, _) in self.board.pieces(self.side_to_move()) {
            capture_chains(&self.board, sq, true, &mut jumps);
        }
        jumps
    }
}

impl GameState for CheckersState {
    type Move = CheckersMove;

    fn legal_moves(&self) -> Vec<CheckersMove> {
        if let Some(sq) = self.must_continue {
            let mut jumps = Vec::new();
            capture_chains(&self.board, sq, false, &mut jumps);
            return jumps;
        }

        // Capturing is mandatory.
        let jumps = self.captures();
        if !jumps.is_empty() {
            return jumps;
        }

        let mut steps = Vec::new();
        for (sq, _) in self.board.pieces(self.side_to_move()) {
            simple_steps(&self.board, sq, &mut steps);
        }
        steps
    }

    fn apply_move(&self, mv: &CheckersMove) -> Self {
        let mut board = self.board;
        let side = self.side_to_move();

        let mut piece = board.get(mv.from());
        board.set(mv.from(), Cell::Empty);
        for sq in mv.captured() {
            board.set(sq, Cell::Empty);
        }
        if mv.to().row == side.promotion_row() {
            piece = piece.crowned();
        }
        board.set(mv.to(), piece);

        if mv.is_capture() && can_capture(&board, mv.to(), false) {
            return Self {
                board,
                current: self.current,
                other: self.other,
                white_to_move: self.white_to_move,
                must_continue: Some(mv.to()),
            };
        }

        Self {
            board,
            current: self.other,
            other: self.current,
            white_to_move: !self.white_to_move,
            must_continue: None,
        }
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn other_player(&self) -> Player {
        self.other
    }

    fn result(&self) -> Option<GameResult> {
        let mover = self.side_to_move();
        let mover_has = self.board.has_pieces(mover);
        let opponent_has = self.board.has_pieces(mover.opponent());

        match (mover_has, opponent_has) {
            // Unreachable through play: the last capture ends the game first.
            (false, false) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(self.current)),
            (false, true) => Some(GameResult::Winner(self.other)),
            (true, true) if self.legal_moves().is_empty() => Some(GameResult::Winner(self.other)),
            (true, true) => None,
        }
    }
}

impl std::fmt::Display for CheckersState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.current)?;
        if let Some(sq) = self.must_continue {
            write!(f, " (must continue from {})", sq)?;
        }
        Ok(())
    }
}
