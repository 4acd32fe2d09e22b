use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coord;
use crate::moves::{Move, MoveError};
use crate::pieces::{Color, Piece, PieceKind};
use crate::rules::attacks::analyze;
use crate::rules::movegen::{legal_moves, legal_moves_with};

/// Derived from the current position on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has answers.
    Check,
    Checkmate,
    Stalemate,
}

/// One game: board, side to move, move history, and cached king squares.
///
/// Explicitly constructed, explicitly passed; any number of independent games
/// can coexist in one process. Callers embedding this in a concurrent host
/// must serialize access, board mutation is not atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    white_king: Coord,
    black_king: Coord,
}

impl GameState {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary position, e.g. a test fixture or a composed
    /// study. King squares are scanned once here and cached afterwards.
    ///
    /// # Panics
    ///
    /// Panics unless the board holds exactly one king per color.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let white_king = find_king(&board, Color::White);
        let black_king = find_king(&board, Color::Black);
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            white_king,
            black_king,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Coord {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// The legal-move set for the side to move. Recomputed on every call.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(
            &self.board,
            self.side_to_move,
            self.king_square(self.side_to_move),
        )
    }

    /// Check/mate/stalemate classification of the current position.
    pub fn status(&self) -> GameStatus {
        let king = self.king_square(self.side_to_move);
        let analysis = analyze(&self.board, self.side_to_move, king);
        let moves = legal_moves_with(&self.board, self.side_to_move, king, &analysis);
        match (moves.is_empty(), analysis.in_check) {
            (true, true) => GameStatus::Checkmate,
            (true, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Check,
            (false, false) => GameStatus::Ongoing,
        }
    }

    /// Match `candidate` against the legal-move set by coordinates and apply
    /// the generated move on success. On rejection the state is unchanged.
    pub fn try_move(&mut self, candidate: Move) -> Result<Move, MoveError> {
        // Apply the generated move, not the candidate: its piece fields are
        // authoritative.
        match self.legal_moves().into_iter().find(|m| *m == candidate) {
            Some(m) => {
                self.make_move(m);
                Ok(m)
            }
            None => Err(MoveError::IllegalMove {
                notation: candidate.notation(),
            }),
        }
    }

    /// Apply `mv` unconditionally. The caller is expected to have validated it
    /// against [`GameState::legal_moves`].
    pub fn make_move(&mut self, mv: Move) {
        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece));
        if mv.piece.kind == PieceKind::King {
            match mv.piece.color {
                Color::White => self.white_king = mv.to,
                Color::Black => self.black_king = mv.to,
            }
        }
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opponent();
        debug!("played {mv}");
    }

    /// Revert the last committed move. No-op when the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.set(mv.from, Some(mv.piece));
        self.board.set(mv.to, mv.captured);
        if mv.piece.kind == PieceKind::King {
            match mv.piece.color {
                Color::White => self.white_king = mv.from,
                Color::Black => self.black_king = mv.from,
            }
        }
        self.side_to_move = self.side_to_move.opponent();
        debug!("undid {mv}");
        Some(mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn find_king(board: &Board, color: Color) -> Coord {
    let mut found = None;
    for row in 0..8 {
        for col in 0..8 {
            let at = Coord::new(row, col);
            if board.get(at) == Some(Piece::new(PieceKind::King, color)) {
                assert!(found.is_none(), "more than one {color:?} king on the board");
                found = Some(at);
            }
        }
    }
    found.unwrap_or_else(|| panic!("no {color:?} king on the board"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(sq: &str) -> Coord {
        Coord::from_algebraic(sq).unwrap()
    }

    fn play(gs: &mut GameState, from: &str, to: &str) {
        let candidate = Move::new(gs.board(), coord(from), coord(to)).unwrap();
        gs.try_move(candidate).unwrap();
    }

    #[test]
    fn accepts_legal_and_rejects_illegal_candidates() {
        let mut gs = GameState::new();
        let before = gs.clone();

        let bad = Move::new(gs.board(), coord("e2"), coord("e5")).unwrap();
        assert!(matches!(
            gs.try_move(bad),
            Err(MoveError::IllegalMove { .. })
        ));
        assert_eq!(gs, before, "rejected move must leave the state unchanged");

        play(&mut gs, "e2", "e4");
        assert_eq!(gs.side_to_move(), Color::Black);
        assert_eq!(gs.board().get(coord("e4")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(gs.board().is_empty(coord("e2")));
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut gs = GameState::new();
        let before = gs.clone();
        assert_eq!(gs.undo_move(), None);
        assert_eq!(gs, before);
    }

    #[test]
    fn make_then_undo_round_trips_every_legal_move() {
        let mut gs = GameState::new();
        // A middling position with captures, pins and king moves available.
        play(&mut gs, "e2", "e4");
        play(&mut gs, "d7", "d5");
        play(&mut gs, "g1", "f3");
        play(&mut gs, "b8", "c6");

        let snapshot = gs.clone();
        for mv in snapshot.legal_moves() {
            gs.make_move(mv);
            gs.undo_move();
            assert_eq!(gs, snapshot, "round-trip failed for {mv}");
        }
    }

    #[test]
    fn no_legal_move_ever_leaves_the_mover_in_check() {
        let mut gs = GameState::new();
        play(&mut gs, "e2", "e4");
        play(&mut gs, "d7", "d5");
        play(&mut gs, "e4", "d5");
        play(&mut gs, "d8", "d5");

        let mover = gs.side_to_move();
        for mv in gs.legal_moves() {
            gs.make_move(mv);
            let analysis = analyze(gs.board(), mover, gs.king_square(mover));
            assert!(!analysis.in_check, "{mv} leaves the mover in check");
            gs.undo_move();
        }
    }

    #[test]
    fn king_cache_follows_king_moves() {
        let mut gs = GameState::new();
        play(&mut gs, "e2", "e4");
        play(&mut gs, "e7", "e5");
        play(&mut gs, "e1", "e2");
        assert_eq!(gs.king_square(Color::White), coord("e2"));
        play(&mut gs, "e8", "e7");
        assert_eq!(gs.king_square(Color::Black), coord("e7"));
        gs.undo_move();
        assert_eq!(gs.king_square(Color::Black), coord("e8"));
    }

    #[test]
    fn queen_capture_is_restored_on_undo() {
        let mut gs = GameState::new();
        play(&mut gs, "e2", "e4");
        play(&mut gs, "d7", "d5");
        let snapshot = gs.clone();
        play(&mut gs, "e4", "d5");
        gs.undo_move();
        assert_eq!(gs, snapshot);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut gs = GameState::new();
        play(&mut gs, "f2", "f3");
        play(&mut gs, "e7", "e5");
        play(&mut gs, "g2", "g4");
        play(&mut gs, "d8", "h4");

        assert_eq!(gs.status(), GameStatus::Checkmate);
        assert!(gs.legal_moves().is_empty());
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        let mut board = Board::empty();
        board.set(coord("a8"), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set(coord("b6"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(coord("c7"), Some(Piece::new(PieceKind::Queen, Color::White)));

        let gs = GameState::from_board(board, Color::Black);
        assert_eq!(gs.status(), GameStatus::Stalemate);
        assert!(gs.legal_moves().is_empty());
    }

    #[test]
    fn check_with_answers_is_reported_as_check() {
        let mut gs = GameState::new();
        play(&mut gs, "e2", "e4");
        play(&mut gs, "d7", "d6");
        play(&mut gs, "f1", "b5");
        assert_eq!(gs.status(), GameStatus::Check);
        assert!(!gs.legal_moves().is_empty());
    }

    #[test]
    fn independent_games_do_not_interfere() {
        let mut a = GameState::new();
        let b = GameState::new();
        play(&mut a, "e2", "e4");
        assert!(b.board().is_empty(coord("e4")));
        assert_eq!(b.side_to_move(), Color::White);
    }
}
