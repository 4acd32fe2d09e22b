use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::pieces::{Color, Piece, PieceKind};

/// The 8x8 grid of square contents. Row 0 is black's back rank, row 7 white's.
///
/// The board is pure state: `set` performs no validation, legality is the
/// move filter's job. Out-of-range coordinates are a caller bug and fail fast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for col in 0..8 {
            board.squares[0][col] = Some(Piece::new(BACK_RANK[col], Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(BACK_RANK[col], Color::White));
        }
        board
    }

    /// # Panics
    ///
    /// Panics if `at` is outside the 8x8 range.
    #[inline]
    pub fn get(&self, at: Coord) -> Option<Piece> {
        assert!(at.in_bounds(), "board access out of range: {at:?}");
        self.squares[at.row as usize][at.col as usize]
    }

    /// The only mutator. No validation beyond the range check.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the 8x8 range.
    #[inline]
    pub fn set(&mut self, at: Coord, content: Option<Piece>) {
        assert!(at.in_bounds(), "board access out of range: {at:?}");
        self.squares[at.row as usize][at.col as usize] = content;
    }

    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    #[inline]
    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.get(at).map(|p| p.color)
    }

    /// Read-only snapshot of the full grid, for rendering.
    #[inline]
    pub fn squares(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }
}
