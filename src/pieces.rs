use serde::{Deserialize, Serialize};

use crate::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn push: White moves toward row 0, Black toward row 7.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row a pawn of this color starts on (and may double-push from).
    #[inline]
    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

/// King steps share the queen's unit directions.
pub const KING_STEPS: [Coord; 8] = QUEEN_DIRS;

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
];
