use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coord::Coord;
use crate::pieces::Piece;

/// A single ply: origin, destination, the piece moved and what it captured.
///
/// Equality is structural over the coordinates only, so a candidate built from
/// two user-selected squares matches the generated move regardless of how the
/// piece fields were filled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    /// Build a candidate move from two board coordinates, looking the piece
    /// fields up on `board`.
    pub fn new(board: &Board, from: Coord, to: Coord) -> Result<Move, MoveError> {
        let piece = board.get(from).ok_or(MoveError::EmptySquare { at: from })?;
        Ok(Move {
            from,
            to,
            piece,
            captured: board.get(to),
        })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Origin and destination in algebraic notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from.algebraic(), self.to.algebraic())
    }
}

impl PartialEq for Move {
    // Coordinates only; piece identity is deliberately ignored.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square of a candidate move.
    EmptySquare { at: Coord },
    /// The candidate is not in the current legal-move set. State is unchanged.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { at } => {
                write!(f, "no piece on {}", at.algebraic())
            }
            MoveError::IllegalMove { notation } => {
                write!(f, "illegal move: {notation}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
