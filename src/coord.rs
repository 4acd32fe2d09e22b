use std::fmt;
use std::ops::{Add, Mul, Neg};

use serde::{Deserialize, Serialize};

/// A board coordinate: `row` 0 is black's back rank, `row` 7 is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff both components lie in `0..8`.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Algebraic square name, e.g. `e2`. Files 'a'..'h' map to columns 0..7,
    /// ranks '1'..'8' map to rows 7..0.
    pub fn algebraic(self) -> String {
        debug_assert!(self.in_bounds());
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        format!("{file}{rank}")
    }

    /// Parse an algebraic square name. Returns `None` for anything that is not
    /// exactly a file letter followed by a rank digit.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Coord::new((b'8' - rank) as i8, (file - b'a') as i8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.algebraic())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord::new(self.row * rhs, self.col * rhs)
    }
}
