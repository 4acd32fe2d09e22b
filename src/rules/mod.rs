//! Legality rules: the attack/pin analyzer and the move generators built on it.

pub mod attacks;
pub mod movegen;
