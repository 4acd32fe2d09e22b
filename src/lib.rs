//! Legal-move generation and game-state tracking for standard chess.
//!
//! Pins and checks are classified by one directional sweep from the king
//! ([`rules::attacks`]) instead of trying every move and testing for check
//! afterwards; the per-piece generators ([`rules::movegen`]) then only emit
//! moves the pin geometry allows. [`game::GameState`] layers make/undo and a
//! move history on top. Castling, en passant and promotion are not modeled.

pub mod board;
pub mod coord;
pub mod game;
pub mod moves;
pub mod pieces;
pub mod rules;
