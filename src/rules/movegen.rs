use crate::board::Board;
use crate::coord::Coord;
use crate::moves::Move;
use crate::pieces::{Color, Piece, PieceKind, KING_STEPS, KNIGHT_DELTAS};

use super::attacks::{analyze, Analysis, CheckRecord, PinMap};

/// All legal moves for `side`, whose king stands on `king`.
///
/// Runs the analyzer once, then applies the check-evasion rules:
/// - not in check: every pseudo-legal move (pins already constrain the
///   individual generators),
/// - single check: king escapes, captures of the checker, and blocks on the
///   checking ray,
/// - double check: king moves only.
pub fn legal_moves(board: &Board, side: Color, king: Coord) -> Vec<Move> {
    let analysis = analyze(board, side, king);
    legal_moves_with(board, side, king, &analysis)
}

/// Like [`legal_moves`], reusing an [`Analysis`] the caller already ran.
pub fn legal_moves_with(board: &Board, side: Color, king: Coord, analysis: &Analysis) -> Vec<Move> {
    let mut moves = Vec::new();

    match analysis.checks.len() {
        0 => pseudo_moves(board, side, &analysis.pins, &mut moves),
        1 => {
            pseudo_moves(board, side, &analysis.pins, &mut moves);
            let resolving = resolving_squares(king, &analysis.checks[0]);
            moves.retain(|m| m.piece.kind == PieceKind::King || resolving.contains(&m.to));
        }
        _ => {
            // No single non-king move can answer two attackers at once.
            king_moves(board, king, side, &mut moves);
        }
    }

    moves
}

/// Squares a non-king move may land on to resolve a single check: the
/// checker's own square, plus every square strictly between king and checker
/// when the checker slides. Knight, pawn and contact checks leave only the
/// capture.
fn resolving_squares(king: Coord, check: &CheckRecord) -> Vec<Coord> {
    let Some(dir) = check.direction else {
        return vec![check.attacker];
    };
    let mut squares = Vec::new();
    for step in 1..8 {
        let sq = king + dir * step;
        squares.push(sq);
        if sq == check.attacker {
            break;
        }
    }
    squares
}

/// Pseudo-legal moves for every piece of `side`, row-major scan order.
fn pseudo_moves(board: &Board, side: Color, pins: &PinMap, out: &mut Vec<Move>) {
    for row in 0..8 {
        for col in 0..8 {
            let from = Coord::new(row, col);
            match board.get(from) {
                Some(piece) if piece.color == side => {
                    pseudo_moves_for(board, from, piece, pins, out)
                }
                _ => {}
            }
        }
    }
}

/// Geometric moves for the piece on `from`, ignoring check but honoring pins.
pub fn pseudo_moves_for(
    board: &Board,
    from: Coord,
    piece: Piece,
    pins: &PinMap,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, pins, out),
        PieceKind::Knight => knight_moves(board, from, piece, pins, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_moves(board, from, piece, pins, out)
        }
        PieceKind::King => king_moves(board, from, piece.color, out),
    }
}

/// A pinned piece may only move along the pin line, in either direction.
#[inline]
fn pin_allows(pins: &PinMap, from: Coord, dir: Coord) -> bool {
    match pins.get(&from) {
        None => true,
        Some(&pin_dir) => dir == pin_dir || dir == -pin_dir,
    }
}

#[inline]
fn mv(board: &Board, from: Coord, to: Coord, piece: Piece) -> Move {
    Move {
        from,
        to,
        piece,
        captured: board.get(to),
    }
}

fn pawn_moves(board: &Board, from: Coord, piece: Piece, pins: &PinMap, out: &mut Vec<Move>) {
    let color = piece.color;
    let forward = Coord::new(color.forward(), 0);

    let one = from + forward;
    if one.in_bounds() && board.is_empty(one) && pin_allows(pins, from, forward) {
        out.push(mv(board, from, one, piece));
        let two = one + forward;
        if from.row == color.pawn_start_row() && board.is_empty(two) {
            out.push(mv(board, from, two, piece));
        }
    }

    for dc in [-1, 1] {
        let dir = Coord::new(color.forward(), dc);
        let to = from + dir;
        if to.in_bounds()
            && board.color_at(to) == Some(color.opponent())
            && pin_allows(pins, from, dir)
        {
            out.push(mv(board, from, to, piece));
        }
    }
}

fn knight_moves(board: &Board, from: Coord, piece: Piece, pins: &PinMap, out: &mut Vec<Move>) {
    // A knight move is never collinear with a pin ray, so a pinned knight
    // cannot move at all.
    if pins.contains_key(&from) {
        return;
    }
    for &delta in &KNIGHT_DELTAS {
        let to = from + delta;
        if to.in_bounds() && board.color_at(to) != Some(piece.color) {
            out.push(mv(board, from, to, piece));
        }
    }
}

fn slider_moves(board: &Board, from: Coord, piece: Piece, pins: &PinMap, out: &mut Vec<Move>) {
    for &dir in piece.kind.slide_dirs() {
        if !pin_allows(pins, from, dir) {
            continue;
        }
        for step in 1..8 {
            let to = from + dir * step;
            if !to.in_bounds() {
                break;
            }
            match board.color_at(to) {
                None => out.push(mv(board, from, to, piece)),
                Some(c) if c != piece.color => {
                    out.push(mv(board, from, to, piece));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// King steps, each probed for safety by relocating the king on a scratch
/// board and re-running the analyzer. Both squares are restored before the
/// verdict is used, on every path.
fn king_moves(board: &Board, from: Coord, side: Color, out: &mut Vec<Move>) {
    let king = Piece::new(PieceKind::King, side);
    let mut probe = board.clone();

    for &step in &KING_STEPS {
        let to = from + step;
        if !to.in_bounds() {
            continue;
        }
        if probe.color_at(to) == Some(side) {
            continue;
        }
        let captured = probe.get(to);

        probe.set(from, None);
        probe.set(to, Some(king));
        let safe = !analyze(&probe, side, to).in_check;
        probe.set(to, captured);
        probe.set(from, Some(king));

        if safe {
            out.push(Move {
                from,
                to,
                piece: king,
                captured,
            });
        }
    }
}
