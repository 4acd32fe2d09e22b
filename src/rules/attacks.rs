use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::coord::Coord;
use crate::pieces::{Color, Piece, PieceKind, KNIGHT_DELTAS, QUEEN_DIRS};

/// An enemy piece currently giving check.
///
/// `direction` is the unit step from the king toward the attacker; `None`
/// marks a knight check, which has no blockable ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub attacker: Coord,
    pub direction: Option<Coord>,
}

/// Pinned square -> unit direction from the king toward the pinned piece.
///
/// Read-only view recomputed per legality query; generators never consume
/// entries, they only look their own square up.
pub type PinMap = FxHashMap<Coord, Coord>;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub in_check: bool,
    pub checks: Vec<CheckRecord>,
    pub pins: PinMap,
}

/// Classify all checks against `side`'s king and all pins of `side`'s pieces
/// in a single sweep of the 8 ray directions plus the 8 knight offsets.
///
/// Per ray, the first friendly non-king piece is remembered as a possible pin;
/// the first enemy piece then either confirms the pin or registers a direct
/// check, depending on its kind and the ray geometry. O(64) worst case.
pub fn analyze(board: &Board, side: Color, king: Coord) -> Analysis {
    let mut checks = Vec::new();
    let mut pins = PinMap::default();

    for &dir in &QUEEN_DIRS {
        let mut possible_pin: Option<Coord> = None;
        for step in 1..8 {
            let sq = king + dir * step;
            if !sq.in_bounds() {
                break;
            }
            match board.get(sq) {
                None => {}
                Some(p) if p.color == side => {
                    if p.kind == PieceKind::King {
                        // Own king blocks the ray and cannot be pinned.
                        break;
                    }
                    if possible_pin.is_none() {
                        possible_pin = Some(sq);
                    } else {
                        // Two friendly pieces shield the king on this ray.
                        break;
                    }
                }
                Some(p) => {
                    if gives_check_along(p, dir, step) {
                        match possible_pin {
                            None => checks.push(CheckRecord {
                                attacker: sq,
                                direction: Some(dir),
                            }),
                            Some(pinned) => {
                                pins.insert(pinned, dir);
                            }
                        }
                    }
                    break;
                }
            }
        }
    }

    for &delta in &KNIGHT_DELTAS {
        let sq = king + delta;
        if !sq.in_bounds() {
            continue;
        }
        if board.get(sq) == Some(Piece::new(PieceKind::Knight, side.opponent())) {
            checks.push(CheckRecord {
                attacker: sq,
                direction: None,
            });
        }
    }

    Analysis {
        in_check: !checks.is_empty(),
        checks,
        pins,
    }
}

/// Does an enemy piece standing `dist` steps from the king along `dir`
/// attack the king down that ray?
#[inline]
fn gives_check_along(piece: Piece, dir: Coord, dist: i8) -> bool {
    let orthogonal = dir.row == 0 || dir.col == 0;
    match piece.kind {
        PieceKind::Queen => true,
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::King => dist == 1,
        // A pawn attacks one square diagonally against its own direction of
        // travel: `dir` points king -> pawn, so the pawn's forward step must
        // point back toward the king.
        PieceKind::Pawn => dist == 1 && dir.col != 0 && dir.row == -piece.color.forward(),
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(board: &mut Board, sq: &str, kind: PieceKind, color: Color) -> Coord {
        let at = Coord::from_algebraic(sq).unwrap();
        board.set(at, Some(Piece::new(kind, color)));
        at
    }

    #[test]
    fn rook_check_down_an_open_file() {
        let mut board = Board::empty();
        let king = put(&mut board, "e1", PieceKind::King, Color::White);
        let rook = put(&mut board, "e8", PieceKind::Rook, Color::Black);

        let analysis = analyze(&board, Color::White, king);
        assert!(analysis.in_check);
        assert_eq!(
            analysis.checks,
            vec![CheckRecord {
                attacker: rook,
                direction: Some(Coord::new(-1, 0)),
            }]
        );
        assert!(analysis.pins.is_empty());
    }

    #[test]
    fn shielding_piece_becomes_a_pin_not_a_check() {
        let mut board = Board::empty();
        let king = put(&mut board, "e1", PieceKind::King, Color::White);
        let shield = put(&mut board, "e4", PieceKind::Knight, Color::White);
        put(&mut board, "e8", PieceKind::Queen, Color::Black);

        let analysis = analyze(&board, Color::White, king);
        assert!(!analysis.in_check);
        assert_eq!(analysis.pins.get(&shield), Some(&Coord::new(-1, 0)));
    }

    #[test]
    fn two_shields_are_no_pin() {
        let mut board = Board::empty();
        let king = put(&mut board, "e1", PieceKind::King, Color::White);
        put(&mut board, "e3", PieceKind::Knight, Color::White);
        put(&mut board, "e5", PieceKind::Bishop, Color::White);
        put(&mut board, "e8", PieceKind::Queen, Color::Black);

        let analysis = analyze(&board, Color::White, king);
        assert!(!analysis.in_check);
        assert!(analysis.pins.is_empty());
    }

    #[test]
    fn knight_check_has_no_direction() {
        let mut board = Board::empty();
        let king = put(&mut board, "e1", PieceKind::King, Color::White);
        let knight = put(&mut board, "d3", PieceKind::Knight, Color::Black);

        let analysis = analyze(&board, Color::White, king);
        assert_eq!(
            analysis.checks,
            vec![CheckRecord {
                attacker: knight,
                direction: None,
            }]
        );
    }

    #[test]
    fn pawn_checks_only_at_capture_distance() {
        let mut board = Board::empty();
        let king = put(&mut board, "e4", PieceKind::King, Color::White);
        // Black pawn attacking diagonally toward higher rows.
        put(&mut board, "d5", PieceKind::Pawn, Color::Black);
        let analysis = analyze(&board, Color::White, king);
        assert!(analysis.in_check);

        // A pawn straight ahead of the king gives no check.
        let mut board = Board::empty();
        let king = put(&mut board, "e4", PieceKind::King, Color::White);
        put(&mut board, "e5", PieceKind::Pawn, Color::Black);
        let analysis = analyze(&board, Color::White, king);
        assert!(!analysis.in_check);

        // Nor does a pawn "behind" its own capture direction.
        let mut board = Board::empty();
        let king = put(&mut board, "e4", PieceKind::King, Color::White);
        put(&mut board, "d3", PieceKind::Pawn, Color::Black);
        let analysis = analyze(&board, Color::White, king);
        assert!(!analysis.in_check);
    }

    #[test]
    fn rook_does_not_check_diagonally() {
        let mut board = Board::empty();
        let king = put(&mut board, "e1", PieceKind::King, Color::White);
        put(&mut board, "h4", PieceKind::Rook, Color::Black);
        let analysis = analyze(&board, Color::White, king);
        assert!(!analysis.in_check);
    }
}
