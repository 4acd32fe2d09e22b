//! Minimal text shell around the move-generation core: prints the board,
//! reads `e2e4`-style moves from stdin, and reports check/mate/stalemate.

use std::io::{self, BufRead, Write};

use standard_chess::board::Board;
use standard_chess::coord::Coord;
use standard_chess::game::{GameState, GameStatus};
use standard_chess::moves::Move;
use standard_chess::pieces::{Color, Piece, PieceKind};

fn main() {
    env_logger::init();

    let mut gs = GameState::new();
    let stdin = io::stdin();

    loop {
        print_board(gs.board());
        match gs.status() {
            GameStatus::Checkmate => {
                println!("Checkmate. {:?} wins.", gs.side_to_move().opponent());
                return;
            }
            GameStatus::Stalemate => {
                println!("Stalemate.");
                return;
            }
            GameStatus::Check => println!("{:?} to move (in check).", gs.side_to_move()),
            GameStatus::Ongoing => println!("{:?} to move.", gs.side_to_move()),
        }

        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        match line.trim() {
            "quit" => return,
            "undo" => {
                if gs.undo_move().is_none() {
                    println!("Nothing to undo.");
                }
            }
            input => match parse_squares(input) {
                Some((from, to)) => {
                    let candidate = match Move::new(gs.board(), from, to) {
                        Ok(mv) => mv,
                        Err(e) => {
                            eprintln!("{e}");
                            continue;
                        }
                    };
                    match gs.try_move(candidate) {
                        Ok(mv) if mv.is_capture() => println!("Capture on {}.", mv.to),
                        Ok(_) => {}
                        Err(e) => eprintln!("{e}"),
                    }
                }
                None => eprintln!("Expected a move like e2e4, or undo / quit."),
            },
        }
    }
}

/// `e2e4` -> origin and destination squares.
fn parse_squares(input: &str) -> Option<(Coord, Coord)> {
    if input.len() != 4 || !input.is_ascii() {
        return None;
    }
    let from = Coord::from_algebraic(&input[..2])?;
    let to = Coord::from_algebraic(&input[2..])?;
    Some((from, to))
}

fn print_board(board: &Board) {
    for row in 0..8 {
        print!("{} ", 8 - row);
        for col in 0..8 {
            match board.squares()[row][col] {
                Some(p) => print!(" {}", glyph(p)),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("   a b c d e f g h");
}

fn glyph(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
