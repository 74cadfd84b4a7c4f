//! Material-based position evaluation

use cozy_chess::{Board, Color, Piece};

/// Absolute score assigned to a checkmated position.
pub const MATE_SCORE: i32 = 99_999;

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = equal position
///
/// Checkmate scores against the side to move: `-MATE_SCORE` when White
/// has been mated, `+MATE_SCORE` when Black has been mated. Stalemate
/// is 0. Every other position is a weighted material count.
pub fn evaluate(board: &Board) -> i32 {
    let mut any_moves = false;
    board.generate_moves(|_| {
        any_moves = true;
        true
    });

    if !any_moves {
        if board.checkers().is_empty() {
            return 0; // stalemate
        }
        return match board.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }

    let mut score = 0i32;
    for piece in Piece::ALL {
        let white = board.colored_pieces(Color::White, piece).len() as i32;
        let black = board.colored_pieces(Color::Black, piece).len() as i32;
        score += (white - black) * piece_value(piece);
    }
    score
}

/// Returns the material value of a piece in centipawns.
///
/// The king's value only weighs material in edge cases; mate itself is
/// scored by the checkmate branch of [`evaluate`].
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20000,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
