use super::*;
use cozy_chess::Board;

fn board(fen: &str) -> Board {
    fen.parse().expect("valid FEN")
}

#[test]
fn startpos_is_balanced() {
    assert_eq!(evaluate(&Board::default()), 0);
}

#[test]
fn missing_black_queen_scores_plus_900() {
    let pos = board("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&pos), 900);
}

#[test]
fn material_branch_negates_under_color_swap() {
    // White up a knight, and the same position with colors mirrored.
    let white_up = board("4k3/8/8/8/8/8/8/2N1K3 w - - 0 1");
    let black_up = board("2n1k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(evaluate(&white_up), 320);
    assert_eq!(evaluate(&black_up), -evaluate(&white_up));
}

#[test]
fn white_checkmated_scores_minus_mate() {
    // Fool's mate: White to move, mated by Qh4.
    let pos = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(evaluate(&pos), -MATE_SCORE);
}

#[test]
fn black_checkmated_scores_plus_mate() {
    // Scholar's mate: Black to move, mated by Qxf7.
    let pos = board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert_eq!(evaluate(&pos), MATE_SCORE);
}

#[test]
fn stalemate_scores_zero() {
    // Black king in the corner with no move and no check.
    let pos = board("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn piece_values_match_material_scale() {
    use cozy_chess::Piece;

    assert_eq!(piece_value(Piece::Pawn), 100);
    assert_eq!(piece_value(Piece::Knight), 320);
    assert_eq!(piece_value(Piece::Bishop), 330);
    assert_eq!(piece_value(Piece::Rook), 500);
    assert_eq!(piece_value(Piece::Queen), 900);
    assert_eq!(piece_value(Piece::King), 20000);
}
