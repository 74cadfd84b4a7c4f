//! Minimax search with alpha-beta pruning

use cozy_chess::{Board, GameStatus, Move};

use crate::eval::evaluate;

/// Picks the engine's move, playing the minimizing (Black) side.
///
/// Scores every legal root move with a depth-limited [`search`] and
/// keeps the one with the minimum White-perspective score. Ties go to
/// the first move in the rules engine's enumeration order.
///
/// # Arguments
/// * `board` - The position to move in
/// * `depth` - Search depth in plies
/// * `nodes` - Counter for positions visited (for statistics)
///
/// # Returns
/// The chosen move and its score, or `None` when no legal move exists.
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|batch| {
        for mv in batch {
            moves.push(mv);
        }
        false
    });

    if moves.is_empty() {
        return None;
    }

    let mut best = moves[0];
    let mut best_score = i32::MAX;

    for mv in moves {
        let mut child = board.clone();
        child.play(mv);
        *nodes += 1;

        let score = search(
            &child,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            true,
            nodes,
        );

        if score < best_score {
            best_score = score;
            best = mv;
        }
    }

    #[cfg(feature = "logging")]
    log::debug!(
        "picked {} score {} after {} nodes at depth {}",
        best,
        best_score,
        nodes,
        depth
    );

    Some((best, best_score))
}

/// Scores the position by minimax to `depth` plies, from White's
/// perspective.
///
/// Bottoms out at [`evaluate`] when the depth is exhausted or the
/// rules engine reports the game over. Subtrees proven unable to
/// influence the final value are pruned once `beta <= alpha`; pruning
/// changes the number of positions visited, never the returned score.
/// Fresh searches start with `alpha = i32::MIN`, `beta = i32::MAX`.
pub fn search(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || board.status() != GameStatus::Ongoing {
        return evaluate(board);
    }

    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|batch| {
        for mv in batch {
            moves.push(mv);
        }
        false
    });

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let mut child = board.clone();
            child.play(mv);
            *nodes += 1;

            best = best.max(search(&child, depth - 1, alpha, beta, false, nodes));
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // remaining siblings cannot raise the bound
            }
        }
        best
    } else {
        let mut worst = i32::MAX;
        for mv in moves {
            let mut child = board.clone();
            child.play(mv);
            *nodes += 1;

            worst = worst.min(search(&child, depth - 1, alpha, beta, true, nodes));
            beta = beta.min(worst);
            if beta <= alpha {
                break;
            }
        }
        worst
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
