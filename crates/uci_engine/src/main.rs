use std::io::{self, BufRead, Write};

use anyhow::Result;
use cozy_chess::util::{display_uci_move, parse_uci_move};
use cozy_chess::Board;
use minimax_engine::{pick_best_move, search_depth, set_difficulty, Difficulty};

fn main() -> Result<()> {
    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::default();

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name MiniMax 0.1")?;
                writeln!(stdout, "id author minimax-chess")?;
                writeln!(
                    stdout,
                    "option name Difficulty type combo default {} var {} var {} var {}",
                    Difficulty::default(),
                    Difficulty::Easy,
                    Difficulty::Medium,
                    Difficulty::Hard
                )?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "isready" => {
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "setoption" => {
                // Example: setoption name Difficulty value Hard
                if let Some(idx_name) = parts.iter().position(|&x| x == "name") {
                    if parts.get(idx_name + 1) == Some(&"Difficulty") {
                        if let Some(idx_val) = parts.iter().position(|&x| x == "value") {
                            if let Some(level) =
                                parts.get(idx_val + 1).and_then(|v| Difficulty::from_name(v))
                            {
                                set_difficulty(level);
                            }
                        }
                    }
                }
            }
            "ucinewgame" => {
                board = Board::default();
            }
            "position" => {
                set_position(&mut board, &parts[1..]);
            }
            "go" => {
                // Fixed-depth search at the configured difficulty; no
                // time controls.
                let depth = search_depth();
                let mut nodes = 0u64;
                match pick_best_move(&board, depth, &mut nodes) {
                    Some((mv, score)) => {
                        writeln!(
                            stdout,
                            "info depth {} score cp {} nodes {}",
                            depth, score, nodes
                        )?;
                        writeln!(stdout, "bestmove {}", display_uci_move(&board, mv))?;
                    }
                    None => {
                        writeln!(stdout, "bestmove 0000")?; // no moves
                    }
                }
                stdout.flush()?;
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }

    Ok(())
}

/// Applies a `position [startpos | fen <fen>] [moves ...]` command.
/// Malformed input leaves the board at the last valid state reached.
fn set_position(board: &mut Board, args: &[&str]) {
    let moves_start = match args.first() {
        Some(&"startpos") => {
            *board = Board::default();
            1
        }
        Some(&"fen") => {
            let fen: Vec<&str> = args[1..]
                .iter()
                .take_while(|&&token| token != "moves")
                .copied()
                .collect();
            match fen.join(" ").parse::<Board>() {
                Ok(parsed) => *board = parsed,
                Err(_) => return,
            }
            1 + fen.len()
        }
        _ => return,
    };

    if args.get(moves_start) == Some(&"moves") {
        for token in &args[moves_start + 1..] {
            match parse_uci_move(board, token) {
                Ok(mv) => board.play(mv),
                Err(_) => break,
            }
        }
    }
}
