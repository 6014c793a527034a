//! Exhaustive minimax search over the 3x3 board
//!
//! `X` always maximizes and `O` always minimizes, regardless of which side a
//! human controls. Terminal scores are +1 (X wins), -1 (O wins) and 0 (draw).
//! The tree is small enough (depth 9, branching at most 9) that no pruning or
//! memoization is needed.

use super::board::{BOARD_CELLS, Board, Cell, Player};

/// Terminal score of a board, or `None` while the game continues
pub fn evaluate(board: &Board) -> Option<i32> {
    if board.has_won(Player::X) {
        Some(1)
    } else if board.has_won(Player::O) {
        Some(-1)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

/// Game-theoretic value of `board` with `to_move` playing next.
///
/// Every empty cell is tried in place and cleared again before returning, so
/// the board is left exactly as it was passed in.
pub fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if let Some(score) = evaluate(board) {
        return score;
    }

    let mut best = match to_move {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };

    for pos in 0..BOARD_CELLS {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, to_move.to_cell());
        let value = minimax(board, to_move.opponent());
        board.set(pos, Cell::Empty);

        best = match to_move {
            Player::X => best.max(value),
            Player::O => best.min(value),
        };
    }

    best
}

/// Best cell for `X`: the empty cell whose value after `O` replies optimally
/// is highest, lowest index first on ties. `None` on a terminal board.
pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, Player::X)
}

/// Best cell for `player`, maximizing for `X` and minimizing for `O`.
///
/// Ties go to the first cell in increasing index order. Returns `None` when
/// the board is already terminal.
pub fn best_move_for(board: &Board, player: Player) -> Option<usize> {
    if evaluate(board).is_some() {
        return None;
    }

    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for pos in 0..BOARD_CELLS {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, player.to_cell());
        let value = minimax(&mut scratch, player.opponent());
        scratch.set(pos, Cell::Empty);

        let improves = match (best, player) {
            (None, _) => true,
            (Some((_, current)), Player::X) => value > current,
            (Some((_, current)), Player::O) => value < current,
        };
        if improves {
            best = Some((pos, value));
        }
    }

    best.map(|(pos, _)| pos)
}
