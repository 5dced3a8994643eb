//! Heuristic estimates for the problem definitions in this crate.
//!
//! All heuristics here are admissible (they never overestimate the true
//! remaining cost) and consistent (the estimate never drops by more than the
//! edge cost across a single move), which is what [`crate::search`] needs
//! for its optimality and no-re-expansion guarantees.

use crate::puzzle::{Puzzle, BLANK, SIDE, TILE_COUNT};

/// Sum of Manhattan distances from each tile to its cell in `goal`.
///
/// The blank is not counted. Every move slides exactly one tile one cell,
/// changing that tile's distance by at most one, so the estimate is both
/// admissible and consistent. This is the strongest of the puzzle
/// heuristics provided here.
///
/// # Arguments
/// * `state`: The board to evaluate.
/// * `goal`: The board being searched for.
///
/// # Returns
/// The total distance as `u64`; zero exactly when `state == goal`.
pub fn manhattan_distance(state: &Puzzle, goal: &Puzzle) -> u64 {
    // Goal position of each tile value, indexed by value.
    let mut goal_pos = [0usize; TILE_COUNT];
    for (idx, &v) in goal.cells().iter().enumerate() {
        goal_pos[v as usize] = idx;
    }

    let mut distance = 0u64;
    for (idx, &v) in state.cells().iter().enumerate() {
        if v == BLANK {
            continue;
        }
        let gidx = goal_pos[v as usize];
        let dr = (idx / SIDE).abs_diff(gidx / SIDE);
        let dc = (idx % SIDE).abs_diff(gidx % SIDE);
        distance += (dr + dc) as u64;
    }
    distance
}

/// Number of non-blank tiles not in their `goal` cell.
///
/// Weaker than [`manhattan_distance`] (it never exceeds it) but still
/// admissible and consistent; useful for comparing how much a better
/// heuristic reduces the number of expansions.
pub fn misplaced_tiles(state: &Puzzle, goal: &Puzzle) -> u64 {
    state
        .cells()
        .iter()
        .zip(goal.cells().iter())
        .filter(|(s, g)| **s != BLANK && s != g)
        .count() as u64
}

/// The zero heuristic.
///
/// Passing this to [`crate::search::best_first_search`] degrades it to
/// plain Dijkstra / uniform-cost search. Trivially admissible and
/// consistent for any state type.
pub fn zero<S>(_state: &S) -> u64 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;

    #[test]
    fn test_manhattan_zero_at_goal() {
        let goal = Puzzle::solved();
        assert_eq!(manhattan_distance(&goal, &goal), 0);
    }

    #[test]
    fn test_manhattan_one_move_board() {
        let goal = Puzzle::solved();
        let one_away = goal.apply(Move::Up).unwrap();
        // The single displaced tile is one cell from home.
        assert_eq!(manhattan_distance(&one_away, &goal), 1);
    }

    #[test]
    fn test_manhattan_counts_tile_not_blank() {
        // Tile 8 swapped one cell from home; the blank's own displacement
        // must not be added on top.
        let goal = Puzzle::solved();
        let state = Puzzle::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(manhattan_distance(&state, &goal), 1);
    }

    #[test]
    fn test_misplaced_never_exceeds_manhattan() {
        let goal = Puzzle::solved();
        let boards = [
            Puzzle::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap(),
            Puzzle::from_cells([0, 2, 3, 1, 4, 6, 7, 5, 8]).unwrap(),
            Puzzle::scrambled(7, 25),
        ];
        for board in &boards {
            assert!(misplaced_tiles(board, &goal) <= manhattan_distance(board, &goal));
        }
    }

    #[test]
    fn test_manhattan_consistent_across_moves() {
        // |h(s) - h(s')| <= 1 for every legal move from a sample of boards.
        let goal = Puzzle::solved();
        for seed in 0..10 {
            let board = Puzzle::scrambled(seed, 20);
            let h = manhattan_distance(&board, &goal);
            for (next, _mv) in board.successors() {
                let hn = manhattan_distance(&next, &goal);
                assert!(h.abs_diff(hn) <= 1);
            }
        }
    }

    #[test]
    fn test_zero_heuristic_is_zero() {
        assert_eq!(zero(&Puzzle::solved()), 0);
        assert_eq!(zero(&"anything"), 0);
    }
}
