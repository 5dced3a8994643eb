//! 8-puzzle state representation.
//!
//! This module defines the sliding-tile problem used by the `puzzle_solver`
//! binary and by tests:
//! - `Puzzle`: a 3x3 board of tiles 1..=8 plus the blank, stored row-major.
//! - `Move`: the four blank slides, carried as transition labels through the
//!   search so the solution can be replayed as a move list.
//!
//! The board is an opaque, structurally hashable value; the search core in
//! [`crate::search`] treats it as any other state. Move generation, the
//! solvability parity test and scrambling all live here.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of cells on the board (3x3).
pub const TILE_COUNT: usize = 9;

/// Side length of the square board.
pub const SIDE: usize = 3;

/// Tile value used for the blank cell.
///
/// This is an encoding convention, not a semantic requirement; equality and
/// hashing are structural over the whole grid.
pub const BLANK: u8 = 0;

/// A direction the blank travels when a move is applied.
///
/// `Move::Right` means the blank swaps places with the tile to its right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four moves, in the fixed order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column delta of the blank for this move.
    fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// A 3x3 sliding-tile board, stored row-major with [`BLANK`] for the blank.
///
/// Equality and hashing are derived from the cell contents, so two boards
/// with identical tiles compare equal regardless of how they were produced.
/// This is what makes the search core's finalized-state set work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    cells: [u8; TILE_COUNT],
}

impl Puzzle {
    /// The conventional solved board: tiles 1..=8 in order, blank last.
    ///
    /// # Examples
    /// ```
    /// use informed_search::puzzle::Puzzle;
    /// let solved = Puzzle::solved();
    /// assert_eq!(solved.blank_index(), 8);
    /// ```
    pub fn solved() -> Self {
        Puzzle {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    /// Creates a board from a row-major cell array.
    ///
    /// # Arguments
    /// * `cells`: Nine values that must be a permutation of `0..=8`
    ///   (with [`BLANK`] appearing exactly once).
    ///
    /// # Returns
    /// * `Ok(Puzzle)` if `cells` is a valid permutation.
    /// * `Err(String)` naming the offending value otherwise.
    ///
    /// # Examples
    /// ```
    /// use informed_search::puzzle::Puzzle;
    /// assert!(Puzzle::from_cells([1, 2, 3, 4, 0, 5, 6, 7, 8]).is_ok());
    /// assert!(Puzzle::from_cells([1, 1, 3, 4, 0, 5, 6, 7, 8]).is_err());
    /// ```
    pub fn from_cells(cells: [u8; TILE_COUNT]) -> Result<Self, String> {
        let mut seen = [false; TILE_COUNT];
        for &v in &cells {
            if v as usize >= TILE_COUNT {
                return Err(format!(
                    "Invalid tile value {}. Expected 0 through {}",
                    v,
                    TILE_COUNT - 1
                ));
            }
            if seen[v as usize] {
                return Err(format!("Duplicate tile value {}", v));
            }
            seen[v as usize] = true;
        }
        Ok(Puzzle { cells })
    }

    /// Returns the row-major cell array.
    pub fn cells(&self) -> &[u8; TILE_COUNT] {
        &self.cells
    }

    /// Returns the flat index of the blank cell.
    pub fn blank_index(&self) -> usize {
        // A valid Puzzle always contains exactly one blank.
        self.cells
            .iter()
            .position(|&v| v == BLANK)
            .expect("puzzle has no blank cell")
    }

    /// Applies `mv` to this board, if the blank can travel that way.
    ///
    /// # Returns
    /// `Some(Puzzle)` with the blank swapped into its new cell, or `None`
    /// when the move would push the blank off the board.
    pub fn apply(&self, mv: Move) -> Option<Puzzle> {
        let idx = self.blank_index();
        let (r, c) = (idx / SIDE, idx % SIDE);
        let (dr, dc) = mv.delta();
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr < 0 || nr >= SIDE as isize || nc < 0 || nc >= SIDE as isize {
            return None;
        }
        let nidx = nr as usize * SIDE + nc as usize;
        let mut cells = self.cells;
        cells.swap(idx, nidx);
        Some(Puzzle { cells })
    }

    /// Generates every board reachable in one blank slide, labelled with the
    /// move that produces it.
    ///
    /// Moves are tried in [`Move::ALL`] order, so the successor order is
    /// fixed for a given board; together with the engine's stable
    /// tie-breaking this makes solver output deterministic.
    pub fn successors(&self) -> Vec<(Puzzle, Move)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|next| (next, mv)))
            .collect()
    }

    /// Tests whether this board can reach `goal` at all.
    ///
    /// Blank slides preserve the parity of the permutation's inversion
    /// count (ignoring the blank), so two boards are mutually reachable
    /// exactly when their parities agree. Checking this up front lets the
    /// solver report an impossible instance immediately instead of
    /// exhausting half of the 181440-state space.
    pub fn solvable_to(&self, goal: &Puzzle) -> bool {
        self.inversion_parity() == goal.inversion_parity()
    }

    fn inversion_parity(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&v| v != BLANK).collect();
        let mut inversions = 0usize;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Produces a solvable board by applying `steps` random legal moves to
    /// the solved board.
    ///
    /// The same `seed` always yields the same board, which keeps scripted
    /// runs and tests reproducible.
    pub fn scrambled(seed: u64, steps: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Puzzle::solved();
        let mut applied = 0;
        while applied < steps {
            let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            if let Some(next) = board.apply(mv) {
                board = next;
                applied += 1;
            }
        }
        board
    }
}

impl fmt::Display for Puzzle {
    /// Renders the board as three rows of digits with `_` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIDE {
            for c in 0..SIDE {
                let v = self.cells[r * SIDE + c];
                if c > 0 {
                    f.write_str(" ")?;
                }
                if v == BLANK {
                    f.write_str("_")?;
                } else {
                    write!(f, "{}", v)?;
                }
            }
            if r < SIDE - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
