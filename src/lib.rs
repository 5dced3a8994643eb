//! # Informed Search Library
//!
//! This library provides a generic best-first graph-search engine and a
//! small set of classic problems expressed against it.
//!
//! The engine takes a start state, a goal predicate, a successor generator
//! and a heuristic estimate, and returns a minimum-cost path (as a state
//! sequence plus a parallel transition list) or reports that no goal is
//! reachable. With an admissible, consistent heuristic this is A*; with the
//! zero heuristic it is Dijkstra / uniform-cost search; with unit costs on
//! top of that it behaves like breadth-first search.
//!
//! It is used by three binaries:
//! - `puzzle_solver`: Solves 8-puzzle instances with A*.
//! - `route_finder`: Answers shortest-path and distance-table queries on
//!   weighted graphs.
//! - `jug_solver`: Finds minimum pour sequences for the two-jug
//!   water-measuring problem.
//!
//! ## Modules
//! - `search`: The generic engine (`best_first_search`, `SearchBudget`,
//!   `Solution`) and its uniform-cost wrapper.
//! - `puzzle`: 8-puzzle board representation (`Puzzle`), move generation,
//!   solvability parity test and seeded scrambling.
//! - `graph`: Weighted directed graphs with named nodes, single-pair
//!   shortest paths and the all-nodes distance map.
//! - `jugs`: The two-jug problem as a unit-cost search.
//! - `heuristics`: Admissible 8-puzzle heuristics and the zero heuristic.
//! - `utils`: Parsing of puzzle and graph definitions from text.

pub mod graph;
pub mod heuristics;
pub mod jugs;
pub mod puzzle;
pub mod search;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `informed_search::search::best_first_search()`. This keeps
// the top-level library namespace cleaner.
