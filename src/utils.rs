//! Parsing of puzzle and graph definitions from text.
//!
//! These are the input formats the binaries accept. The search core never
//! sees raw text; everything here validates up front and returns
//! `Result<_, String>` with a message naming what was wrong and where.

use crate::graph::Graph;
use crate::puzzle::{Puzzle, SIDE, TILE_COUNT};

/// Parses a 3x3 puzzle board from row strings.
///
/// Each row holds three whitespace-separated values; tiles are the digits
/// `1` through `8` and the blank is written as `0` or `_`. The nine values
/// must form a permutation (each tile exactly once).
///
/// # Arguments
/// * `rows`: Exactly [`SIDE`] strings, one per board row, top to bottom.
///
/// # Returns
/// * `Ok(Puzzle)` on success.
/// * `Err(String)` if the row or value count is wrong, a token is not a
///   valid tile, or a tile repeats.
///
/// # Examples
/// ```
/// use informed_search::utils::puzzle_from_rows;
///
/// let board = puzzle_from_rows(&["1 2 3", "4 _ 5", "6 7 8"]).unwrap();
/// assert_eq!(board.blank_index(), 4);
///
/// assert!(puzzle_from_rows(&["1 2 3"]).is_err());
/// assert!(puzzle_from_rows(&["1 2 3", "4 x 5", "6 7 8"]).is_err());
/// ```
pub fn puzzle_from_rows(rows: &[&str]) -> Result<Puzzle, String> {
    if rows.len() != SIDE {
        return Err(format!(
            "Invalid number of rows. Expected {}, found {}",
            SIDE,
            rows.len()
        ));
    }

    let mut cells = [0u8; TILE_COUNT];
    let mut filled = 0usize;
    for (r, row) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != SIDE {
            return Err(format!(
                "Row {} has {} values (expected {})",
                r,
                tokens.len(),
                SIDE
            ));
        }
        for token in tokens {
            let value = if token == "_" {
                0
            } else {
                token.parse::<u8>().map_err(|_| {
                    format!("Unrecognized tile '{}' in row {}", token, r)
                })?
            };
            cells[filled] = value;
            filled += 1;
        }
    }

    // from_cells rejects out-of-range values and duplicates.
    Puzzle::from_cells(cells)
}

/// Parses a weighted graph from an edge-list description.
///
/// One edge per line, `FROM TO WEIGHT`, whitespace-separated. A line with a
/// single token declares an isolated node. Blank lines and lines starting
/// with `#` are ignored.
///
/// # Arguments
/// * `text`: The full edge-list text.
/// * `undirected`: When true, every edge is added in both directions.
///
/// # Returns
/// * `Ok(Graph)` on success.
/// * `Err(String)` naming the first malformed line.
///
/// # Examples
/// ```
/// use informed_search::utils::graph_from_edge_list;
///
/// let g = graph_from_edge_list("A B 5\nA C 2\nC B 1\n", false).unwrap();
/// assert_eq!(g.shortest_path("A", "B").unwrap().cost, 3);
///
/// assert!(graph_from_edge_list("A B notaweight", false).is_err());
/// ```
pub fn graph_from_edge_list(text: &str, undirected: bool) -> Result<Graph, String> {
    let mut graph = Graph::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [node] => graph.add_node(node),
            [from, to, weight] => {
                let weight: u64 = weight.parse().map_err(|_| {
                    format!("Line {}: invalid weight '{}'", line_no + 1, weight)
                })?;
                if undirected {
                    graph.add_undirected_edge(from, to, weight);
                } else {
                    graph.add_edge(from, to, weight);
                }
            }
            _ => {
                return Err(format!(
                    "Line {}: expected 'FROM TO WEIGHT' or a lone node name, found '{}'",
                    line_no + 1,
                    line
                ));
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_from_rows_valid() {
        let board = puzzle_from_rows(&["1 2 3", "4 0 5", "6 7 8"]).unwrap();
        assert_eq!(board.cells(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_puzzle_from_rows_underscore_blank() {
        let with_zero = puzzle_from_rows(&["1 2 3", "4 0 5", "6 7 8"]).unwrap();
        let with_underscore = puzzle_from_rows(&["1 2 3", "4 _ 5", "6 7 8"]).unwrap();
        assert_eq!(with_zero, with_underscore);
    }

    #[test]
    fn test_puzzle_from_rows_wrong_row_count() {
        let result = puzzle_from_rows(&["1 2 3", "4 0 5"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }

    #[test]
    fn test_puzzle_from_rows_wrong_value_count() {
        let result = puzzle_from_rows(&["1 2 3 4", "0 5", "6 7 8"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 has 4 values"));
    }

    #[test]
    fn test_puzzle_from_rows_bad_token() {
        let result = puzzle_from_rows(&["1 2 3", "4 x 5", "6 7 8"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized tile 'x'"));
    }

    #[test]
    fn test_puzzle_from_rows_duplicate_tile() {
        let result = puzzle_from_rows(&["1 2 3", "4 0 5", "6 7 7"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile value 7"));
    }

    #[test]
    fn test_graph_from_edge_list_valid() {
        let g = graph_from_edge_list("# comment\nA B 5\n\nA C 2\nC B 1\n", false).unwrap();
        assert_eq!(g.nodes(), vec!["A", "B", "C"]);
        assert_eq!(g.shortest_path("A", "B").unwrap().cost, 3);
    }

    #[test]
    fn test_graph_from_edge_list_isolated_node() {
        let g = graph_from_edge_list("A B 1\nIsland\n", false).unwrap();
        assert!(g.contains("Island"));
        assert!(g.shortest_path("A", "Island").is_none());
    }

    #[test]
    fn test_graph_from_edge_list_undirected() {
        let g = graph_from_edge_list("A B 7\n", true).unwrap();
        assert_eq!(g.shortest_path("B", "A").unwrap().cost, 7);
    }

    #[test]
    fn test_graph_from_edge_list_bad_weight() {
        let result = graph_from_edge_list("A B x\n", false);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Line 1: invalid weight 'x'"));
    }

    #[test]
    fn test_graph_from_edge_list_wrong_token_count() {
        let result = graph_from_edge_list("A B\n", false);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Line 1"));
    }
}
