//! Built-in demonstration data.

use gridlace_core::Board;
use gridlace_graph::Graph;

/// The classic sample puzzle (30 givens, unique solution).
pub fn classic_puzzle() -> Board {
    Board::from_values([
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ])
}

/// A twelve-vertex undirected sample graph, each edge listed from both
/// endpoints.
pub fn graph() -> Graph {
    [
        ("1", vec!["3", "5", "6", "9"]),
        ("2", vec!["4", "6", "8"]),
        ("3", vec!["1", "5", "6", "7", "8"]),
        ("4", vec!["2", "10"]),
        ("5", vec!["1", "3", "7"]),
        ("6", vec!["1", "2", "3"]),
        ("7", vec!["3", "5"]),
        ("8", vec!["2", "3"]),
        ("9", vec!["1", "11", "12"]),
        ("10", vec!["4"]),
        ("11", vec!["9", "12"]),
        ("12", vec!["9", "11"]),
    ]
    .into_iter()
    .collect()
}
