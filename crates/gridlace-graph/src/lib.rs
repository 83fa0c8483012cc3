//! Depth-first reachability over string-keyed adjacency lists.
//!
//! [`Graph`] stores vertices in insertion order and each vertex's neighbors
//! exactly in the order they were listed. Both orders are observable:
//! traversal visits neighbors first-listed-first, and [`Display`] prints
//! vertices as inserted. There is no pruning or backtracking here, just a
//! visited set and recursion.
//!
//! # Examples
//!
//! ```
//! use gridlace_graph::Graph;
//!
//! let graph: Graph = [
//!     ("a", vec!["b", "c"]),
//!     ("b", vec!["a"]),
//!     ("c", vec!["a", "b"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(graph.depth_first_order("a"), ["a", "b", "c"]);
//! ```

use std::collections::HashSet;
use std::fmt::{self, Display};

use indexmap::IndexMap;

/// An adjacency-list graph with string vertex keys.
///
/// Neighbor lists keep their given order; vertex iteration follows insertion
/// order. Edges are directed as listed, so callers wanting an undirected
/// graph list each edge from both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: IndexMap<String, Vec<String>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from an adjacency mapping.
    #[must_use]
    pub fn from_adjacency(adjacency: IndexMap<String, Vec<String>>) -> Self {
        Self { adjacency }
    }

    /// Sets the neighbor list of `vertex`, replacing any previous list.
    pub fn insert(&mut self, vertex: impl Into<String>, neighbors: Vec<String>) {
        self.adjacency.insert(vertex.into(), neighbors);
    }

    /// Returns the neighbor list of `vertex`, if the vertex is known.
    #[must_use]
    pub fn neighbors(&self, vertex: &str) -> Option<&[String]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns the vertex keys in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns the depth-first visit order starting from `start`.
    ///
    /// Each vertex appears once, in discovery order; a vertex's neighbors
    /// are explored exactly in their listed order. A `start` key absent from
    /// the adjacency mapping is still visited, yielding just `[start]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_graph::Graph;
    ///
    /// let graph: Graph = [("1", vec!["2", "3"]), ("2", vec!["1"]), ("3", vec!["1"])]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(graph.depth_first_order("1"), ["1", "2", "3"]);
    /// assert_eq!(graph.depth_first_order("9"), ["9"]);
    /// ```
    #[must_use]
    pub fn depth_first_order(&self, start: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit(start, &mut visited, &mut order);
        order
    }

    /// Returns the vertices of a depth-first spanning tree rooted at `start`.
    ///
    /// Same vertex set as [`depth_first_order`](Self::depth_first_order),
    /// in discovery order.
    #[must_use]
    pub fn spanning_tree(&self, start: &str) -> Vec<String> {
        self.depth_first_order(start)
    }

    fn visit<'a>(&'a self, vertex: &'a str, visited: &mut HashSet<&'a str>, order: &mut Vec<String>) {
        visited.insert(vertex);
        order.push(vertex.to_owned());

        let Some(neighbors) = self.adjacency.get(vertex) else {
            return;
        };
        for neighbor in neighbors {
            if !visited.contains(neighbor.as_str()) {
                self.visit(neighbor, visited, order);
            }
        }
    }
}

impl<K, N> FromIterator<(K, Vec<N>)> for Graph
where
    K: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter
                .into_iter()
                .map(|(vertex, neighbors)| {
                    (
                        vertex.into(),
                        neighbors.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex}:")?;
            for neighbor in neighbors {
                write!(f, " {neighbor}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
