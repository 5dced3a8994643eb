//! Weighted directed graphs with named nodes.
//!
//! This is the caller-side problem definition used by the `route_finder`
//! binary: a plain adjacency map plus two queries built on the search core.
//! `shortest_path` answers a single start/goal pair through
//! [`crate::search::uniform_cost_search`]; `shortest_distances` runs the
//! classic distance-map form of Dijkstra's algorithm to every reachable
//! node at once.

use crate::search::{uniform_cost_search, Solution};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// A directed graph with string-named nodes and non-negative edge weights.
///
/// Nodes exist independently of edges, so an isolated node is representable
/// (and reported as unreachable rather than unknown).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<(String, u64)>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Adds a node with no edges. Adding an existing node is a no-op.
    pub fn add_node(&mut self, name: &str) {
        self.adjacency.entry(name.to_string()).or_default();
    }

    /// Adds a directed edge `from -> to` with the given weight.
    ///
    /// Both endpoints are created if they do not exist yet. Parallel edges
    /// are kept as-is; the search simply never takes the costlier one.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) {
        self.add_node(to);
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
    }

    /// Adds the edge in both directions with the same weight.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: u64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Returns whether the graph knows the node.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Returns every node name, sorted for stable iteration and display.
    pub fn nodes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the outgoing edges of `name`, or an empty slice for unknown
    /// nodes.
    pub fn neighbors(&self, name: &str) -> &[(String, u64)] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds a minimum-weight path from `start` to `goal`.
    ///
    /// Runs uniform-cost search over the adjacency map; the transition label
    /// on each step is the name of the node it enters. Successor edges are
    /// offered in sorted order so equal-cost routes resolve the same way on
    /// every run.
    ///
    /// # Returns
    /// `Some(Solution)` with the node sequence (including `start` and
    /// `goal`) and total weight, or `None` when `goal` is unreachable or
    /// either endpoint is unknown.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Option<Solution<String, String>> {
        if !self.contains(start) || !self.contains(goal) {
            return None;
        }
        let goal = goal.to_string();
        uniform_cost_search(
            start.to_string(),
            |node: &String| *node == goal,
            |node: &String| {
                let mut edges: Vec<(String, String, u64)> = self
                    .neighbors(node)
                    .iter()
                    .map(|(to, w)| (to.clone(), to.clone(), *w))
                    .collect();
                edges.sort_unstable();
                edges
            },
        )
    }

    /// Computes the minimum distance from `start` to every reachable node.
    ///
    /// This is the distance-map form of Dijkstra's algorithm: tentative
    /// distances shrink monotonically until each node is finalized, stale
    /// queue entries are discarded on pop, and the map is permanent once
    /// returned. Unreachable nodes are simply absent from the map.
    ///
    /// # Arguments
    /// * `start`: Source node; an unknown name yields an empty map.
    ///
    /// # Returns
    /// A map from node name to its minimum total edge weight from `start`
    /// (the start itself maps to 0).
    pub fn shortest_distances(&self, start: &str) -> HashMap<String, u64> {
        let mut distances: HashMap<String, u64> = HashMap::new();
        if !self.contains(start) {
            return distances;
        }

        let mut heap: BinaryHeap<Reverse<(u64, String)>> = BinaryHeap::new();
        distances.insert(start.to_string(), 0);
        heap.push(Reverse((0, start.to_string())));

        while let Some(Reverse((dist, node))) = heap.pop() {
            // Stale entry: a shorter path to this node was already settled.
            if distances.get(&node).is_some_and(|&best| dist > best) {
                continue;
            }
            for (next, weight) in self.neighbors(&node) {
                let candidate = dist + weight;
                let improved = distances
                    .get(next)
                    .map_or(true, |&best| candidate < best);
                if improved {
                    distances.insert(next.clone(), candidate);
                    heap.push(Reverse((candidate, next.clone())));
                }
            }
        }
        distances
    }
}
