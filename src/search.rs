//! Generic best-first (informed) graph search.
//!
//! This module is the core of the crate. Given a start state, a goal
//! predicate, a successor generator and a heuristic estimate, it computes a
//! minimum-cost path to a goal state, or reports that none is reachable.
//!
//! The engine is problem-agnostic: states are any `Clone + Eq + Hash` type,
//! transitions are any `Clone` type carried alongside each successor purely
//! for path reconstruction. With an admissible, consistent heuristic and
//! non-negative edge costs the first goal popped from the frontier is
//! guaranteed minimum-cost (A*). With the zero heuristic the engine degrades
//! to Dijkstra / uniform-cost search, and with unit edge costs on top of that
//! it visits states in breadth-first order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

/// A path found by [`best_first_search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<S, T> {
    /// The full state sequence, including both the start and the goal state.
    pub path: Vec<S>,
    /// Transition labels describing each step; `transitions[i]` leads from
    /// `path[i]` to `path[i + 1]`, so `transitions.len() == path.len() - 1`.
    pub transitions: Vec<T>,
    /// Total accumulated edge cost of the path.
    pub cost: u64,
    /// Number of states finalized (expanded) during the search. Each state
    /// is finalized at most once per search.
    pub expanded: usize,
}

/// Optional cap on the amount of work one search invocation may perform.
///
/// The engine has no timeout by default; on an infinite or intractably large
/// state space the caller is responsible for bounding the search. Exceeding
/// the budget ends the search as if the frontier had been exhausted.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchBudget {
    /// Maximum number of states to finalize before giving up.
    /// `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchBudget {
    /// A budget with no limits. Searches run until the frontier is empty.
    pub fn unbounded() -> Self {
        SearchBudget {
            max_expansions: None,
        }
    }

    /// A budget that allows at most `n` expansions.
    pub fn expansions(n: usize) -> Self {
        SearchBudget {
            max_expansions: Some(n),
        }
    }

    fn exceeded_by(&self, expanded: usize) -> bool {
        self.max_expansions.map_or(false, |cap| expanded >= cap)
    }
}

/// One entry in the priority frontier.
///
/// Ordered by `priority` ascending (accumulated cost plus heuristic), with
/// ties broken by insertion sequence number so that repeated runs over the
/// same input expand states in the same order and return the same path.
/// Each entry carries its own path history; stale entries for states that
/// were finalized through a cheaper path are discarded lazily on pop.
struct FrontierEntry<S, T> {
    priority: u64,
    seq: u64,
    cost: u64,
    state: S,
    path: Vec<S>,
    transitions: Vec<T>,
}

impl<S, T> PartialEq for FrontierEntry<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S, T> Eq for FrontierEntry<S, T> {}

impl<S, T> Ord for FrontierEntry<S, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse both fields so that the smallest
        // priority (and, on ties, the earliest insertion) is popped first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S, T> PartialOrd for FrontierEntry<S, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost path from `start` to a state satisfying `is_goal`.
///
/// This is the plain entry point: unbounded budget, no observer. See
/// [`best_first_search_with`] for the instrumented variant and the full
/// contract description.
///
/// # Arguments
/// * `start`: The initial state.
/// * `is_goal`: Goal predicate; must be side-effect-free and defined for
///   every reachable state.
/// * `successors`: Returns every `(next_state, transition, cost)` reachable
///   in one step. Edge costs must be non-negative (they are `u64` here, so
///   this holds by construction) and branching must be finite.
/// * `heuristic`: Estimate of the remaining cost to the nearest goal. Must
///   never overestimate (admissible) for the returned cost to be optimal,
///   and must satisfy the triangle inequality across edges (consistent) for
///   the no-re-expansion guarantee. Pass `|_| 0` for plain Dijkstra.
///
/// # Returns
/// `Some(Solution)` with the cheapest path found, or `None` if no goal state
/// is reachable from `start`.
pub fn best_first_search<S, T, G, N, H>(
    start: S,
    is_goal: G,
    successors: N,
    heuristic: H,
) -> Option<Solution<S, T>>
where
    S: Clone + Eq + Hash,
    T: Clone,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(S, T, u64)>,
    H: Fn(&S) -> u64,
{
    best_first_search_with(
        start,
        is_goal,
        successors,
        heuristic,
        SearchBudget::unbounded(),
        |_: &S, _: u64| {},
    )
}

/// [`best_first_search`] with an expansion budget and an observer hook.
///
/// The observer is invoked exactly once per finalized state, with the state
/// and its (now permanent) accumulated cost, in the order states are
/// finalized. It exists for tracing and instrumentation; the engine itself
/// never prints or logs.
///
/// The algorithm is best-first search over a lazy-deletion binary heap:
/// entries are pushed with priority `accumulated_cost + heuristic(state)`
/// and a stale entry whose state was already finalized through a cheaper
/// path is discarded when popped, instead of being removed eagerly. A state
/// may therefore sit in the frontier several times before finalization
/// (self-loops and zero-cost edges are fine), but is expanded at most once.
///
/// Exhausting the frontier and exhausting the budget both return `None`;
/// callers that need to distinguish the two can compare their budget against
/// the number of observer invocations.
pub fn best_first_search_with<S, T, G, N, H, O>(
    start: S,
    is_goal: G,
    successors: N,
    heuristic: H,
    budget: SearchBudget,
    mut observer: O,
) -> Option<Solution<S, T>>
where
    S: Clone + Eq + Hash,
    T: Clone,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(S, T, u64)>,
    H: Fn(&S) -> u64,
    O: FnMut(&S, u64),
{
    let mut frontier: BinaryHeap<FrontierEntry<S, T>> = BinaryHeap::new();
    let mut finalized: HashSet<S> = HashSet::new();
    let mut seq: u64 = 0;
    let mut expanded: usize = 0;

    frontier.push(FrontierEntry {
        priority: heuristic(&start),
        seq,
        cost: 0,
        state: start,
        path: Vec::new(),
        transitions: Vec::new(),
    });

    while let Some(entry) = frontier.pop() {
        // Lazy deletion: a cheaper path already finalized this state.
        if finalized.contains(&entry.state) {
            continue;
        }

        if budget.exceeded_by(expanded) {
            return None;
        }

        finalized.insert(entry.state.clone());
        expanded += 1;
        observer(&entry.state, entry.cost);

        if is_goal(&entry.state) {
            let mut path = entry.path;
            path.push(entry.state);
            return Some(Solution {
                path,
                transitions: entry.transitions,
                cost: entry.cost,
                expanded,
            });
        }

        for (next_state, transition, edge_cost) in successors(&entry.state) {
            if finalized.contains(&next_state) {
                continue;
            }
            let new_cost = entry.cost + edge_cost;
            let mut new_path = entry.path.clone();
            new_path.push(entry.state.clone());
            let mut new_transitions = entry.transitions.clone();
            new_transitions.push(transition);

            seq += 1;
            frontier.push(FrontierEntry {
                priority: new_cost + heuristic(&next_state),
                seq,
                cost: new_cost,
                state: next_state,
                path: new_path,
                transitions: new_transitions,
            });
        }
    }

    None
}

/// Uniform-cost search: [`best_first_search`] with the zero heuristic.
///
/// Equivalent to Dijkstra's algorithm on the implicit graph defined by
/// `successors`. With unit edge costs it finds the path with the fewest
/// transitions, like breadth-first search.
pub fn uniform_cost_search<S, T, G, N>(
    start: S,
    is_goal: G,
    successors: N,
) -> Option<Solution<S, T>>
where
    S: Clone + Eq + Hash,
    T: Clone,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<(S, T, u64)>,
{
    best_first_search(start, is_goal, successors, |_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Small labelled graph for tests: adjacency list over `char` nodes.
    fn successors_of(
        edges: &HashMap<char, Vec<(char, u64)>>,
    ) -> impl Fn(&char) -> Vec<(char, char, u64)> + '_ {
        move |node: &char| {
            edges
                .get(node)
                .map(|adj| adj.iter().map(|&(to, w)| (to, to, w)).collect())
                .unwrap_or_default()
        }
    }

    fn triangle_graph() -> HashMap<char, Vec<(char, u64)>> {
        // A -> B costs 5 directly, but 3 via C.
        let mut edges = HashMap::new();
        edges.insert('A', vec![('B', 5), ('C', 2)]);
        edges.insert('C', vec![('B', 1)]);
        edges
    }

    #[test]
    fn test_prefers_cheaper_indirect_route() {
        let edges = triangle_graph();
        let solution =
            uniform_cost_search('A', |&s| s == 'B', successors_of(&edges)).unwrap();
        assert_eq!(solution.cost, 3);
        assert_eq!(solution.path, vec!['A', 'C', 'B']);
        assert_eq!(solution.transitions, vec!['C', 'B']);
    }

    #[test]
    fn test_start_is_goal() {
        let edges = triangle_graph();
        let solution =
            uniform_cost_search('A', |&s| s == 'A', successors_of(&edges)).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path, vec!['A']);
        assert!(solution.transitions.is_empty());
    }

    #[test]
    fn test_unreachable_goal_returns_none() {
        let edges = triangle_graph();
        // 'Z' never appears in the graph.
        let solution = uniform_cost_search('A', |&s| s == 'Z', successors_of(&edges));
        assert!(solution.is_none());
    }

    #[test]
    fn test_transitions_parallel_to_path() {
        let edges = triangle_graph();
        let solution =
            uniform_cost_search('A', |&s| s == 'B', successors_of(&edges)).unwrap();
        assert_eq!(solution.transitions.len(), solution.path.len() - 1);
        // Replaying the transitions from the start must reproduce the path:
        // in this encoding each transition names the node it enters.
        for (i, t) in solution.transitions.iter().enumerate() {
            assert_eq!(*t, solution.path[i + 1]);
        }
    }

    #[test]
    fn test_self_loops_and_zero_cost_edges() {
        let mut edges = HashMap::new();
        edges.insert('A', vec![('A', 0), ('B', 0)]);
        edges.insert('B', vec![('A', 0), ('C', 4)]);
        let solution =
            uniform_cost_search('A', |&s| s == 'C', successors_of(&edges)).unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.path, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_each_state_finalized_at_most_once() {
        // Dense graph with many alternative routes; the observer must still
        // see every state exactly once.
        let mut edges = HashMap::new();
        edges.insert('A', vec![('B', 1), ('C', 4), ('D', 7)]);
        edges.insert('B', vec![('C', 1), ('A', 1)]);
        edges.insert('C', vec![('D', 1), ('B', 1)]);
        edges.insert('D', vec![('A', 1)]);

        let mut seen: HashMap<char, usize> = HashMap::new();
        let solution = best_first_search_with(
            'A',
            |&s| s == 'D',
            successors_of(&edges),
            |_| 0,
            SearchBudget::unbounded(),
            |state: &char, _cost| {
                *seen.entry(*state).or_insert(0) += 1;
            },
        )
        .unwrap();

        assert_eq!(solution.cost, 3);
        assert_eq!(solution.path, vec!['A', 'B', 'C', 'D']);
        for (state, count) in &seen {
            assert_eq!(*count, 1, "state {:?} finalized more than once", state);
        }
        assert_eq!(solution.expanded, seen.len());
    }

    #[test]
    fn test_optimality_against_brute_force() {
        // Exhaustively enumerate all simple paths A..E and compare costs.
        let mut edges = HashMap::new();
        edges.insert('A', vec![('B', 2), ('C', 9), ('D', 4)]);
        edges.insert('B', vec![('C', 3), ('E', 9)]);
        edges.insert('C', vec![('E', 2)]);
        edges.insert('D', vec![('C', 2), ('E', 8)]);
        edges.insert('E', vec![]);

        fn all_path_costs(
            edges: &HashMap<char, Vec<(char, u64)>>,
            node: char,
            goal: char,
            cost: u64,
            visited: &mut Vec<char>,
            out: &mut Vec<u64>,
        ) {
            if node == goal {
                out.push(cost);
                return;
            }
            for &(next, w) in edges.get(&node).into_iter().flatten() {
                if !visited.contains(&next) {
                    visited.push(next);
                    all_path_costs(edges, next, goal, cost + w, visited, out);
                    visited.pop();
                }
            }
        }

        let mut costs = Vec::new();
        all_path_costs(&edges, 'A', 'E', 0, &mut vec!['A'], &mut costs);
        let brute_force_min = *costs.iter().min().unwrap();

        let solution =
            uniform_cost_search('A', |&s| s == 'E', successors_of(&edges)).unwrap();
        assert_eq!(solution.cost, brute_force_min);
        assert_eq!(solution.cost, 7); // A -> B -> C -> E
    }

    #[test]
    fn test_admissible_heuristic_preserves_optimality() {
        let edges = triangle_graph();
        // True remaining costs are h(A) = 3, h(C) = 1, h(B) = 0; this
        // heuristic stays at or below them, hence admissible and consistent.
        let heuristic = |s: &char| match s {
            'A' => 2,
            'C' => 1,
            _ => 0,
        };
        let solution =
            best_first_search('A', |&s| s == 'B', successors_of(&edges), heuristic)
                .unwrap();
        assert_eq!(solution.cost, 3);
        assert_eq!(solution.path, vec!['A', 'C', 'B']);
    }

    #[test]
    fn test_determinism_across_runs() {
        // Two equal-cost routes to the goal; stable tie-breaking must pick
        // the same one every run.
        let mut edges = HashMap::new();
        edges.insert('A', vec![('B', 1), ('C', 1)]);
        edges.insert('B', vec![('D', 1)]);
        edges.insert('C', vec![('D', 1)]);

        let first =
            uniform_cost_search('A', |&s| s == 'D', successors_of(&edges)).unwrap();
        for _ in 0..5 {
            let again =
                uniform_cost_search('A', |&s| s == 'D', successors_of(&edges)).unwrap();
            assert_eq!(again.path, first.path);
            assert_eq!(again.transitions, first.transitions);
            assert_eq!(again.cost, first.cost);
        }
    }

    #[test]
    fn test_budget_exhaustion_returns_none() {
        // Unbounded counter state space; only a budget stops the search.
        let solution = best_first_search_with(
            0u64,
            |&n| n == u64::MAX,
            |&n| vec![(n + 1, (), 1)],
            |_| 0,
            SearchBudget::expansions(100),
            |_: &u64, _| {},
        );
        assert!(solution.is_none());
    }

    #[test]
    fn test_budget_large_enough_still_finds_goal() {
        let edges = triangle_graph();
        let solution = best_first_search_with(
            'A',
            |&s| s == 'B',
            successors_of(&edges),
            |_| 0,
            SearchBudget::expansions(10),
            |_: &char, _| {},
        );
        assert_eq!(solution.unwrap().cost, 3);
    }

    #[test]
    fn test_zero_heuristic_matches_positive_heuristic_cost() {
        // Dijkstra and A* must agree on the optimal cost, whatever the
        // (admissible) heuristic.
        let mut edges = HashMap::new();
        edges.insert('A', vec![('B', 4), ('C', 1)]);
        edges.insert('C', vec![('D', 1)]);
        edges.insert('D', vec![('B', 1)]);

        let plain =
            uniform_cost_search('A', |&s| s == 'B', successors_of(&edges)).unwrap();
        let informed = best_first_search(
            'A',
            |&s| s == 'B',
            successors_of(&edges),
            |s: &char| if *s == 'B' { 0 } else { 1 },
        )
        .unwrap();
        assert_eq!(plain.cost, informed.cost);
        assert_eq!(plain.cost, 3);
    }
}
