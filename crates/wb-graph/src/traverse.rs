//! Breadth-first traversal over the undirected adjacency graph.
//!
//! Edges here include both component-derived adjacency and terminal-link
//! splices. All walks are visited-set guarded, so every traversal terminates
//! in time linear in graph size.

use std::collections::{HashSet, VecDeque};

use wb_core::{CompId, NodeId, Polarity};

use crate::graph::CircuitGraph;

/// All nodes reachable from `start`, including `start` itself.
pub fn reachable_from(graph: &CircuitGraph, start: NodeId) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        for &(neighbor, _) in graph.neighbors(node) {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

/// Whether a node can reach the given battery terminal.
pub fn is_reachable_to_terminal(graph: &CircuitGraph, start: NodeId, terminal: Polarity) -> bool {
    let target = graph.terminal(terminal);
    if start == target {
        return true;
    }
    reachable_from(graph, start).contains(&target)
}

/// The components along the first breadth-first path from `from` to `to`.
///
/// Breadth-first parent reconstruction: the first path found wins, with ties
/// broken by edge insertion order. Returns an empty list when no path
/// exists. A spliced wire can appear more than once when the walk enters and
/// leaves through the same component.
pub fn path_components(graph: &CircuitGraph, from: NodeId, to: NodeId) -> Vec<CompId> {
    if from == to {
        return Vec::new();
    }

    let n = graph.nodes().len();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<(NodeId, CompId)>> = vec![None; n];
    let mut queue = VecDeque::from([from]);
    visited[from.index() as usize] = true;

    while let Some(node) = queue.pop_front() {
        if node == to {
            // Walk parents back to the start, collecting edge labels.
            let mut path = Vec::new();
            let mut cursor = node;
            while let Some((prev, comp)) = parent[cursor.index() as usize] {
                path.push(comp);
                cursor = prev;
            }
            path.reverse();
            return path;
        }
        for &(neighbor, comp) in graph.neighbors(node) {
            let idx = neighbor.index() as usize;
            if !visited[idx] {
                visited[idx] = true;
                parent[idx] = Some((node, comp));
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}
