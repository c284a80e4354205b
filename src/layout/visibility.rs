use std::collections::{HashMap, HashSet};

use crate::ir::{MindmapEdge, MindmapNode};

/// Ids of every node that sits strictly below a collapsed node.
///
/// Walks the edge set depth-first from each collapsed node. The visited set
/// keeps malformed (cyclic) input from looping; a collapsed node that is only
/// reachable from itself stays visible.
pub fn hidden_node_ids<'a>(
    nodes: &'a [MindmapNode],
    edges: &'a [MindmapEdge],
) -> HashSet<&'a str> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    // `hidden` doubles as the visited set across all walks, so every node is
    // expanded at most once no matter how many collapsed ancestors it has.
    let mut hidden: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();
    for node in nodes.iter().filter(|node| node.is_collapsed) {
        let start = node.id.as_str();
        if hidden.contains(start) {
            continue;
        }
        stack.extend(adjacency.get(start).into_iter().flatten().copied());
        while let Some(current) = stack.pop() {
            if current == start || !hidden.insert(current) {
                continue;
            }
            if let Some(children) = adjacency.get(current) {
                stack.extend(children.iter().copied());
            }
        }
    }
    hidden
}

/// Positions of the visible nodes and edges in the input slices, in input order.
pub fn visible_indices(nodes: &[MindmapNode], edges: &[MindmapEdge]) -> (Vec<usize>, Vec<usize>) {
    let hidden = hidden_node_ids(nodes, edges);
    let node_indices = (0..nodes.len())
        .filter(|&idx| !hidden.contains(nodes[idx].id.as_str()))
        .collect();
    let edge_indices = (0..edges.len())
        .filter(|&idx| {
            let edge = &edges[idx];
            !hidden.contains(edge.source.as_str()) && !hidden.contains(edge.target.as_str())
        })
        .collect();
    (node_indices, edge_indices)
}

/// Drops hidden nodes and every edge touching one, preserving input order.
pub fn filter_visible(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
) -> (Vec<MindmapNode>, Vec<MindmapEdge>) {
    let (node_indices, edge_indices) = visible_indices(nodes, edges);
    (
        node_indices.into_iter().map(|idx| nodes[idx].clone()).collect(),
        edge_indices.into_iter().map(|idx| edges[idx].clone()).collect(),
    )
}
