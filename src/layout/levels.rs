use std::collections::{HashMap, HashSet, VecDeque};

use crate::ir::{MindmapEdge, MindmapNode};

/// Breadth-first depth and tree parent of every node reachable from `root_id`.
///
/// Edges are followed in input order; a node already reached keeps its first
/// (shallowest) parent, which also makes cycles harmless.
pub fn bfs_levels<'a>(
    edges: &'a [MindmapEdge],
    root_id: &'a str,
) -> HashMap<&'a str, (usize, Option<&'a str>)> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut levels: HashMap<&str, (usize, Option<&str>)> = HashMap::new();
    levels.insert(root_id, (0, None));
    let mut queue = VecDeque::from([root_id]);
    while let Some(current) = queue.pop_front() {
        let level = levels.get(current).map(|(level, _)| *level).unwrap_or(0);
        let Some(children) = adjacency.get(current) else {
            continue;
        };
        for &child in children {
            if levels.contains_key(child) {
                continue;
            }
            levels.insert(child, (level + 1, Some(current)));
            queue.push_back(child);
        }
    }
    levels
}

/// Stamps `level`, `isRoot`, `hasChildren` and the derived `parentId`.
///
/// Unreachable nodes get level 0 and keep whatever `parentId` they carried.
/// Running this twice over the same input is a no-op.
pub fn assign_levels(nodes: &mut [MindmapNode], edges: &[MindmapEdge], root_id: &str) {
    let levels = bfs_levels(edges, root_id);
    let sources: HashSet<&str> = edges.iter().map(|edge| edge.source.as_str()).collect();
    for node in nodes.iter_mut() {
        node.is_root = node.id == root_id;
        node.has_children = sources.contains(node.id.as_str());
        match levels.get(node.id.as_str()) {
            Some((level, parent)) => {
                node.level = *level;
                node.parent_id = parent.map(str::to_string);
            }
            None => {
                node.level = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<MindmapNode>, Vec<MindmapEdge>) {
        let nodes = vec![
            MindmapNode::new("root", "Root"),
            MindmapNode::new("a", "A"),
            MindmapNode::new("a1", "A1"),
            MindmapNode::new("stray", "Stray").with_parent("nowhere"),
        ];
        let edges = vec![MindmapEdge::new("root", "a"), MindmapEdge::new("a", "a1")];
        (nodes, edges)
    }

    #[test]
    fn levels_follow_breadth_first_depth() {
        let (mut nodes, edges) = sample();
        assign_levels(&mut nodes, &edges, "root");
        let levels: Vec<usize> = nodes.iter().map(|node| node.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 0]);
        assert!(nodes[0].is_root && !nodes[1].is_root);
        assert!(nodes[0].has_children && nodes[1].has_children && !nodes[2].has_children);
        assert_eq!(nodes[2].parent_id.as_deref(), Some("a"));
        assert_eq!(nodes[0].parent_id, None);
        assert_eq!(nodes[3].parent_id.as_deref(), Some("nowhere"));
    }

    #[test]
    fn assignment_is_idempotent() {
        let (mut nodes, edges) = sample();
        assign_levels(&mut nodes, &edges, "root");
        let once = nodes.clone();
        assign_levels(&mut nodes, &edges, "root");
        assert_eq!(nodes, once);
    }

    #[test]
    fn cyclic_edges_do_not_loop() {
        let edges = vec![
            MindmapEdge::new("root", "a"),
            MindmapEdge::new("a", "b"),
            MindmapEdge::new("b", "root"),
        ];
        let levels = bfs_levels(&edges, "root");
        assert_eq!(levels.len(), 3);
        assert_eq!(levels["root"], (0, None));
        assert_eq!(levels["b"], (2, Some("a")));
    }

    #[test]
    fn shallowest_parent_wins_for_diamonds() {
        let edges = vec![
            MindmapEdge::new("root", "a"),
            MindmapEdge::new("a", "shared"),
            MindmapEdge::new("root", "shared"),
        ];
        let levels = bfs_levels(&edges, "root");
        assert_eq!(levels["shared"], (1, Some("root")));
    }
}
