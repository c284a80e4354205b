use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::ir::{MindmapEdge, MindmapNode};

/// Structural problems found by [`validate_hierarchy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("node `{node}` declares parent `{declared}` but {}", incoming(.actual))]
    ParentMismatch {
        node: String,
        declared: String,
        actual: Option<String>,
    },
    #[error("node `{node}` has more than one parent (`{first}` and `{second}`)")]
    MultipleParents {
        node: String,
        first: String,
        second: String,
    },
    #[error("edge `{from}` -> `{to}` references a missing node")]
    DanglingEdge { from: String, to: String },
    #[error("root `{root}` has an incoming edge from `{parent}`")]
    RootHasParent { root: String, parent: String },
}

fn incoming(actual: &Option<String>) -> String {
    match actual {
        Some(parent) => format!("its incoming edge is from `{parent}`"),
        None => "it has no incoming edge".to_string(),
    }
}

/// Checks that `edges` form a tree over `nodes` rooted at `root_id` and that
/// every declared `parentId` agrees with it. Edges are checked first, then
/// nodes, each in input order; the first violation wins.
///
/// An unknown root is not an error here; the layout pass treats it as a no-op.
pub fn validate_hierarchy(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
    root_id: &str,
) -> Result<(), LayoutError> {
    let known: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let mut parent_of: HashMap<&str, &str> = HashMap::new();

    for edge in edges {
        if !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str()) {
            return Err(LayoutError::DanglingEdge {
                from: edge.source.clone(),
                to: edge.target.clone(),
            });
        }
        if edge.target == root_id {
            return Err(LayoutError::RootHasParent {
                root: root_id.to_string(),
                parent: edge.source.clone(),
            });
        }
        if let Some(first) = parent_of.insert(edge.target.as_str(), edge.source.as_str()) {
            return Err(LayoutError::MultipleParents {
                node: edge.target.clone(),
                first: first.to_string(),
                second: edge.source.clone(),
            });
        }
    }

    for node in nodes {
        let Some(declared) = node.parent_id.as_deref() else {
            continue;
        };
        let actual = parent_of.get(node.id.as_str()).copied();
        if actual != Some(declared) {
            return Err(LayoutError::ParentMismatch {
                node: node.id.clone(),
                declared: declared.to_string(),
                actual: actual.map(str::to_string),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<MindmapNode> {
        vec![
            MindmapNode::new("root", "Root"),
            MindmapNode::new("a", "A").with_parent("root"),
            MindmapNode::new("b", "B"),
        ]
    }

    #[test]
    fn well_formed_tree_passes() {
        let edges = vec![MindmapEdge::new("root", "a"), MindmapEdge::new("a", "b")];
        assert_eq!(validate_hierarchy(&nodes(), &edges, "root"), Ok(()));
    }

    #[test]
    fn reports_dangling_edges_first() {
        let edges = vec![MindmapEdge::new("root", "ghost"), MindmapEdge::new("b", "root")];
        let err = validate_hierarchy(&nodes(), &edges, "root").unwrap_err();
        assert!(matches!(err, LayoutError::DanglingEdge { ref to, .. } if to == "ghost"));
    }

    #[test]
    fn rejects_second_parent_and_root_parent() {
        let edges = vec![
            MindmapEdge::new("root", "a"),
            MindmapEdge::new("root", "b"),
            MindmapEdge::new("a", "b"),
        ];
        assert_eq!(
            validate_hierarchy(&nodes(), &edges, "root"),
            Err(LayoutError::MultipleParents {
                node: "b".into(),
                first: "root".into(),
                second: "a".into(),
            })
        );

        let cyclic = vec![MindmapEdge::new("root", "a"), MindmapEdge::new("a", "root")];
        assert!(matches!(
            validate_hierarchy(&nodes(), &cyclic, "root"),
            Err(LayoutError::RootHasParent { .. })
        ));
    }

    #[test]
    fn declared_parent_must_match_the_edge() {
        let edges = vec![MindmapEdge::new("root", "b"), MindmapEdge::new("b", "a")];
        let err = validate_hierarchy(&nodes(), &edges, "root").unwrap_err();
        assert_eq!(
            err,
            LayoutError::ParentMismatch {
                node: "a".into(),
                declared: "root".into(),
                actual: Some("b".into()),
            }
        );
        assert!(err.to_string().contains("incoming edge is from `b`"));
    }
}
