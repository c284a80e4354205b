use std::collections::{HashMap, VecDeque};

use crate::ir::{MindmapEdge, MindmapNode, Position};

use super::dimensions::Dimensions;

pub(crate) type NodeIndex = usize;

/// Branch orientation. Everything is `Right` except the odd-indexed radial
/// branches, which grow leftwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Right,
    Left,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeNode<'a> {
    pub(crate) id: &'a str,
    /// Index of the node in the visible node list.
    pub(crate) source: usize,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) depth: usize,
    pub(crate) width: f32,
    pub(crate) height: f32,
    /// Weight (LR/RL/RD) or exact cross-axis width (TB/BT).
    pub(crate) subtree_size: f32,
    /// Offset of the node's near edge along the main axis, from the root's.
    pub(crate) main: f32,
    /// Offset of the node's leading edge along the cross axis, relative to
    /// the root's cross-axis center.
    pub(crate) cross: f32,
    pub(crate) side: Side,
    pub(crate) position: Position,
}

/// Arena of the nodes reachable from the root, in breadth-first order.
///
/// Index 0 is the root and every parent precedes its children, so forward
/// iteration is top-down and reverse iteration is bottom-up.
#[derive(Debug, Clone)]
pub(crate) struct LayoutTree<'a> {
    pub(crate) nodes: Vec<TreeNode<'a>>,
    pub(crate) children: Vec<Vec<NodeIndex>>,
    index_of: HashMap<&'a str, NodeIndex>,
}

impl<'a> LayoutTree<'a> {
    pub(crate) const ROOT: NodeIndex = 0;

    /// Builds the spanning tree reachable from `root_id` over `edges`.
    ///
    /// Sibling order is edge order. Edges to unknown nodes, self loops and
    /// any second parent are ignored, so cycles and diamonds degrade into a
    /// plain tree. Returns `None` when the root is not among `nodes`.
    pub(crate) fn build(
        nodes: &'a [MindmapNode],
        dims: &[Dimensions],
        edges: &'a [MindmapEdge],
        root_id: &str,
    ) -> Option<Self> {
        let mut position_of: HashMap<&str, usize> = HashMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            position_of.entry(node.id.as_str()).or_insert(idx);
        }
        let root_source = *position_of.get(root_id)?;

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for edge in edges {
            let (Some(&from), Some(&to)) = (
                position_of.get(edge.source.as_str()),
                position_of.get(edge.target.as_str()),
            ) else {
                continue;
            };
            if from != to {
                adjacency[from].push(to);
            }
        }

        let mut tree = LayoutTree {
            nodes: Vec::with_capacity(nodes.len()),
            children: Vec::with_capacity(nodes.len()),
            index_of: HashMap::with_capacity(nodes.len()),
        };
        let mut claimed = vec![false; nodes.len()];
        claimed[root_source] = true;
        tree.push(nodes, dims, root_source, None, 0);

        let mut queue = VecDeque::from([LayoutTree::ROOT]);
        while let Some(current) = queue.pop_front() {
            let source = tree.nodes[current].source;
            let depth = tree.nodes[current].depth;
            for &target in &adjacency[source] {
                if claimed[target] {
                    continue;
                }
                claimed[target] = true;
                let child = tree.push(nodes, dims, target, Some(current), depth + 1);
                tree.children[current].push(child);
                queue.push_back(child);
            }
        }
        Some(tree)
    }

    fn push(
        &mut self,
        nodes: &'a [MindmapNode],
        dims: &[Dimensions],
        source: usize,
        parent: Option<NodeIndex>,
        depth: usize,
    ) -> NodeIndex {
        let index = self.nodes.len();
        let id = nodes[source].id.as_str();
        let Dimensions { width, height } = dims[source];
        self.nodes.push(TreeNode {
            id,
            source,
            parent,
            depth,
            width,
            height,
            subtree_size: 0.0,
            main: 0.0,
            cross: 0.0,
            side: Side::Right,
            position: Position::default(),
        });
        self.children.push(Vec::new());
        self.index_of.insert(id, index);
        index
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index_of.get(id).copied()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// True when `edge` is the tree link into its target.
    pub(crate) fn is_tree_edge(&self, edge: &MindmapEdge) -> bool {
        let Some(target) = self.index_of(&edge.target) else {
            return false;
        };
        self.nodes[target]
            .parent
            .is_some_and(|parent| self.nodes[parent].id == edge.source)
    }

    pub(crate) fn shift_cross(&mut self, indices: impl IntoIterator<Item = NodeIndex>, delta: f32) {
        for idx in indices {
            self.nodes[idx].cross += delta;
        }
    }
}
