use crate::config::LayoutConstants;
use crate::ir::{Handle, MindmapEdge};

use super::horizontal::{Band, divide_band};
use super::subtree::slot_size;
use super::tree::{LayoutTree, NodeIndex, Side};

/// Splits the root's children by sibling-index parity: even indices grow to
/// the right, odd indices to the left.
pub(crate) fn partition_by_parity(children: &[NodeIndex]) -> (Vec<NodeIndex>, Vec<NodeIndex>) {
    let mut right = Vec::new();
    let mut left = Vec::new();
    for (position, &child) in children.iter().enumerate() {
        if position % 2 == 0 {
            right.push(child);
        } else {
            left.push(child);
        }
    }
    (right, left)
}

/// Marks every node with the side of its first-level ancestor.
fn assign_sides(tree: &mut LayoutTree<'_>) {
    let (_, left) = partition_by_parity(&tree.children[LayoutTree::ROOT]);
    for &child in &left {
        tree.nodes[child].side = Side::Left;
    }
    for idx in 1..tree.len() {
        if let Some(parent) = tree.nodes[idx].parent
            && parent != LayoutTree::ROOT
        {
            tree.nodes[idx].side = tree.nodes[parent].side;
        }
    }
}

/// Radial layout built from two independent LR/RL allocations.
///
/// Each side gets its own band sized from its own weights, then is shifted so
/// that side's bounding box is vertically centered on the root. The two sides
/// never influence each other's spacing or centering.
pub(crate) fn allocate_radial(tree: &mut LayoutTree<'_>, constants: &LayoutConstants) {
    let root = LayoutTree::ROOT;
    let node = &mut tree.nodes[root];
    node.main = 0.0;
    node.cross = -node.height / 2.0;
    node.side = Side::Right;

    assign_sides(tree);
    let (right, left) = partition_by_parity(&tree.children[root]);
    for (side, group) in [(Side::Right, right), (Side::Left, left)] {
        if group.is_empty() {
            continue;
        }
        let weight: f32 = group.iter().map(|&child| tree.nodes[child].subtree_size).sum();
        let band = Band {
            top: 0.0,
            height: weight * slot_size(constants),
        };
        divide_band(tree, root, &group, band, constants);

        let members: Vec<NodeIndex> = (1..tree.len())
            .filter(|&idx| tree.nodes[idx].side == side)
            .collect();
        let (top, bottom) = members.iter().fold((f32::MAX, f32::MIN), |(top, bottom), &idx| {
            let node = &tree.nodes[idx];
            (top.min(node.cross), bottom.max(node.cross + node.height))
        });
        let shift = -(top + bottom) / 2.0;
        tracing::trace!(?side, branches = group.len(), top, bottom, shift, "radial side extent");
        tree.shift_cross(members, shift);
    }
}

/// Handle hints per edge: right-branch edges leave the parent's right side
/// and enter the child's left side, left-branch edges the reverse. Edges
/// outside the tree get none.
pub(crate) fn edge_handles(
    tree: &LayoutTree<'_>,
    edges: &[MindmapEdge],
) -> Vec<Option<(Handle, Handle)>> {
    edges
        .iter()
        .map(|edge| {
            if !tree.is_tree_edge(edge) {
                return None;
            }
            let target = tree.index_of(&edge.target)?;
            Some(match tree.nodes[target].side {
                Side::Right => (Handle::RightSource, Handle::LeftTarget),
                Side::Left => (Handle::LeftSource, Handle::RightTarget),
            })
        })
        .collect()
}
