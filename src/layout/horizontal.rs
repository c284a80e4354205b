use crate::config::LayoutConstants;

use super::subtree::slot_size;
use super::tree::{LayoutTree, NodeIndex};

/// A cross-axis interval handed to a subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub(crate) top: f32,
    pub(crate) height: f32,
}

impl Band {
    fn center(self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Main-axis offset of a child's near edge given its parent's.
///
/// A wide parent pushes its children out further than `levelSpacing` alone
/// would, so the parent's far edge always clears `parentChildGap`.
pub(crate) fn child_main_offset(
    parent_main: f32,
    parent_width: f32,
    constants: &LayoutConstants,
) -> f32 {
    (parent_main + parent_width + constants.parent_child_gap)
        .max(parent_main + constants.level_spacing)
}

/// Band allocation for LR and RL. Requires weights in `subtree_size`.
///
/// The root receives `weight * minNodeSpacing` of cross-axis space; the
/// result is shifted so the root's cross-axis center sits at 0.
pub(crate) fn allocate_horizontal(tree: &mut LayoutTree<'_>, constants: &LayoutConstants) {
    let root = LayoutTree::ROOT;
    let band = Band {
        top: 0.0,
        height: tree.nodes[root].subtree_size * slot_size(constants),
    };
    let node = &mut tree.nodes[root];
    node.main = 0.0;
    node.cross = band.center() - node.height / 2.0;

    let children = std::mem::take(&mut tree.children[root]);
    divide_band(tree, root, &children, band, constants);
    tree.children[root] = children;

    let count = tree.len();
    tree.shift_cross(0..count, -band.center());
}

/// Splits `band` among `children` of `parent` in proportion to their weights
/// and descends through every subtree below them.
///
/// Each node is centered in the full band it was given, not in its
/// children's extent.
pub(crate) fn divide_band(
    tree: &mut LayoutTree<'_>,
    parent: NodeIndex,
    children: &[NodeIndex],
    band: Band,
    constants: &LayoutConstants,
) {
    let mut pending: Vec<(NodeIndex, Band)> = Vec::new();
    split_band(tree, parent, children, band, constants, &mut pending);
    while let Some((node, node_band)) = pending.pop() {
        let kids = std::mem::take(&mut tree.children[node]);
        split_band(tree, node, &kids, node_band, constants, &mut pending);
        tree.children[node] = kids;
    }
}

fn split_band(
    tree: &mut LayoutTree<'_>,
    parent: NodeIndex,
    children: &[NodeIndex],
    band: Band,
    constants: &LayoutConstants,
    pending: &mut Vec<(NodeIndex, Band)>,
) {
    if children.is_empty() {
        return;
    }
    let total: f32 = children
        .iter()
        .map(|&child| tree.nodes[child].subtree_size)
        .sum::<f32>()
        .max(f32::MIN_POSITIVE);
    let main = child_main_offset(tree.nodes[parent].main, tree.nodes[parent].width, constants);

    let mut cursor = band.top;
    for &child in children {
        let node = &mut tree.nodes[child];
        let child_band = Band {
            top: cursor,
            height: band.height * node.subtree_size / total,
        };
        node.main = main;
        node.cross = child_band.center() - node.height / 2.0;
        cursor += child_band.height;
        pending.push((child, child_band));
    }
}
