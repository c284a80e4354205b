use crate::config::LayoutConstants;

use super::tree::LayoutTree;

/// Slot size behind subtree weights; never below one unit.
pub(crate) fn slot_size(constants: &LayoutConstants) -> f32 {
    constants.min_node_spacing.max(1.0)
}

/// Number of cross-axis slots a node of `height` needs on its own.
pub(crate) fn own_weight(height: f32, constants: &LayoutConstants) -> f32 {
    (height / slot_size(constants)).ceil().max(1.0)
}

/// Proportional weights for LR, RL and radial layouts.
///
/// `leaf = ceil(h / minNodeSpacing)`, `internal = max(sum(children), own)`,
/// both at least 1. The arena is breadth-first, so a reverse sweep visits
/// every child before its parent and each subtree is sized exactly once.
pub(crate) fn compute_weights(tree: &mut LayoutTree<'_>, constants: &LayoutConstants) {
    for idx in (0..tree.len()).rev() {
        let own = own_weight(tree.nodes[idx].height, constants);
        let children: f32 = tree.children[idx]
            .iter()
            .map(|&child| tree.nodes[child].subtree_size)
            .sum();
        tree.nodes[idx].subtree_size = own.max(children);
    }
}

/// Exact cross-axis pixel reservations for TB and BT layouts.
///
/// `leaf = w`, `internal = max(sum(children) + (n - 1) * gap, w)`.
pub(crate) fn compute_widths(tree: &mut LayoutTree<'_>, constants: &LayoutConstants) {
    for idx in (0..tree.len()).rev() {
        let kids = &tree.children[idx];
        let own = tree.nodes[idx].width;
        let size = if kids.is_empty() {
            own
        } else {
            let span: f32 = kids.iter().map(|&child| tree.nodes[child].subtree_size).sum();
            let gaps = (kids.len() - 1) as f32 * constants.horizontal_sibling_gap;
            own.max(span + gaps)
        };
        tree.nodes[idx].subtree_size = size;
    }
}

/// Total cross-axis width of `children`'s reservations plus the gaps between them.
pub(crate) fn children_span(
    tree: &LayoutTree<'_>,
    children: &[usize],
    constants: &LayoutConstants,
) -> f32 {
    if children.is_empty() {
        return 0.0;
    }
    let widths: f32 = children.iter().map(|&child| tree.nodes[child].subtree_size).sum();
    widths + (children.len() - 1) as f32 * constants.horizontal_sibling_gap
}
