use crate::config::LayoutConstants;

use super::subtree::children_span;
use super::tree::LayoutTree;

/// Allocation for TB and BT. Requires exact widths in `subtree_size`.
///
/// Cross axis: every child reserves its exact subtree width, separated by
/// `horizontalSiblingGap`, and the parent is centered over the reserved span.
/// Main axis: all nodes at one depth share a band whose offset is the
/// previous band's offset plus that band's tallest node plus
/// `verticalLevelGap`.
pub(crate) fn allocate_vertical(tree: &mut LayoutTree<'_>, constants: &LayoutConstants) {
    let count = tree.len();
    let mut centers = vec![0.0f32; count];

    // Breadth-first order guarantees a parent's center is final before its
    // children read it.
    for idx in 0..count {
        let center = centers[idx];
        let node = &mut tree.nodes[idx];
        node.cross = center - node.width / 2.0;

        let kids = &tree.children[idx];
        let mut cursor = center - children_span(tree, kids, constants) / 2.0;
        for &child in kids {
            let reserved = tree.nodes[child].subtree_size;
            centers[child] = cursor + reserved / 2.0;
            cursor += reserved + constants.horizontal_sibling_gap;
        }
    }

    let offsets = level_offsets(tree, constants);
    for node in tree.nodes.iter_mut() {
        node.main = offsets[node.depth];
    }
}

/// Main-axis offset of every depth band, starting at 0 for the root's band.
pub(crate) fn level_offsets(tree: &LayoutTree<'_>, constants: &LayoutConstants) -> Vec<f32> {
    let depth_count = tree.max_depth() + 1;
    let mut tallest = vec![0.0f32; depth_count];
    for node in &tree.nodes {
        tallest[node.depth] = tallest[node.depth].max(node.height);
    }
    let mut offsets = vec![0.0f32; depth_count];
    for depth in 1..depth_count {
        offsets[depth] = offsets[depth - 1] + tallest[depth - 1] + constants.vertical_level_gap;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{MindmapEdge, MindmapNode};
    use crate::layout::dimensions::Dimensions;
    use crate::layout::subtree::compute_widths;

    fn build(
        specs: &[(&str, Option<&str>, f32, f32)],
    ) -> (Vec<MindmapNode>, Vec<Dimensions>, Vec<MindmapEdge>) {
        let mut nodes = Vec::new();
        let mut dims = Vec::new();
        let mut edges = Vec::new();
        for (id, parent, width, height) in specs {
            nodes.push(MindmapNode::new(*id, *id));
            dims.push(Dimensions { width: *width, height: *height });
            if let Some(parent) = parent {
                edges.push(MindmapEdge::new(*parent, *id));
            }
        }
        (nodes, dims, edges)
    }

    #[test]
    fn children_reserve_exact_widths_with_gaps() {
        let (nodes, dims, edges) = build(&[
            ("root", None, 100.0, 40.0),
            ("a", Some("root"), 80.0, 40.0),
            ("b", Some("root"), 200.0, 40.0),
            ("c", Some("root"), 120.0, 40.0),
        ]);
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        let constants = LayoutConstants::default();
        compute_widths(&mut tree, &constants);
        allocate_vertical(&mut tree, &constants);

        let crosses: Vec<f32> = tree.nodes.iter().map(|node| node.cross).collect();
        assert_eq!(crosses, vec![-50.0, -280.0, -120.0, 160.0]);
        assert_eq!(tree.nodes[1].main, 100.0);
    }

    #[test]
    fn level_bands_use_the_tallest_node_of_the_previous_level() {
        let (nodes, dims, edges) = build(&[
            ("root", None, 100.0, 40.0),
            ("a", Some("root"), 80.0, 90.0),
            ("b", Some("root"), 80.0, 30.0),
            ("b1", Some("b"), 80.0, 30.0),
        ]);
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        let constants = LayoutConstants::default();
        compute_widths(&mut tree, &constants);
        allocate_vertical(&mut tree, &constants);

        assert_eq!(level_offsets(&tree, &constants), vec![0.0, 100.0, 250.0]);
        let b1 = tree.index_of("b1").unwrap();
        assert_eq!(tree.nodes[b1].main, 250.0);
    }

    #[test]
    fn wide_parent_centers_narrow_children_beneath_it() {
        let (nodes, dims, edges) = build(&[
            ("root", None, 600.0, 40.0),
            ("a", Some("root"), 50.0, 40.0),
            ("b", Some("root"), 50.0, 40.0),
        ]);
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        let constants = LayoutConstants::default();
        compute_widths(&mut tree, &constants);
        allocate_vertical(&mut tree, &constants);

        assert_eq!(tree.nodes[0].cross, -300.0);
        assert_eq!(tree.nodes[1].cross, -90.0);
        assert_eq!(tree.nodes[2].cross, 40.0);
    }
}
