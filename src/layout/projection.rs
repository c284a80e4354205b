use crate::config::LayoutConstants;
use crate::ir::{Direction, Position};

use super::tree::{LayoutTree, Side};

/// Tree-relative offsets to absolute coordinates.
///
/// | mode | x | y |
/// |------|---|---|
/// | LR | `rootX + main` | `rootY + cross` |
/// | RL | `rootX - main - w` | `rootY + cross` |
/// | TB | `rootX + cross` | `rootY + main` |
/// | BT | `rootX + cross` | `rootY - main - h` |
/// | RD | per branch side, mirrored around the root's center | `rootY + cross` |
///
/// TB and BT are then shifted so the whole tree's bounding box is centered on
/// `rootX`; per-parent centering alone does not guarantee that.
pub(crate) fn project(tree: &mut LayoutTree<'_>, direction: Direction, constants: &LayoutConstants) {
    let root_x = constants.root_x;
    let root_y = constants.root_y;
    let root_half_width = tree.nodes[LayoutTree::ROOT].width / 2.0;

    for node in tree.nodes.iter_mut() {
        node.position = match direction {
            Direction::LeftRight => Position {
                x: root_x + node.main,
                y: root_y + node.cross,
            },
            Direction::RightLeft => Position {
                x: root_x - node.main - node.width,
                y: root_y + node.cross,
            },
            Direction::TopBottom => Position {
                x: root_x + node.cross,
                y: root_y + node.main,
            },
            Direction::BottomTop => Position {
                x: root_x + node.cross,
                y: root_y - node.main - node.height,
            },
            Direction::Radial => Position {
                x: match node.side {
                    Side::Right => root_x - root_half_width + node.main,
                    Side::Left => root_x + root_half_width - node.main - node.width,
                },
                y: root_y + node.cross,
            },
        };
    }

    if matches!(direction, Direction::TopBottom | Direction::BottomTop) {
        recenter_horizontally(tree, root_x);
    }
}

fn recenter_horizontally(tree: &mut LayoutTree<'_>, root_x: f32) {
    let (min_x, max_x) = tree
        .nodes
        .iter()
        .fold((f32::MAX, f32::MIN), |(min_x, max_x), node| {
            (
                min_x.min(node.position.x),
                max_x.max(node.position.x + node.width),
            )
        });
    if min_x > max_x {
        return;
    }
    let shift = root_x - (min_x + max_x) / 2.0;
    for node in tree.nodes.iter_mut() {
        node.position.x += shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{MindmapEdge, MindmapNode};
    use crate::layout::dimensions::Dimensions;

    fn pair() -> (Vec<MindmapNode>, Vec<Dimensions>, Vec<MindmapEdge>) {
        let nodes = vec![MindmapNode::new("root", "Root"), MindmapNode::new("kid", "Kid")];
        let dims = vec![
            Dimensions { width: 100.0, height: 40.0 },
            Dimensions { width: 120.0, height: 40.0 },
        ];
        let edges = vec![MindmapEdge::new("root", "kid")];
        (nodes, dims, edges)
    }

    fn placed(tree: &mut LayoutTree<'_>) {
        tree.nodes[0].cross = -20.0;
        tree.nodes[1].main = 250.0;
        tree.nodes[1].cross = -20.0;
    }

    #[test]
    fn right_left_anchors_the_right_edge() {
        let (nodes, dims, edges) = pair();
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        placed(&mut tree);
        project(&mut tree, Direction::RightLeft, &LayoutConstants::default());
        assert_eq!(tree.nodes[0].position, Position { x: 500.0, y: 380.0 });
        assert_eq!(tree.nodes[1].position, Position { x: 230.0, y: 380.0 });
    }

    #[test]
    fn bottom_top_mirrors_upwards() {
        let (nodes, dims, edges) = pair();
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        tree.nodes[0].cross = -50.0;
        tree.nodes[1].cross = -60.0;
        tree.nodes[1].main = 100.0;
        project(&mut tree, Direction::BottomTop, &LayoutConstants::default());
        assert_eq!(tree.nodes[0].position.y, 360.0);
        assert_eq!(tree.nodes[1].position.y, 260.0);
        assert_eq!(tree.nodes[1].position.x, 540.0);
    }

    #[test]
    fn radial_left_side_mirrors_around_root_center() {
        let (nodes, dims, edges) = pair();
        let mut tree = LayoutTree::build(&nodes, &dims, &edges, "root").unwrap();
        placed(&mut tree);
        tree.nodes[1].side = Side::Left;
        project(&mut tree, Direction::Radial, &LayoutConstants::default());
        assert_eq!(tree.nodes[0].position.x, 550.0);
        assert_eq!(tree.nodes[1].position.x, 650.0 - 250.0 - 120.0);
    }
}
