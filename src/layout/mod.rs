mod dimensions;
mod error;
mod horizontal;
mod levels;
mod projection;
mod radial;
mod subtree;
mod text;
mod tree;
pub(crate) mod types;
mod vertical;
mod visibility;

pub use dimensions::*;
pub use error::{LayoutError, validate_hierarchy};
pub use levels::{assign_levels, bfs_levels};
pub use types::*;
pub use visibility::{filter_visible, hidden_node_ids, visible_indices};

use horizontal::allocate_horizontal;
use projection::project;
use radial::{allocate_radial, edge_handles};
use subtree::{compute_weights, compute_widths};
use tree::{LayoutTree, Side};
use vertical::allocate_vertical;

use crate::config::LayoutConstants;
use crate::ir::{Direction, MindmapEdge, MindmapNode, Position};

/// Lays out the visible part of a mind map around `root_id`.
///
/// Every node is sized through `resolver` first; the sizes are then fixed for
/// the rest of the pass. Nodes below a collapsed node and the edges touching
/// them are left out of the result. An unknown or hidden root returns the
/// input unchanged. Nodes that cannot be reached from the root are parked at
/// `(rootX, rootY)` at level 0.
pub fn perform_complete_layout(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
    root_id: &str,
    direction: Direction,
    constants: &LayoutConstants,
    resolver: &dyn DimensionResolver,
) -> LayoutResult {
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        root = root_id,
        direction = direction.as_token(),
        "mindmap layout start"
    );
    if constants.overrides_bt_depth_multiplier() {
        tracing::debug!(
            bt_depth_multiplier = constants.bt_depth_multiplier,
            "btDepthMultiplier has no effect; BT levels use per-level bands"
        );
    }
    if !nodes.iter().any(|node| node.id == root_id) {
        tracing::debug!(root = root_id, "root not found, returning input unchanged");
        return LayoutResult::unchanged(nodes, edges);
    }

    let dims = resolve_dimensions(nodes, edges, root_id, resolver);

    let (node_indices, edge_indices) = visible_indices(nodes, edges);
    let mut visible_nodes: Vec<MindmapNode> = Vec::with_capacity(node_indices.len());
    let mut visible_dims: Vec<Dimensions> = Vec::with_capacity(node_indices.len());
    for idx in node_indices {
        let mut node = nodes[idx].clone();
        node.width = Some(dims[idx].width);
        node.height = Some(dims[idx].height);
        visible_nodes.push(node);
        visible_dims.push(dims[idx]);
    }
    let mut visible_edges: Vec<MindmapEdge> =
        edge_indices.into_iter().map(|idx| edges[idx].clone()).collect();

    let Some(mut tree) = LayoutTree::build(&visible_nodes, &visible_dims, &visible_edges, root_id)
    else {
        tracing::debug!(root = root_id, "root is hidden, returning input unchanged");
        return LayoutResult::unchanged(nodes, edges);
    };

    match direction {
        Direction::LeftRight | Direction::RightLeft => {
            compute_weights(&mut tree, constants);
            allocate_horizontal(&mut tree, constants);
        }
        Direction::TopBottom | Direction::BottomTop => {
            compute_widths(&mut tree, constants);
            allocate_vertical(&mut tree, constants);
        }
        Direction::Radial => {
            compute_weights(&mut tree, constants);
            allocate_radial(&mut tree, constants);
        }
    }
    project(&mut tree, direction, constants);

    let placements: Vec<(usize, Position, Direction)> = tree
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.source, node.position, node_layout(direction, idx, node.side)))
        .collect();
    let handles = match direction {
        Direction::Radial => edge_handles(&tree, &visible_edges),
        _ => Vec::new(),
    };
    drop(tree);

    let mut placed = vec![false; visible_nodes.len()];
    for (source, position, layout) in placements {
        let node = &mut visible_nodes[source];
        node.position = position;
        node.layout = Some(layout);
        placed[source] = true;
    }
    let mut disconnected = Vec::new();
    for (node, placed) in visible_nodes.iter_mut().zip(&placed) {
        if *placed {
            continue;
        }
        node.position = Position {
            x: constants.root_x,
            y: constants.root_y,
        };
        node.layout = Some(direction);
        disconnected.push(node.id.clone());
    }
    if !disconnected.is_empty() {
        tracing::warn!(
            count = disconnected.len(),
            nodes = ?disconnected,
            "nodes not reachable from the root were placed at the anchor"
        );
    }

    // Radial only. Edges outside the tree lose any handles they came in with.
    for (edge, handle) in visible_edges.iter_mut().zip(handles) {
        edge.source_handle = handle.map(|(source_handle, _)| source_handle);
        edge.target_handle = handle.map(|(_, target_handle)| target_handle);
    }

    assign_levels(&mut visible_nodes, &visible_edges, root_id);
    let bounds = Bounds::from_nodes(&visible_nodes);
    tracing::debug!(
        nodes = visible_nodes.len(),
        edges = visible_edges.len(),
        direction = direction.as_token(),
        ?bounds,
        "mindmap layout done"
    );
    LayoutResult {
        nodes: visible_nodes,
        edges: visible_edges,
        bounds,
    }
}

/// [`perform_complete_layout`] behind [`validate_hierarchy`].
pub fn try_perform_complete_layout(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
    root_id: &str,
    direction: Direction,
    constants: &LayoutConstants,
    resolver: &dyn DimensionResolver,
) -> Result<LayoutResult, LayoutError> {
    validate_hierarchy(nodes, edges, root_id)?;
    Ok(perform_complete_layout(
        nodes, edges, root_id, direction, constants, resolver,
    ))
}

/// Layout with the default constants and fixed-size boxes.
pub fn perform_default_layout(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
    root_id: &str,
    direction: Direction,
) -> LayoutResult {
    let constants = LayoutConstants::default();
    let resolver = DefaultDimensions::from_constants(&constants);
    perform_complete_layout(nodes, edges, root_id, direction, &constants, &resolver)
}

/// Sizes every input node, hidden ones included. Levels come from the full
/// edge set so font tiers do not depend on collapse state.
fn resolve_dimensions(
    nodes: &[MindmapNode],
    edges: &[MindmapEdge],
    root_id: &str,
    resolver: &dyn DimensionResolver,
) -> Vec<Dimensions> {
    let levels = bfs_levels(edges, root_id);
    nodes
        .iter()
        .map(|node| {
            let request = DimensionRequest {
                id: &node.id,
                label: &node.label,
                meta: &node.meta,
                level: levels.get(node.id.as_str()).map_or(0, |(level, _)| *level),
                is_root: node.id == root_id,
                width: node.width,
                height: node.height,
            };
            resolver.resolve(&request).clamped()
        })
        .collect()
}

fn node_layout(direction: Direction, idx: usize, side: Side) -> Direction {
    match direction {
        Direction::Radial if idx == LayoutTree::ROOT => Direction::Radial,
        Direction::Radial => match side {
            Side::Right => Direction::LeftRight,
            Side::Left => Direction::RightLeft,
        },
        other => other,
    }
}
