use serde::{Deserialize, Serialize};

use crate::ir::{MindmapEdge, MindmapNode};

/// Axis-aligned box around every laid-out node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds of the nodes that carry a size; zero when there are none.
    pub fn from_nodes(nodes: &[MindmapNode]) -> Self {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for node in nodes {
            let (Some(width), Some(height)) = (node.width, node.height) else {
                continue;
            };
            min_x = min_x.min(node.position.x);
            min_y = min_y.min(node.position.y);
            max_x = max_x.max(node.position.x + width);
            max_y = max_y.max(node.position.y + height);
        }
        if min_x == f32::MAX {
            return Self::default();
        }
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<MindmapNode>,
    pub edges: Vec<MindmapEdge>,
    pub bounds: Bounds,
}

impl LayoutResult {
    /// The input as-is, for passes that cannot run (unknown root).
    pub fn unchanged(nodes: &[MindmapNode], edges: &[MindmapEdge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
            bounds: Bounds::from_nodes(nodes),
        }
    }

    pub fn node(&self, id: &str) -> Option<&MindmapNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
