use crate::ir::{Direction, Handle};
use crate::layout::{Bounds, LayoutResult};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub direction: String,
    pub width: f32,
    pub height: f32,
    pub bounds: Bounds,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub level: usize,
    pub layout: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    pub source_handle: Option<Handle>,
    pub target_handle: Option<Handle>,
}

impl LayoutDump {
    pub fn from_layout(layout: &LayoutResult, direction: Direction) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                x: node.position.x,
                y: node.position.y,
                width: node.width.unwrap_or(0.0),
                height: node.height.unwrap_or(0.0),
                level: node.level,
                layout: node.layout.map(|layout| layout.as_token().to_string()),
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                from: edge.source.clone(),
                to: edge.target.clone(),
                source_handle: edge.source_handle,
                target_handle: edge.target_handle,
            })
            .collect();

        LayoutDump {
            direction: direction.as_token().to_string(),
            width: layout.bounds.width(),
            height: layout.bounds.height(),
            bounds: layout.bounds,
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(
    path: &Path,
    layout: &LayoutResult,
    direction: Direction,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, direction);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{MindmapEdge, MindmapNode};
    use crate::layout::perform_default_layout;

    #[test]
    fn dump_carries_geometry_and_handles() {
        let nodes = vec![MindmapNode::new("root", "Root"), MindmapNode::new("a", "A")];
        let edges = vec![MindmapEdge::new("root", "a")];
        let layout = perform_default_layout(&nodes, &edges, "root", Direction::Radial);
        let dump = LayoutDump::from_layout(&layout, Direction::Radial);

        assert_eq!(dump.direction, "RD");
        assert_eq!(dump.nodes.len(), 2);
        assert_eq!(dump.nodes[1].layout.as_deref(), Some("LR"));
        assert_eq!(dump.nodes[1].level, 1);
        assert_eq!(dump.edges[0].source_handle, Some(Handle::RightSource));
        assert_eq!(dump.width, layout.bounds.width());

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["edges"][0]["source_handle"], "right-source");
    }
}
