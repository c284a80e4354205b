use crate::config::{LayoutConstants, MeasureConfig};
use crate::ir::NodeMeta;

use super::text::measure_label;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    /// Clamp both sides to at least one unit so proportional math never
    /// divides by zero.
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_unit(self.width),
            height: clamp_unit(self.height),
        }
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}

/// Everything a resolver may look at for one node.
#[derive(Debug, Clone, Copy)]
pub struct DimensionRequest<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub meta: &'a NodeMeta,
    pub level: usize,
    pub is_root: bool,
    /// Explicit size carried on the node, if any.
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Produces a node's box. Called once per node per pass, before any
/// positioning, with no ordering between calls.
pub trait DimensionResolver {
    fn resolve(&self, request: &DimensionRequest<'_>) -> Dimensions;
}

impl<F> DimensionResolver for F
where
    F: Fn(&DimensionRequest<'_>) -> Dimensions,
{
    fn resolve(&self, request: &DimensionRequest<'_>) -> Dimensions {
        self(request)
    }
}

/// Uses the node's own width/height and falls back to the configured defaults.
#[derive(Debug, Clone, Copy)]
pub struct DefaultDimensions {
    pub width: f32,
    pub height: f32,
}

impl DefaultDimensions {
    pub fn from_constants(constants: &LayoutConstants) -> Self {
        Self {
            width: constants.default_node_width,
            height: constants.default_node_height,
        }
    }
}

impl Default for DefaultDimensions {
    fn default() -> Self {
        Self::from_constants(&LayoutConstants::default())
    }
}

impl DimensionResolver for DefaultDimensions {
    fn resolve(&self, request: &DimensionRequest<'_>) -> Dimensions {
        Dimensions {
            width: request.width.unwrap_or(self.width),
            height: request.height.unwrap_or(self.height),
        }
    }
}

/// Estimates a node's box from its label text and content indicators.
///
/// Font size is tiered by level (root, first-level branch, everything
/// deeper). Icons and indicator badges (notes, chat link, sources) widen the
/// box; a node with sources also gets an extra row for the source count.
/// Explicit sizes on the node always win.
#[derive(Debug, Clone, Default)]
pub struct TextDimensions {
    pub config: MeasureConfig,
}

impl TextDimensions {
    pub fn new(config: MeasureConfig) -> Self {
        Self { config }
    }

    fn font_size(&self, request: &DimensionRequest<'_>) -> f32 {
        if request.is_root || request.level == 0 {
            self.config.root_font_size
        } else if request.level == 1 {
            self.config.branch_font_size
        } else {
            self.config.font_size
        }
    }
}

impl DimensionResolver for TextDimensions {
    fn resolve(&self, request: &DimensionRequest<'_>) -> Dimensions {
        if let (Some(width), Some(height)) = (request.width, request.height) {
            return Dimensions { width, height };
        }
        let config = &self.config;
        let label = measure_label(request.label, self.font_size(request), config);

        let mut width = label.width + config.padding_x * 2.0;
        if request.meta.icon.is_some() {
            width += config.icon_size + config.padding_x;
        }
        width += request.meta.indicator_count() as f32 * config.indicator_width;

        let mut height = label.height.max(config.icon_size) + config.padding_y * 2.0;
        if request.meta.source_count > 0 {
            height += config.source_row_height;
        }

        Dimensions {
            width: request.width.unwrap_or(width),
            height: request.height.unwrap_or(height),
        }
    }
}
