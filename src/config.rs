use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry constants for one layout pass. Passed explicitly to every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstants {
    pub root_x: f32,
    pub root_y: f32,
    /// Minimum main-axis distance between depth levels (LR/RL/RD).
    pub level_spacing: f32,
    /// Cross-axis slot size used to turn heights into subtree weights.
    pub min_node_spacing: f32,
    pub horizontal_sibling_gap: f32,
    pub vertical_level_gap: f32,
    /// Minimum gap between a parent's far edge and its children's near edge.
    pub parent_child_gap: f32,
    pub default_node_width: f32,
    pub default_node_height: f32,
    /// Legacy fixed BT stride. Accepted so older configuration bundles still
    /// load, but it has no effect on geometry: BT levels use per-level bands.
    pub bt_depth_multiplier: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            root_x: 600.0,
            root_y: 400.0,
            level_spacing: 250.0,
            min_node_spacing: 120.0,
            horizontal_sibling_gap: 80.0,
            vertical_level_gap: 60.0,
            parent_child_gap: 60.0,
            default_node_width: 120.0,
            default_node_height: 40.0,
            bt_depth_multiplier: 200.0,
        }
    }
}

impl LayoutConstants {
    /// True when `btDepthMultiplier` was set to something other than its
    /// default. The value is ignored either way.
    pub fn overrides_bt_depth_multiplier(&self) -> bool {
        self.bt_depth_multiplier != Self::default().bt_depth_multiplier
    }
}

/// Settings for [`crate::layout::TextDimensions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureConfig {
    pub font_family: String,
    pub font_size: f32,
    pub root_font_size: f32,
    pub branch_font_size: f32,
    pub label_line_height: f32,
    pub max_label_width_chars: usize,
    pub padding_x: f32,
    pub padding_y: f32,
    pub icon_size: f32,
    pub indicator_width: f32,
    pub source_row_height: f32,
    pub fast_text_metrics: bool,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            root_font_size: 20.0,
            branch_font_size: 16.0,
            label_line_height: 1.5,
            max_label_width_chars: 28,
            padding_x: 16.0,
            padding_y: 10.0,
            icon_size: 18.0,
            indicator_width: 20.0,
            source_row_height: 18.0,
            fast_text_metrics: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConstants,
    pub measure: MeasureConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConstantsFile {
    root_x: Option<f32>,
    root_y: Option<f32>,
    level_spacing: Option<f32>,
    min_node_spacing: Option<f32>,
    horizontal_sibling_gap: Option<f32>,
    vertical_level_gap: Option<f32>,
    parent_child_gap: Option<f32>,
    default_node_width: Option<f32>,
    default_node_height: Option<f32>,
    bt_depth_multiplier: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeasureConfigFile {
    font_family: Option<String>,
    font_size: Option<f32>,
    root_font_size: Option<f32>,
    branch_font_size: Option<f32>,
    label_line_height: Option<f32>,
    max_label_width_chars: Option<usize>,
    padding_x: Option<f32>,
    padding_y: Option<f32>,
    icon_size: Option<f32>,
    indicator_width: Option<f32>,
    source_row_height: Option<f32>,
    fast_text_metrics: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    layout: Option<LayoutConstantsFile>,
    measure: Option<MeasureConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let is_json5 = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json5"))
        .unwrap_or(false);
    parse_config(&contents, is_json5)
}

pub fn parse_config(contents: &str, json5: bool) -> anyhow::Result<Config> {
    let parsed: ConfigFile = if json5 {
        json5::from_str(contents)?
    } else {
        serde_json::from_str(contents)?
    };

    let mut config = Config::default();
    if let Some(layout) = parsed.layout {
        apply_layout_overrides(&mut config.layout, layout);
    }
    if let Some(measure) = parsed.measure {
        apply_measure_overrides(&mut config.measure, measure);
    }
    Ok(config)
}

fn apply_layout_overrides(target: &mut LayoutConstants, file: LayoutConstantsFile) {
    if let Some(v) = file.root_x {
        target.root_x = v;
    }
    if let Some(v) = file.root_y {
        target.root_y = v;
    }
    if let Some(v) = file.level_spacing {
        target.level_spacing = v;
    }
    if let Some(v) = file.min_node_spacing {
        target.min_node_spacing = v;
    }
    if let Some(v) = file.horizontal_sibling_gap {
        target.horizontal_sibling_gap = v;
    }
    if let Some(v) = file.vertical_level_gap {
        target.vertical_level_gap = v;
    }
    if let Some(v) = file.parent_child_gap {
        target.parent_child_gap = v;
    }
    if let Some(v) = file.default_node_width {
        target.default_node_width = v;
    }
    if let Some(v) = file.default_node_height {
        target.default_node_height = v;
    }
    if let Some(v) = file.bt_depth_multiplier {
        target.bt_depth_multiplier = v;
    }
}

fn apply_measure_overrides(target: &mut MeasureConfig, file: MeasureConfigFile) {
    if let Some(v) = file.font_family {
        target.font_family = v;
    }
    if let Some(v) = file.font_size {
        target.font_size = v;
    }
    if let Some(v) = file.root_font_size {
        target.root_font_size = v;
    }
    if let Some(v) = file.branch_font_size {
        target.branch_font_size = v;
    }
    if let Some(v) = file.label_line_height {
        target.label_line_height = v;
    }
    if let Some(v) = file.max_label_width_chars {
        target.max_label_width_chars = v;
    }
    if let Some(v) = file.padding_x {
        target.padding_x = v;
    }
    if let Some(v) = file.padding_y {
        target.padding_y = v;
    }
    if let Some(v) = file.icon_size {
        target.icon_size = v;
    }
    if let Some(v) = file.indicator_width {
        target.indicator_width = v;
    }
    if let Some(v) = file.source_row_height {
        target.source_row_height = v;
    }
    if let Some(v) = file.fast_text_metrics {
        target.fast_text_metrics = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.root_x, 600.0);
        assert_eq!(config.layout.bt_depth_multiplier, 200.0);
    }

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let config = parse_config(
            r#"{"layout": {"rootX": 0, "levelSpacing": 300}, "measure": {"fastTextMetrics": true}}"#,
            false,
        )
        .unwrap();
        assert_eq!(config.layout.root_x, 0.0);
        assert_eq!(config.layout.level_spacing, 300.0);
        assert_eq!(config.layout.root_y, 400.0);
        assert!(config.measure.fast_text_metrics);
        assert_eq!(config.measure.font_size, 14.0);
    }

    #[test]
    fn json5_config_accepts_comments_and_trailing_commas() {
        let config = parse_config(
            "{\n  // thumbnails\n  layout: { minNodeSpacing: 60, horizontalSiblingGap: 20, },\n}",
            true,
        )
        .unwrap();
        assert_eq!(config.layout.min_node_spacing, 60.0);
        assert_eq!(config.layout.horizontal_sibling_gap, 20.0);
    }

    #[test]
    fn bt_depth_multiplier_override_is_detected() {
        assert!(!LayoutConstants::default().overrides_bt_depth_multiplier());
        let config = parse_config(r#"{"layout": {"btDepthMultiplier": 320}}"#, false).unwrap();
        assert_eq!(config.layout.bt_depth_multiplier, 320.0);
        assert!(config.layout.overrides_bt_depth_multiplier());
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_config("{layout: ", false).is_err());
    }
}
