#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConstants, MeasureConfig, load_config};
pub use ir::{Direction, Handle, MindmapDocument, MindmapEdge, MindmapNode, Position};
pub use layout::{
    DefaultDimensions, DimensionResolver, LayoutError, LayoutResult, TextDimensions,
    perform_complete_layout, perform_default_layout, try_perform_complete_layout,
};
