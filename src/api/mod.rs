mod engine;
mod engine_config;
mod engine_snapshot;
mod label_format;
mod render_frame_builder;
mod render_style;

pub use engine::GraphEngine;
pub use engine_config::GraphEngineConfig;
pub use engine_snapshot::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
};
pub use label_format::{format_currency_k, format_marker_value, format_y_axis_label};
pub use render_style::GraphStyle;
