//! graphview-rs: deterministic chart-layout engine for bar and line graphs.
//!
//! The crate keeps a strict architectural split: pure geometry lives in
//! `core`, the stateful engine facade and frame building live in `api`, and
//! backend-agnostic draw primitives plus renderer backends live in `render`.
//! Layout is a pure function of its inputs; backends only execute drawing
//! commands.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GraphEngine, GraphEngineConfig};
pub use error::{GraphError, GraphResult};
