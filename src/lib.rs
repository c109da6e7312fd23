//! xrchart-rs: interaction engine for declarative 3D chart scenes.
//!
//! This crate supplies the interactivity layer for data visualizations built
//! from declarative 3D markup (boxes, spheres, cylinders and friends standing
//! in for chart elements). It owns the state that hover and click handlers
//! mutate — hovered element, HUD contents, and the per-group registry of
//! visible subcharts — while leaving rendering, layout, and camera math to
//! the host framework.

pub mod api;
pub mod error;
pub mod interaction;
pub mod scene;
pub mod telemetry;

pub use api::{PointerEvent, SceneEngine, SceneEngineConfig};
pub use error::{InteractError, InteractResult};
