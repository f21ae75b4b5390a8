//! stockview-rs: interactive viewport engine for price-series charts.
//!
//! This crate owns the hard part of an OHLC chart UI: a zoom factor and a
//! visible index window over a fixed series, updated by cursor-anchored
//! wheel zoom, scrollbar-drag pan, and a vertical resize gesture, debounced
//! and clamped under rapid input. Rendering and data fetch stay behind
//! narrow collaborator boundaries (`render::Renderer`, `feed`).

pub mod api;
pub mod core;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ViewportEngine, ViewportEngineConfig};
pub use error::{ViewError, ViewResult};
