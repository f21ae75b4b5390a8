mod engine;
mod engine_config;
mod resize_controller;
mod scrollbar_controller;
mod wheel_controller;

pub use engine::ViewportEngine;
pub use engine_config::{PanelSizeBehavior, ViewportEngineConfig, WheelZoomBehavior};
