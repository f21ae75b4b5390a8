use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Wheel-zoom tuning: factor bounds, per-notch steps, and debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelZoomBehavior {
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Multiplier applied per wheel notch toward the data.
    pub zoom_in_factor: f64,
    /// Multiplier applied per wheel notch away from the data.
    pub zoom_out_factor: f64,
    /// Trailing coalescing window; only the last event in a burst commits.
    pub debounce_ms: u64,
}

impl Default for WheelZoomBehavior {
    fn default() -> Self {
        Self {
            zoom_min: 1.0,
            zoom_max: 10.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            debounce_ms: 50,
        }
    }
}

impl WheelZoomBehavior {
    fn validate(self) -> ViewResult<Self> {
        if !self.zoom_min.is_finite() || !self.zoom_max.is_finite() || self.zoom_min < 1.0 {
            return Err(ViewError::InvalidData(
                "zoom bounds must be finite and >= 1".to_owned(),
            ));
        }
        if self.zoom_max < self.zoom_min {
            return Err(ViewError::InvalidData(
                "zoom max must be >= zoom min".to_owned(),
            ));
        }
        if !self.zoom_in_factor.is_finite()
            || !self.zoom_out_factor.is_finite()
            || self.zoom_in_factor <= 1.0
            || self.zoom_out_factor <= 0.0
            || self.zoom_out_factor >= 1.0
        {
            return Err(ViewError::InvalidData(
                "zoom steps must satisfy 0 < out < 1 < in".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Panel sizing policy for the resize gesture and container tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSizeBehavior {
    pub min_height_px: f64,
    pub max_height_px: f64,
    /// Fraction of the container height applied on container resize.
    pub container_ratio: f64,
}

impl Default for PanelSizeBehavior {
    fn default() -> Self {
        Self {
            min_height_px: 400.0,
            max_height_px: 800.0,
            container_ratio: 0.7,
        }
    }
}

impl PanelSizeBehavior {
    fn validate(self) -> ViewResult<Self> {
        if !self.min_height_px.is_finite()
            || !self.max_height_px.is_finite()
            || self.min_height_px <= 0.0
            || self.max_height_px < self.min_height_px
        {
            return Err(ViewError::InvalidData(
                "panel height bounds must be finite and 0 < min <= max".to_owned(),
            ));
        }
        if !self.container_ratio.is_finite()
            || self.container_ratio <= 0.0
            || self.container_ratio > 1.0
        {
            return Err(ViewError::InvalidData(
                "panel container ratio must be within (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Height derived from a container measurement, clamped to the bounds.
    #[must_use]
    pub fn fitted_height(self, container_height_px: f64) -> f64 {
        (container_height_px * self.container_ratio).clamp(self.min_height_px, self.max_height_px)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load viewport
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportEngineConfig {
    pub container_height_px: f64,
    #[serde(default)]
    pub wheel_zoom: WheelZoomBehavior,
    #[serde(default)]
    pub panel_size: PanelSizeBehavior,
    #[serde(default = "default_domain_padding_ratio")]
    pub domain_padding_ratio: f64,
}

impl ViewportEngineConfig {
    /// Creates a minimal config from the containing viewport's height.
    #[must_use]
    pub fn new(container_height_px: f64) -> Self {
        Self {
            container_height_px,
            wheel_zoom: WheelZoomBehavior::default(),
            panel_size: PanelSizeBehavior::default(),
            domain_padding_ratio: default_domain_padding_ratio(),
        }
    }

    /// Sets wheel-zoom tuning.
    #[must_use]
    pub fn with_wheel_zoom(mut self, behavior: WheelZoomBehavior) -> Self {
        self.wheel_zoom = behavior;
        self
    }

    /// Sets panel sizing policy.
    #[must_use]
    pub fn with_panel_size(mut self, behavior: PanelSizeBehavior) -> Self {
        self.panel_size = behavior;
        self
    }

    /// Sets the padding ratio applied around the fitted price domain.
    #[must_use]
    pub fn with_domain_padding_ratio(mut self, ratio: f64) -> Self {
        self.domain_padding_ratio = ratio;
        self
    }

    pub(super) fn validate(self) -> ViewResult<Self> {
        if !self.container_height_px.is_finite() || self.container_height_px <= 0.0 {
            return Err(ViewError::InvalidData(
                "container height must be finite and > 0".to_owned(),
            ));
        }
        if !self.domain_padding_ratio.is_finite() || self.domain_padding_ratio < 0.0 {
            return Err(ViewError::InvalidData(
                "domain padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        self.wheel_zoom.validate()?;
        self.panel_size.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ViewResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_domain_padding_ratio() -> f64 {
    0.05
}
