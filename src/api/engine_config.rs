use serde::{Deserialize, Serialize};

use crate::core::slots::DEFAULT_LANE_CAP;
use crate::core::types::{PlotCalibration, Viewport};
use crate::error::{BoardError, BoardResult};

/// Which chart the engine is currently hit-testing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Stacked,
    Matrix,
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load dashboard
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardEngineConfig {
    pub viewport: Viewport,
    pub calibration: PlotCalibration,
    #[serde(default = "default_chart_kind")]
    pub chart_kind: ChartKind,
    /// Maximum rendered lanes per day and sign; overflow is reported, not
    /// silently dropped.
    #[serde(default = "default_lane_cap")]
    pub lane_cap: usize,
    /// Minimum interval between pointer-move evaluations.
    #[serde(default = "default_pointer_throttle_ms")]
    pub pointer_throttle_ms: f64,
    /// Delay between a hit-test miss and the tooltip actually hiding.
    #[serde(default = "default_grace_period_ms")]
    pub grace_period_ms: f64,
    /// Granularity for coalescing resize bursts.
    #[serde(default = "default_resize_frame_ms")]
    pub resize_frame_ms: f64,
    /// Rendered bubble area at z = 1.0.
    #[serde(default = "default_bubble_base_area_px")]
    pub bubble_base_area_px: f64,
    /// Extra hit slack around a bubble's rendered radius.
    #[serde(default = "default_hit_padding_px")]
    pub hit_padding_px: f64,
    /// Floor so very small bubbles remain clickable.
    #[serde(default = "default_min_hit_radius_px")]
    pub min_hit_radius_px: f64,
    #[serde(default = "default_tooltip_panel_width_px")]
    pub tooltip_panel_width_px: f64,
    #[serde(default = "default_tooltip_panel_height_px")]
    pub tooltip_panel_height_px: f64,
}

impl BoardEngineConfig {
    /// Creates a config with default interaction tuning.
    #[must_use]
    pub fn new(viewport: Viewport, calibration: PlotCalibration) -> Self {
        Self {
            viewport,
            calibration,
            chart_kind: default_chart_kind(),
            lane_cap: default_lane_cap(),
            pointer_throttle_ms: default_pointer_throttle_ms(),
            grace_period_ms: default_grace_period_ms(),
            resize_frame_ms: default_resize_frame_ms(),
            bubble_base_area_px: default_bubble_base_area_px(),
            hit_padding_px: default_hit_padding_px(),
            min_hit_radius_px: default_min_hit_radius_px(),
            tooltip_panel_width_px: default_tooltip_panel_width_px(),
            tooltip_panel_height_px: default_tooltip_panel_height_px(),
        }
    }

    #[must_use]
    pub fn with_chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }

    #[must_use]
    pub fn with_lane_cap(mut self, lane_cap: usize) -> Self {
        self.lane_cap = lane_cap;
        self
    }

    #[must_use]
    pub fn with_pointer_throttle_ms(mut self, interval_ms: f64) -> Self {
        self.pointer_throttle_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_grace_period_ms(mut self, grace_ms: f64) -> Self {
        self.grace_period_ms = grace_ms;
        self
    }

    #[must_use]
    pub fn with_resize_frame_ms(mut self, frame_ms: f64) -> Self {
        self.resize_frame_ms = frame_ms;
        self
    }

    #[must_use]
    pub fn with_bubble_base_area_px(mut self, area_px: f64) -> Self {
        self.bubble_base_area_px = area_px;
        self
    }

    #[must_use]
    pub fn with_hit_padding_px(mut self, padding_px: f64) -> Self {
        self.hit_padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_min_hit_radius_px(mut self, radius_px: f64) -> Self {
        self.min_hit_radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn with_tooltip_panel_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.tooltip_panel_width_px = width_px;
        self.tooltip_panel_height_px = height_px;
        self
    }

    pub fn validate(self) -> BoardResult<Self> {
        if !self.viewport.is_valid() {
            return Err(BoardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.calibration.validate()?;

        if self.lane_cap == 0 {
            return Err(BoardError::InvalidConfig(
                "lane cap must be >= 1".to_owned(),
            ));
        }

        for (name, value) in [
            ("pointer throttle", self.pointer_throttle_ms),
            ("grace period", self.grace_period_ms),
            ("resize frame", self.resize_frame_ms),
            ("hit padding", self.hit_padding_px),
            ("min hit radius", self.min_hit_radius_px),
            ("tooltip panel width", self.tooltip_panel_width_px),
            ("tooltip panel height", self.tooltip_panel_height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BoardError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        if !self.bubble_base_area_px.is_finite() || self.bubble_base_area_px <= 0.0 {
            return Err(BoardError::InvalidConfig(
                "bubble base area must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> BoardResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BoardError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BoardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BoardError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_chart_kind() -> ChartKind {
    ChartKind::Stacked
}

fn default_lane_cap() -> usize {
    DEFAULT_LANE_CAP
}

fn default_pointer_throttle_ms() -> f64 {
    40.0
}

fn default_grace_period_ms() -> f64 {
    250.0
}

fn default_resize_frame_ms() -> f64 {
    16.7
}

fn default_bubble_base_area_px() -> f64 {
    450.0
}

fn default_hit_padding_px() -> f64 {
    4.0
}

fn default_min_hit_radius_px() -> f64 {
    8.0
}

fn default_tooltip_panel_width_px() -> f64 {
    240.0
}

fn default_tooltip_panel_height_px() -> f64 {
    160.0
}
