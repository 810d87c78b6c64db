use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Measured plot-area calibration within the chart container.
///
/// Charting hosts reserve internal space for axis labels that is not a simple
/// sum of the configured margins, so the usable plot rectangle is measured
/// once from the actual layout and injected here instead of being re-derived
/// from margin arithmetic inside every event handler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotCalibration {
    /// Left edge of the plot area in container pixels (axis width included).
    pub origin_x: f64,
    /// Top edge of the plot area in container pixels.
    pub origin_y: f64,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl PlotCalibration {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, plot_width: f64, plot_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            plot_width,
            plot_height,
        }
    }

    /// Returns `true` when the plot rectangle can be used for coordinate math.
    ///
    /// A container that has not been laid out yet reports zero size; pointer
    /// handling must treat that as "no geometry" rather than divide by it.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.origin_x.is_finite()
            && self.origin_y.is_finite()
            && self.plot_width.is_finite()
            && self.plot_height.is_finite()
            && self.plot_width > 0.0
            && self.plot_height > 0.0
    }

    pub fn validate(self) -> BoardResult<Self> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(BoardError::InvalidCalibration(
                "plot origin must be finite".to_owned(),
            ));
        }
        if !self.plot_width.is_finite()
            || !self.plot_height.is_finite()
            || self.plot_width < 0.0
            || self.plot_height < 0.0
        {
            return Err(BoardError::InvalidCalibration(
                "plot size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.is_usable()
            && x >= self.origin_x
            && x <= self.origin_x + self.plot_width
            && y >= self.origin_y
            && y <= self.origin_y + self.plot_height
    }
}
