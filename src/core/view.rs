use crate::core::constants::{EARTH_RADIUS, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Resolution of a full-world Web Mercator view at zoom 0, in map units per
/// pixel.
fn zoom_zero_resolution() -> f64 {
    2.0 * PI * EARTH_RADIUS / TILE_SIZE as f64
}

/// The scale state of a map view, expressed as a resolution in map units
/// per pixel.
///
/// The resolution stays `None` until the hosting component initializes the
/// view; scale operations on an uninitialized view are no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Current resolution, undefined before initialization
    resolution: Option<f64>,
    /// Resolution at the shallowest zoom level
    max_resolution: f64,
    /// Number of zoom levels on the resolution ladder
    zoom_levels: u8,
}

impl View {
    /// Creates an uninitialized view with the standard Web Mercator
    /// resolution ladder (zoom 0..=19)
    pub fn new() -> Self {
        Self {
            resolution: None,
            max_resolution: zoom_zero_resolution(),
            zoom_levels: 20,
        }
    }

    /// Creates a view with a custom resolution ladder
    pub fn with_resolutions(max_resolution: f64, zoom_levels: u8) -> Self {
        Self {
            resolution: None,
            max_resolution,
            zoom_levels,
        }
    }

    pub fn resolution(&self) -> Option<f64> {
        self.resolution
    }

    /// Sets the resolution, clamping onto the view's resolution range
    pub fn set_resolution(&mut self, resolution: f64) {
        let min = self.min_resolution();
        self.resolution = Some(resolution.clamp(min, self.max_resolution));
    }

    pub fn max_resolution(&self) -> f64 {
        self.max_resolution
    }

    /// Resolution at the deepest zoom level
    pub fn min_resolution(&self) -> f64 {
        self.max_resolution / 2_f64.powi(self.zoom_levels as i32 - 1)
    }

    /// Snaps a resolution onto the ladder and steps it by `delta` zoom
    /// levels. Positive deltas zoom in (halve the resolution), negative
    /// deltas zoom out; the result is clamped to the ladder.
    pub fn constrain_resolution(&self, resolution: f64, delta: i32) -> f64 {
        let zoom = (self.max_resolution / resolution).log2().round() as i32;
        let constrained = (zoom + delta).clamp(0, self.zoom_levels as i32 - 1);
        self.max_resolution / 2_f64.powi(constrained)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
