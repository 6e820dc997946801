//! Showcase tuning knobs

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Display and interaction parameters for the showcase page.
///
/// Every field has a default matching the shipped product page, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Fallback timer that clears the loading overlay even if the asset has
    /// not finished decoding.
    pub loading_overlay_timeout: Duration,
    /// Yaw added per frame while the user is not dragging, in radians.
    pub auto_rotate_speed: f32,
    /// Radians of rotation per logical point of pointer movement.
    pub drag_sensitivity: f32,
    /// Largest bounding-box dimension after model normalization.
    pub normalize_target: f32,
    /// Viewport widths below this use the pulled-back camera distance.
    pub responsive_breakpoint: f32,
    pub camera_distance: f32,
    pub camera_distance_narrow: f32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            loading_overlay_timeout: Duration::from_millis(1500),
            auto_rotate_speed: 0.005,
            drag_sensitivity: 0.01,
            normalize_target: 2.0,
            responsive_breakpoint: 768.0,
            camera_distance: 5.0,
            camera_distance_narrow: 7.0,
        }
    }
}

impl ShowcaseConfig {
    /// Camera distance for a given viewport width.
    pub fn camera_distance_for_width(&self, width: f32) -> f32 {
        if width < self.responsive_breakpoint {
            self.camera_distance_narrow
        } else {
            self.camera_distance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_page() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.loading_overlay_timeout, Duration::from_millis(1500));
        assert_eq!(config.auto_rotate_speed, 0.005);
        assert_eq!(config.drag_sensitivity, 0.01);
        assert_eq!(config.normalize_target, 2.0);
    }

    #[test]
    fn camera_pulls_back_below_breakpoint() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.camera_distance_for_width(1200.0), 5.0);
        assert_eq!(config.camera_distance_for_width(767.0), 7.0);
        assert_eq!(config.camera_distance_for_width(768.0), 5.0);
    }
}
