//! Swipe Configuration
//!
//! Thresholds and spring parameters. All distances are CSS pixels.

use serde::{Deserialize, Serialize};

use crate::spring::SpringConfig;

/// Width of the revealed delete action (also the magnitude of the open offset)
pub const ACTION_WIDTH: f64 = 80.0;

/// Translation below which a release opens the row
pub const OPEN_TRIGGER: f64 = -100.0;

/// Translation above which a release closes an open row
pub const CLOSE_TRIGGER: f64 = 50.0;

/// Pre-drag rest offsets below this count as "mostly open"
pub const SNAP_MIDPOINT: f64 = -40.0;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Tunable swipe behaviour
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub action_width: f64,
    pub open_trigger: f64,
    pub close_trigger: f64,
    pub snap_midpoint: f64,
    pub drag_threshold_px: i32,
    pub spring: SpringConfig,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            action_width: ACTION_WIDTH,
            open_trigger: OPEN_TRIGGER,
            close_trigger: CLOSE_TRIGGER,
            snap_midpoint: SNAP_MIDPOINT,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            spring: SpringConfig::default(),
        }
    }
}

impl SwipeConfig {
    /// Offset of the open rest position
    pub fn open_offset(&self) -> f64 {
        -self.action_width
    }
}
