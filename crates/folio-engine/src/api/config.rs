use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::Result;
use crate::core::spring::SpringParams;

/// Tunable constants for the navigator and parallax engine.
///
/// Every field has a default, so the host may pass a partial JSON object
/// and only override what it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Grid items shown before "view all" (default: 6).
    pub visible_cap: usize,
    /// Horizontal drag distance a swipe must exceed to navigate (default: 50).
    pub swipe_threshold: f32,
    /// Viewport widths strictly below this are compact (default: 768).
    pub compact_breakpoint: f32,
    /// Scene pitch (rotateX) at rest, degrees (default: -12).
    pub base_pitch: f32,
    /// Scene yaw (rotateY) at rest, degrees (default: 5).
    pub base_yaw: f32,
    /// Gain applied to the normalized pointer offset, x then y (default: 15, 8).
    pub gain: Vec2,
    /// Degrees per gained unit; x feeds yaw, y feeds pitch (default: 0.2, 0.15).
    pub angle_factor: Vec2,
    /// Normalized pointer offset is clamped to +/- this on each axis (default: 1).
    pub offset_limit: f32,
    /// Scene scale in compact mode (default: 0.18).
    pub compact_scale: f32,
    /// Spring driving the scene angles.
    pub spring: SpringParams,
    /// Longest frame delta fed to the spring, seconds (default: 1/15).
    pub max_frame_dt: f32,
    /// Maximum events published per frame (default: 32).
    pub max_events: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            visible_cap: 6,
            swipe_threshold: 50.0,
            compact_breakpoint: 768.0,
            base_pitch: -12.0,
            base_yaw: 5.0,
            gain: Vec2::new(15.0, 8.0),
            angle_factor: Vec2::new(0.2, 0.15),
            offset_limit: 1.0,
            compact_scale: 0.18,
            spring: SpringParams::default(),
            max_frame_dt: 1.0 / 15.0,
            max_events: 32,
        }
    }
}

impl FolioConfig {
    /// Parse a (possibly partial) config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Base angles as (pitch, yaw).
    pub fn base_angles(&self) -> Vec2 {
        Vec2::new(self.base_pitch, self.base_yaw)
    }
}
