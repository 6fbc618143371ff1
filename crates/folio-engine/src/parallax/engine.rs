use glam::Vec2;

use crate::api::config::FolioConfig;
use crate::api::error::{FolioError, Result};
use crate::core::spring::{Spring2, SpringParams};
use crate::layout::viewport::{Bounds, LayoutMode};
use crate::parallax::transform::SceneTransform;

/// Pointer-driven tilt for a layered pseudo-3D scene.
///
/// Pointer position inside a container becomes a pair of target angles
/// around fixed base angles; the published angles chase the target through
/// a damped spring. Angle pairs are stored as (pitch, yaw).
///
/// The engine never queries the environment: container bounds arrive with
/// every pointer event and layout mode is pushed in by the owner.
#[derive(Debug, Clone)]
pub struct ParallaxEngine {
    base: Vec2,
    gain: Vec2,
    angle_factor: Vec2,
    offset_limit: f32,
    compact_scale: f32,
    spring: SpringParams,

    pointer_offset: Vec2,
    target: Vec2,
    angles: Spring2,
    mode: LayoutMode,
}

impl ParallaxEngine {
    pub fn new(config: &FolioConfig) -> Self {
        let base = config.base_angles();
        Self {
            base,
            gain: config.gain,
            angle_factor: config.angle_factor,
            offset_limit: config.offset_limit.abs(),
            compact_scale: config.compact_scale,
            spring: config.spring,
            pointer_offset: Vec2::ZERO,
            target: base,
            angles: Spring2::at(base),
            mode: LayoutMode::Regular,
        }
    }

    /// Retarget from a pointer position in client coordinates.
    ///
    /// Ignored in compact mode. Degenerate bounds drop the pointer back to
    /// the origin (target = base angles) and report `DegenerateGeometry`.
    pub fn on_pointer_move(&mut self, client: Vec2, bounds: Bounds) -> Result<()> {
        if self.mode.is_compact() {
            return Ok(());
        }
        match bounds.normalized_offset(client) {
            Some(offset) => {
                let limit = Vec2::splat(self.offset_limit);
                self.pointer_offset = offset.clamp(-limit, limit);
                self.target = self.angles_for(self.pointer_offset);
                Ok(())
            }
            None => {
                self.on_pointer_leave();
                Err(FolioError::DegenerateGeometry {
                    width: bounds.width,
                    height: bounds.height,
                })
            }
        }
    }

    /// Pointer left the container: drift back to the base angles.
    pub fn on_pointer_leave(&mut self) {
        self.pointer_offset = Vec2::ZERO;
        self.target = self.base;
    }

    /// Switch layout. Entering compact mode also releases the pointer.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if mode.is_compact() {
            self.on_pointer_leave();
        }
        self.mode = mode;
    }

    /// Advance the angles toward the target by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.angles.step(self.target, dt, &self.spring);
    }

    /// Target (pitch, yaw) for a normalized pointer offset.
    fn angles_for(&self, offset: Vec2) -> Vec2 {
        let gained = offset * self.gain;
        Vec2::new(
            self.base.x + gained.y * self.angle_factor.y,
            self.base.y + gained.x * self.angle_factor.x,
        )
    }

    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    pub fn current_angles(&self) -> Vec2 {
        self.angles.value()
    }

    pub fn target_angles(&self) -> Vec2 {
        self.target
    }

    pub fn base_angles(&self) -> Vec2 {
        self.base
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn is_compact(&self) -> bool {
        self.mode.is_compact()
    }

    /// Whether the angles have come to rest on the target.
    pub fn is_settled(&self) -> bool {
        self.angles.is_at_rest(self.target)
    }

    pub fn transform(&self) -> SceneTransform {
        let angles = self.current_angles();
        SceneTransform {
            pitch: angles.x,
            yaw: angles.y,
            scale: if self.is_compact() { self.compact_scale } else { 1.0 },
        }
    }
}
