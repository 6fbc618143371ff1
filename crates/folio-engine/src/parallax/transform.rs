/// The rotation and scale the rendering layer applies to the parallax scene.
/// Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    /// Rotation about the horizontal axis (rotateX).
    pub pitch: f32,
    /// Rotation about the vertical axis (rotateY).
    pub yaw: f32,
    pub scale: f32,
}

impl SceneTransform {
    /// CSS transform string, e.g. `rotateX(-12deg) rotateY(5deg) scale(0.18)`.
    /// The scale term is omitted at 1.0.
    pub fn css(&self) -> String {
        if self.scale == 1.0 {
            format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.pitch, self.yaw)
        } else {
            format!(
                "rotateX({:.3}deg) rotateY({:.3}deg) scale({})",
                self.pitch, self.yaw, self.scale
            )
        }
    }
}
