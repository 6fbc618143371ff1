/// Variable-step frame clock.
/// Sanitizes host frame deltas before they reach the spring, so a tab that
/// was backgrounded for minutes resumes with one short step instead of a jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Largest delta handed out per frame.
    max_dt: f32,
    /// Frames advanced since creation.
    frame: u64,
    /// Sum of the clamped deltas.
    elapsed: f64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Advance one frame. Returns the delta to simulate, clamped to
    /// `[0, max_dt]`. +inf is a very long pause; NaN and negatives count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_nan() {
            0.0
        } else {
            frame_dt.clamp(0.0, self.max_dt)
        };
        self.frame += 1;
        self.elapsed += dt as f64;
        dt
    }

    /// Number of frames advanced.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds (clamped deltas only).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
