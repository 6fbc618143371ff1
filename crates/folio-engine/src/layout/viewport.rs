use glam::Vec2;

/// Which layout the page is currently in.
///
/// Compact is the swipe-primary layout: lightbox navigation by drag, no
/// hover pointer, scaled-down parallax scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Regular,
    Compact,
}

impl LayoutMode {
    /// Widths strictly below `breakpoint` are compact.
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::Compact
    }
}

/// Axis-aligned box in client coordinates, as reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// A box that can be normalized against: finite origin, finite positive size.
    pub fn has_area(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Position of `point` relative to the center, divided by the box size.
    /// Inside the box both axes fall in [-0.5, 0.5]. `None` for boxes without area.
    pub fn normalized_offset(&self, point: Vec2) -> Option<Vec2> {
        if !self.has_area() || !point.is_finite() {
            return None;
        }
        Some((point - self.center()) / self.size())
    }
}

/// Current viewport width and the layout mode derived from it.
#[derive(Debug, Clone)]
pub struct Viewport {
    width: f32,
    breakpoint: f32,
    mode: LayoutMode,
}

impl Viewport {
    /// Start in the regular layout until the first resize arrives.
    pub fn new(breakpoint: f32) -> Self {
        Self {
            width: f32::INFINITY,
            breakpoint,
            mode: LayoutMode::Regular,
        }
    }

    /// Record a new viewport width. Returns the new mode if it changed.
    pub fn resize(&mut self, width: f32) -> Option<LayoutMode> {
        if !width.is_finite() || width < 0.0 {
            return None;
        }
        self.width = width;
        let mode = LayoutMode::from_width(width, self.breakpoint);
        if mode != self.mode {
            self.mode = mode;
            Some(mode)
        } else {
            None
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
