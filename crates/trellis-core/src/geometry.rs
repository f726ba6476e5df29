// crates/trellis-core/src/geometry.rs
use glam::Vec2;

/// Primary layout direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Maps a width/height pair to (main, cross) extents for this axis.
    ///
    /// The mapping is its own inverse, so the same call converts a
    /// (main, cross) pair back to width/height.
    pub fn to_main_cross(self, size: Vec2) -> Vec2 {
        match self {
            Axis::Horizontal => size,
            Axis::Vertical => Vec2::new(size.y, size.x),
        }
    }

    /// Maps (main, cross) extents back to width/height.
    pub fn from_main_cross(self, main_cross: Vec2) -> Vec2 {
        self.to_main_cross(main_cross)
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Reading direction along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Growth direction along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalDirection {
    Up,
    #[default]
    Down,
}

/// Edge insets for deflating a constraint space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Insets {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }

    pub fn all(value: f32) -> Self {
        Self { top: value, bottom: value, left: value, right: value }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Combined left + right inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top + bottom inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }
}

/// Color utilities
pub mod color {
    use glam::Vec4;

    pub const TRANSPARENT: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
    pub const GRAY: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);

    /// Unpacks an 0xRRGGBBAA word into normalized components.
    pub fn from_hex(hex: u32) -> Vec4 {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Vec4::new(r, g, b, a)
    }
}
