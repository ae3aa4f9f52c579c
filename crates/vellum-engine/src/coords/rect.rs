use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle anchored at the origin with the given extent.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Returns this rectangle moved by `offset`. Size is unchanged.
    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }
}
