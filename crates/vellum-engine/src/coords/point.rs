use super::Vec2;

/// Integer point in device pixels.
///
/// Used for layout sizes and constraints, where fractional pixels are not
/// meaningful.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_and_min_are_component_wise() {
        let a = Point::new(3, 10);
        let b = Point::new(7, 2);
        assert_eq!(a.max(b), Point::new(7, 10));
        assert_eq!(a.min(b), Point::new(3, 2));
    }

    #[test]
    fn to_vec2_converts_exactly() {
        assert_eq!(Point::new(-4, 12).to_vec2(), Vec2::new(-4.0, 12.0));
    }
}
