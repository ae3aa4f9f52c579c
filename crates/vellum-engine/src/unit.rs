//! Device-independent lengths and their conversion to device pixels.

/// Device-independent pixels. One `Dp` is one device pixel at scale 1.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

/// Conversion factor from device-independent units to device pixels.
///
/// A zero or non-finite factor is treated as `1.0`, so a default-constructed
/// or corrupted metric still produces usable sizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Metric {
    pub px_per_dp: f32,
}

impl Default for Metric {
    fn default() -> Self {
        Self { px_per_dp: 1.0 }
    }
}

impl Metric {
    #[inline]
    pub const fn new(px_per_dp: f32) -> Self {
        Self { px_per_dp }
    }

    /// Converts `v` to whole device pixels, rounding half away from zero.
    ///
    /// Saturates at the `i32` bounds.
    #[inline]
    pub fn px(self, v: Dp) -> i32 {
        let scale = self.px_per_dp;
        let scale = if scale == 0.0 || !scale.is_finite() { 1.0 } else { scale };
        // `as` saturates and maps NaN to 0.
        (scale * v.0).round() as i32
    }
}
