use crate::coords::{CornerRadii, Rect, Vec2};
use crate::scene::{DrawCmd, DrawList};

/// Rounded-rectangle clip region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    #[inline]
    pub const fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// Same radius on all four corners.
    #[inline]
    pub const fn uniform(rect: Rect, radius: f32) -> Self {
        Self::new(rect, CornerRadii::all(radius))
    }

    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self { rect: self.rect.translate(offset), radii: self.radii }
    }
}

impl DrawList {
    /// Begins a rounded-rect clip region. Must be paired with [`DrawList::pop_clip`].
    #[inline]
    pub fn push_clip_rounded_rect(&mut self, clip: RoundedRect) {
        self.push_clip(DrawCmd::PushClip(clip));
    }
}
