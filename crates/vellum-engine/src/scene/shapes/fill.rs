use crate::coords::{Rect, Vec2};
use crate::paint::Rgba8;
use crate::scene::{DrawCmd, DrawList};

/// Solid-color fill bounded by `rect`, subject to the active clip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillCmd {
    pub rect: Rect,
    pub color: Rgba8,
}

impl FillCmd {
    #[inline]
    pub const fn new(rect: Rect, color: Rgba8) -> Self {
        Self { rect, color }
    }

    #[inline]
    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self { rect: self.rect.translate(offset), color: self.color }
    }
}

impl DrawList {
    /// Records a solid fill of `rect`.
    #[inline]
    pub fn push_fill(&mut self, rect: Rect, color: Rgba8) {
        self.push(DrawCmd::Fill(FillCmd::new(rect, color)));
    }
}
