use vellum_engine::coords::Rect;
use vellum_engine::paint::Rgba8;
use vellum_engine::scene::{DrawList, RoundedRect};

/// Drawing surface handed out by [`LayoutCtx::painter`](crate::constraints::LayoutCtx::painter).
///
/// Wraps the engine's `DrawList` with shape-level helpers so widgets never
/// open or close clip regions by hand.
pub struct Painter<'a> {
    ops: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(ops: &'a mut DrawList) -> Self {
        Self { ops }
    }

    /// Solid axis-aligned rectangle, subject only to enclosing clips.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push_fill(rect, color);
    }

    /// Rounded rectangle: a uniform-radius clip region, a fill bounded by
    /// `rect`, then the clip is closed.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba8) {
        self.ops.push_clip_rounded_rect(RoundedRect::uniform(rect, radius));
        self.ops.push_fill(rect, color);
        self.ops.pop_clip();
    }
}
