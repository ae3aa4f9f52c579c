use vellum_engine::coords::Point;
use vellum_engine::scene::DrawList;
use vellum_engine::unit::{Dp, Metric};

use crate::painter::Painter;

// ── Constraints ───────────────────────────────────────────────────────────

/// Size bounds, in device pixels, handed from a layout to its children.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min: Point,
    pub max: Point,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Point) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Point) -> Self {
        Self { min: Point::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    ///
    /// `max` wins over `min` when the two conflict.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Point) -> Point {
        size.max(self.min).min(self.max)
    }

    /// Same max, min replaced.
    #[inline]
    #[must_use]
    pub fn with_min(self, min: Point) -> Self {
        Self { min, ..self }
    }
}

// ── Dimensions ────────────────────────────────────────────────────────────

/// Size a widget occupied, reported back to its parent layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub size: Point,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { size: Point::new(width, height) }
    }
}

// ── Interaction ───────────────────────────────────────────────────────────

/// Whether the current pass can receive input.
///
/// `Passive` marks static previews and disabled subtrees; widgets use it to
/// dim their active parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Interactive,
    Passive,
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Everything a widget needs for one layout pass.
///
/// Widgets read `constraints`, convert units through `metric`, and record
/// their draw ops into `ops`. The context is call-scoped: nothing in it
/// survives the pass.
pub struct LayoutCtx<'a> {
    pub constraints: Constraints,
    pub metric: Metric,
    pub interaction: Interaction,
    pub ops: &'a mut DrawList,
}

impl<'a> LayoutCtx<'a> {
    pub fn new(
        constraints: Constraints,
        metric: Metric,
        interaction: Interaction,
        ops: &'a mut DrawList,
    ) -> Self {
        Self { constraints, metric, interaction, ops }
    }

    /// Converts a device-independent length to device pixels.
    #[inline]
    pub fn px(&self, v: Dp) -> i32 {
        self.metric.px(v)
    }

    /// Drawing helpers over this context's op buffer.
    #[inline]
    pub fn painter(&mut self) -> Painter<'_> {
        Painter::new(self.ops)
    }

    /// A context for a child that records into `ops` under `constraints`.
    ///
    /// Metric and interaction are inherited.
    #[inline]
    pub fn child<'b>(&self, constraints: Constraints, ops: &'b mut DrawList) -> LayoutCtx<'b> {
        LayoutCtx { constraints, metric: self.metric, interaction: self.interaction, ops }
    }
}
