use crate::constraints::{Dimensions, LayoutCtx};

/// The core trait every UI component implements.
///
/// A widget lays itself out within `ctx.constraints`, records its draw ops
/// into `ctx.ops`, and returns the size it occupied. Widgets hold no state
/// between passes, so `layout` runs again every frame.
///
/// Closures of the right shape are widgets too:
///
/// ```rust,ignore
/// let spacer = |ctx: &mut LayoutCtx<'_>| Dimensions::new(ctx.constraints.max.x, 8);
/// Stack::new(Direction::W).layout(ctx, &[StackChild::Stacked(&spacer)]);
/// ```
pub trait Widget {
    fn layout(&self, ctx: &mut LayoutCtx<'_>) -> Dimensions;
}

impl<F> Widget for F
where
    F: Fn(&mut LayoutCtx<'_>) -> Dimensions,
{
    #[inline]
    fn layout(&self, ctx: &mut LayoutCtx<'_>) -> Dimensions {
        self(ctx)
    }
}
