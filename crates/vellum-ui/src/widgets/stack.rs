use vellum_engine::coords::Point;
use vellum_engine::scene::DrawList;

use crate::constraints::{Dimensions, LayoutCtx};
use crate::widget::Widget;

// ── Direction ─────────────────────────────────────────────────────────────

/// Compass alignment of a child inside a larger box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    NW,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    Center,
}

impl Direction {
    /// Offset that places a child of size `child` inside `outer`.
    ///
    /// Centering uses truncating integer division.
    pub fn offset(self, outer: Point, child: Point) -> Point {
        use Direction::*;

        let x = match self {
            N | S | Center => (outer.x - child.x) / 2,
            NE | E | SE => outer.x - child.x,
            NW | W | SW => 0,
        };
        let y = match self {
            W | Center | E => (outer.y - child.y) / 2,
            SW | S | SE => outer.y - child.y,
            NW | N | NE => 0,
        };
        Point::new(x, y)
    }
}

// ── StackChild ────────────────────────────────────────────────────────────

/// A child of a [`Stack`].
#[derive(Clone, Copy)]
pub enum StackChild<'a> {
    /// Sized by its own content, with no minimum.
    Stacked(&'a dyn Widget),
    /// Laid out after all stacked children, with a minimum of their combined size.
    Expanded(&'a dyn Widget),
}

impl StackChild<'_> {
    #[inline]
    fn is_expanded(&self) -> bool {
        matches!(self, StackChild::Expanded(_))
    }

    #[inline]
    fn widget(&self) -> &dyn Widget {
        match *self {
            StackChild::Stacked(w) | StackChild::Expanded(w) => w,
        }
    }
}

// ── Stack ─────────────────────────────────────────────────────────────────

/// Overlays its children in one box.
///
/// Children are painted in declaration order (first = bottom, last = top).
/// The stack is as large as its largest child, kept within the incoming
/// constraints; each child is then placed by `alignment`.
///
/// # Example
/// ```rust,ignore
/// Stack::new(Direction::W).layout(ctx, &[
///     StackChild::Stacked(&track),
///     StackChild::Stacked(&fill),
/// ])
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stack {
    pub alignment: Direction,
}

impl Stack {
    pub fn new(alignment: Direction) -> Self {
        Self { alignment }
    }

    pub fn layout(&self, ctx: &mut LayoutCtx<'_>, children: &[StackChild<'_>]) -> Dimensions {
        // Each child records into its own list so it can be moved once the
        // stack size is known.
        let mut recorded: Vec<Option<(DrawList, Point)>> = vec![None; children.len()];
        let mut max_size = Point::zero();

        let stacked_cs = ctx.constraints.with_min(Point::zero());
        for (slot, child) in recorded.iter_mut().zip(children) {
            if child.is_expanded() {
                continue;
            }
            let mut ops = DrawList::new();
            let dims = child.widget().layout(&mut ctx.child(stacked_cs, &mut ops));
            max_size = max_size.max(dims.size);
            *slot = Some((ops, dims.size));
        }

        for (slot, child) in recorded.iter_mut().zip(children) {
            if !child.is_expanded() {
                continue;
            }
            let mut ops = DrawList::new();
            let expanded_cs = ctx.constraints.with_min(max_size);
            let dims = child.widget().layout(&mut ctx.child(expanded_cs, &mut ops));
            max_size = max_size.max(dims.size);
            *slot = Some((ops, dims.size));
        }

        let size = ctx.constraints.constrain(max_size);
        for (ops, child_size) in recorded.iter().flatten() {
            let p = self.alignment.offset(size, *child_size);
            ctx.ops.append(ops, p.to_vec2());
        }

        Dimensions { size }
    }
}
