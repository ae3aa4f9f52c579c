use std::slice;

use crate::coords::Vec2;

use super::{DrawCmd, FillCmd, RoundedRect};

/// Recorded draw-op stream for a layout pass.
///
/// Ops are kept in recording order, which is also paint order (back-to-front).
///
/// `push()` is O(1).
///
/// # Clipping
///
/// Use [`push_clip_rounded_rect`](Self::push_clip_rounded_rect) /
/// [`pop_clip`](Self::pop_clip) to scope fills to a clip region. Clips nest.
///
/// ```ignore
/// ops.push_clip_rounded_rect(RoundedRect::uniform(rect, 2.0));
/// ops.push_fill(rect, color);
/// ops.pop_clip();
/// ```
///
/// # Recording
///
/// A child can record into its own `DrawList`, which the parent later replays
/// at an offset with [`append`](Self::append). This is how layouts position
/// children whose size is only known after they were drawn.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    /// Number of `PushClip` ops not yet closed by a `PopClip`.
    clip_depth: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns ops in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of currently open clip regions.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Appends a raw op.
    ///
    /// Prefer the typed helpers; clip ops pushed here are not tracked.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub(crate) fn push_clip(&mut self, cmd: DrawCmd) {
        self.clip_depth += 1;
        self.items.push(cmd);
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching push. In release builds
    /// an unmatched pop is ignored.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(self.clip_depth > 0, "pop_clip called without matching push_clip");
        if self.clip_depth > 0 {
            self.clip_depth -= 1;
            self.items.push(DrawCmd::PopClip);
        }
    }

    /// Replays every op of `other` into `self`, translated by `offset`.
    ///
    /// `other` should have balanced clips; it is left unchanged.
    pub fn append(&mut self, other: &DrawList, offset: Vec2) {
        debug_assert_eq!(other.clip_depth, 0, "appending a DrawList with open clips");
        self.items.reserve(other.items.len());
        if offset == Vec2::zero() {
            self.items.extend_from_slice(&other.items);
        } else {
            self.items.extend(other.items.iter().map(|cmd| cmd.translate(offset)));
        }
        self.clip_depth += other.clip_depth;
    }

    /// Iterates fills in paint order together with their innermost active clip.
    pub fn fills(&self) -> FillIter<'_> {
        FillIter { items: self.items.iter(), clips: Vec::new() }
    }
}

/// Iterator returned by [`DrawList::fills`].
pub struct FillIter<'a> {
    items: slice::Iter<'a, DrawCmd>,
    clips: Vec<&'a RoundedRect>,
}

impl<'a> Iterator for FillIter<'a> {
    type Item = (&'a FillCmd, Option<&'a RoundedRect>);

    fn next(&mut self) -> Option<Self::Item> {
        for cmd in self.items.by_ref() {
            match cmd {
                DrawCmd::PushClip(rr) => self.clips.push(rr),
                DrawCmd::PopClip => {
                    self.clips.pop();
                }
                DrawCmd::Fill(fill) => return Some((fill, self.clips.last().copied())),
            }
        }
        None
    }
}
