use crate::coords::Vec2;
use crate::scene::shapes::fill::FillCmd;
use crate::scene::shapes::rounded_rect::RoundedRect;

/// Backend-agnostic draw op.
///
/// Ops are replayed strictly in recording order. `PushClip` / `PopClip` pairs
/// bracket the fills they apply to; clips nest.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - handle the variant in [`DrawCmd::translate`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    PushClip(RoundedRect),
    Fill(FillCmd),
    PopClip,
}

impl DrawCmd {
    /// Returns the op with all geometry moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> DrawCmd {
        match self {
            DrawCmd::PushClip(rr) => DrawCmd::PushClip(rr.translate(offset)),
            DrawCmd::Fill(fill) => DrawCmd::Fill(fill.translate(offset)),
            DrawCmd::PopClip => DrawCmd::PopClip,
        }
    }
}
