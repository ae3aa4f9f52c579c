//! Scene (draw-op stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw ops in paint order (back-to-front)
//! - scope fills with rounded-rect clip regions
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawList, FillIter};
pub use shapes::fill::FillCmd;
pub use shapes::rounded_rect::RoundedRect;
