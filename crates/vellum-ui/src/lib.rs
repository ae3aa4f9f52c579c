//! Vellum UI — material-style widgets laid out over `vellum-engine` draw ops.
//!
//! Widgets are plain values built fresh every frame. A layout pass hands each
//! one a [`LayoutCtx`](constraints::LayoutCtx); the widget records draw ops
//! into it and returns the [`Dimensions`](constraints::Dimensions) it used.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vellum_ui::prelude::*;
//!
//! let theme = Theme::new();
//! let mut ops = DrawList::new();
//! let mut ctx = LayoutCtx::new(
//!     Constraints::loose(Point::new(320, 480)),
//!     Metric::new(2.0),
//!     Interaction::Interactive,
//!     &mut ops,
//! );
//! let dims = progress_bar(&theme, 60).layout(&mut ctx);
//! // Replay `ops` in your backend.
//! ```

pub mod constraints;
pub mod painter;
pub mod theme;
pub mod widget;
pub mod widgets;

/// Everything you need to lay out widgets — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Dimensions, Interaction, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::theme::{Palette, Theme};
    pub use crate::widget::Widget;
    pub use crate::widgets::{
        progress::{ProgressBarStyle, progress_bar},
        stack::{Direction, Stack, StackChild},
    };

    // Re-export the engine primitives everyone needs.
    pub use vellum_engine::coords::{CornerRadii, Point, Rect, Vec2};
    pub use vellum_engine::paint::Rgba8;
    pub use vellum_engine::scene::{DrawCmd, DrawList, FillCmd, RoundedRect};
    pub use vellum_engine::unit::{Dp, Metric};
}
