//! Vellum engine crate.
//!
//! Geometry, colors, units and the retained draw-op buffer shared by the UI
//! layer and any backend that replays recorded ops.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod unit;
