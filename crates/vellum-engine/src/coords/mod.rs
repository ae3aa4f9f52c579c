//! Coordinate and geometry types shared across the UI layer and backends.
//!
//! Canonical CPU space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod point;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use point::Point;
pub use rect::Rect;
pub use vec2::Vec2;
