//! Paint model shared between the UI layer and backends.
//!
//! Colors are 8 bits per channel, straight alpha. Alpha scaling is a plain
//! per-channel multiply, not a color-space-accurate blend.

mod color;

pub use color::{ColorParseError, Rgba8};
