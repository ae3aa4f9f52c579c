use vellum_engine::paint::Rgba8;

/// Colors a theme hands to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Accent for active elements such as the progress fill.
    pub primary: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self { primary: Rgba8::rgb(0x3f, 0x51, 0xb5) }
    }
}

/// Material-style theme shared by every widget constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary(mut self, color: Rgba8) -> Self { self.palette.primary = color; self }
}
