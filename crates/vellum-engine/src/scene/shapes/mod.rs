pub(crate) mod fill;
pub(crate) mod rounded_rect;
