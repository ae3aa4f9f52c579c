use vellum_ui::prelude::*;

/// Vertical gap between previewed bars.
const ROW_GAP: Dp = Dp(8.0);

/// What to lay out in one preview pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub progress: Vec<i32>,
    pub width: i32,
    pub metric: Metric,
    pub interaction: Interaction,
    pub theme: Theme,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            progress: vec![0, 25, 50, 100],
            width: 320,
            metric: Metric::default(),
            interaction: Interaction::Interactive,
            theme: Theme::default(),
        }
    }
}

/// Result of a preview pass.
#[derive(Debug, Default)]
pub struct Preview {
    /// Size reported by each bar, in input order.
    pub rows: Vec<Dimensions>,
    /// All bars, stacked top to bottom.
    pub ops: DrawList,
}

/// Lays out one progress bar per configured value, one below the other.
pub fn render_preview(config: &PreviewConfig) -> Preview {
    let mut preview = Preview::default();
    let gap = config.metric.px(ROW_GAP);
    let mut y: i32 = 0;

    for &progress in &config.progress {
        let mut row_ops = DrawList::new();
        let mut ctx = LayoutCtx::new(
            Constraints::loose(Point::new(config.width, i32::MAX)),
            config.metric,
            config.interaction,
            &mut row_ops,
        );
        let dims = progress_bar(&config.theme, progress).layout(&mut ctx);
        log::debug!("bar {}% -> {}x{} at y={}", progress, dims.size.x, dims.size.y, y);

        preview.ops.append(&row_ops, Vec2::new(0.0, y as f32));
        preview.rows.push(dims);
        y = y.saturating_add(dims.size.y).saturating_add(gap);
    }

    preview
}
