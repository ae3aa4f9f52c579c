use vellum_engine::coords::Rect;
use vellum_engine::paint::Rgba8;
use vellum_engine::unit::Dp;

use crate::constraints::{Dimensions, Interaction, LayoutCtx};
use crate::theme::Theme;
use crate::widget::Widget;
use crate::widgets::stack::{Direction, Stack, StackChild};

/// Bar thickness.
pub const BAR_HEIGHT: Dp = Dp(4.0);
/// Corner radius shared by track and fill.
pub const CORNER_RADIUS: Dp = Dp(2.0);
/// Alpha the accent is scaled by for the track.
pub const TRACK_ALPHA: u8 = 150;
/// Alpha the accent is scaled by for the fill in a passive pass.
pub const PASSIVE_FILL_ALPHA: u8 = 200;

/// A horizontal, determinate progress bar.
///
/// Spans the full available width. A translucent track is drawn first and
/// the fill is laid over its left part, proportional to `progress`.
///
/// # Example
/// ```rust,ignore
/// let dims = progress_bar(&theme, 40).layout(&mut ctx);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBarStyle {
    pub color: Rgba8,
    /// Percentage. Values outside `0..=100` are clamped at layout time.
    pub progress: i32,
}

/// Builds a progress bar in the theme's primary color.
pub fn progress_bar(theme: &Theme, progress: i32) -> ProgressBarStyle {
    ProgressBarStyle { color: theme.palette.primary, progress }
}

impl ProgressBarStyle {
    /// `progress` saturated to `0..=100`.
    #[inline]
    pub fn clamped_progress(&self) -> i32 {
        self.progress.clamp(0, 100)
    }

    /// Width of the fill for a bar `bar_width` pixels wide.
    #[inline]
    pub fn fill_width(&self, bar_width: f32) -> f32 {
        (bar_width / 100.0) * self.clamped_progress() as f32
    }

    /// Accent scaled to the translucent track alpha.
    #[inline]
    pub fn track_color(&self) -> Rgba8 {
        self.color.mul_alpha(TRACK_ALPHA)
    }

    /// Full accent when interactive, dimmed in a passive pass.
    #[inline]
    pub fn fill_color(&self, interaction: Interaction) -> Rgba8 {
        match interaction {
            Interaction::Interactive => self.color,
            Interaction::Passive => self.color.mul_alpha(PASSIVE_FILL_ALPHA),
        }
    }
}

impl Widget for ProgressBarStyle {
    fn layout(&self, ctx: &mut LayoutCtx<'_>) -> Dimensions {
        if self.clamped_progress() != self.progress {
            log::trace!("progress {} clamped to {}", self.progress, self.clamped_progress());
        }

        let bar_width = ctx.constraints.max.x as f32;
        let fill_width = self.fill_width(bar_width);
        let track_color = self.track_color();
        let fill_color = self.fill_color(ctx.interaction);

        let track = |ctx: &mut LayoutCtx<'_>| shade(ctx, bar_width, track_color);
        let fill = |ctx: &mut LayoutCtx<'_>| shade(ctx, fill_width, fill_color);

        Stack::new(Direction::W)
            .layout(ctx, &[StackChild::Stacked(&track), StackChild::Stacked(&fill)])
    }
}

/// One layer: a rounded bar `width` pixels wide at the origin.
fn shade(ctx: &mut LayoutCtx<'_>, width: f32, color: Rgba8) -> Dimensions {
    let height = ctx.px(BAR_HEIGHT);
    let radius = ctx.px(CORNER_RADIUS) as f32;

    ctx.painter()
        .fill_rounded_rect(Rect::from_size(width, height as f32), radius, color);

    Dimensions::new(width as i32, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraints;
    use vellum_engine::coords::{CornerRadii, Point, Vec2};
    use vellum_engine::scene::{DrawCmd, DrawList, FillCmd, RoundedRect};
    use vellum_engine::unit::Metric;

    const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

    fn red_bar(progress: i32) -> ProgressBarStyle {
        progress_bar(&Theme::new().with_primary(RED), progress)
    }

    fn render_with(
        bar: ProgressBarStyle,
        width: i32,
        metric: Metric,
        interaction: Interaction,
    ) -> (Dimensions, DrawList) {
        let mut ops = DrawList::new();
        let mut ctx = LayoutCtx::new(
            Constraints::loose(Point::new(width, 1000)),
            metric,
            interaction,
            &mut ops,
        );
        let dims = bar.layout(&mut ctx);
        (dims, ops)
    }

    fn render(bar: ProgressBarStyle, width: i32, interaction: Interaction) -> (Dimensions, DrawList) {
        render_with(bar, width, Metric::default(), interaction)
    }

    fn fills(ops: &DrawList) -> Vec<FillCmd> {
        ops.fills().map(|(f, _)| *f).collect()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn constructor_copies_primary_and_keeps_raw_progress() {
        let theme = Theme::new();
        let bar = progress_bar(&theme, -7);
        assert_eq!(bar.color, theme.palette.primary);
        assert_eq!(bar.progress, -7);
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn progress_is_saturated_to_percent_range() {
        let cases = [
            (-50, 0),
            (-1, 0),
            (0, 0),
            (1, 1),
            (50, 50),
            (99, 99),
            (100, 100),
            (101, 100),
            (1000, 100),
            (i32::MIN, 0),
            (i32::MAX, 100),
        ];
        for (input, expected) in cases {
            assert_eq!(red_bar(input).clamped_progress(), expected, "progress {}", input);
        }
    }

    // ── fill width ────────────────────────────────────────────────────────

    #[test]
    fn fill_width_endpoints() {
        assert_eq!(red_bar(0).fill_width(200.0), 0.0);
        assert_eq!(red_bar(100).fill_width(200.0), 200.0);
        assert_eq!(red_bar(-3).fill_width(200.0), 0.0);
        assert_eq!(red_bar(250).fill_width(200.0), 200.0);
    }

    #[test]
    fn fill_width_is_monotonic() {
        let mut prev = f32::NEG_INFINITY;
        for p in -10..=110 {
            let w = red_bar(p).fill_width(333.0);
            assert!(w >= prev, "fill width decreased at progress {}", p);
            prev = w;
        }
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn track_and_fill_alpha() {
        let bar = red_bar(10);
        assert_eq!(bar.track_color().a, 150);
        assert_eq!(bar.fill_color(Interaction::Interactive).a, 255);
        assert_eq!(bar.fill_color(Interaction::Passive).a, 200);
    }

    #[test]
    fn alpha_scales_translucent_accent() {
        let bar = ProgressBarStyle { color: Rgba8::new(0, 0, 255, 100), progress: 10 };
        // 100 * 150 / 255 = 58.8 -> 58
        assert_eq!(bar.track_color().a, 58);
        // 100 * 200 / 255 = 78.4 -> 78
        assert_eq!(bar.fill_color(Interaction::Passive).a, 78);
        assert_eq!(bar.fill_color(Interaction::Interactive).a, 100);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn quarter_progress_scenario_interactive() {
        let (dims, ops) = render(red_bar(25), 200, Interaction::Interactive);

        assert_eq!(dims, Dimensions::new(200, 4));
        assert_eq!(
            fills(&ops),
            vec![
                FillCmd::new(Rect::from_size(200.0, 4.0), Rgba8::new(150, 0, 0, 150)),
                FillCmd::new(Rect::from_size(50.0, 4.0), RED),
            ]
        );
    }

    #[test]
    fn quarter_progress_scenario_passive() {
        let (_, ops) = render(red_bar(25), 200, Interaction::Passive);
        let f = fills(&ops);
        assert_eq!(f[0].color.a, 150);
        assert_eq!(f[1].rect.size.x, 50.0);
        assert_eq!(f[1].color, Rgba8::new(200, 0, 0, 200));
    }

    #[test]
    fn each_layer_is_clip_fill_pop() {
        let (_, ops) = render(red_bar(25), 200, Interaction::Interactive);
        let track = Rect::from_size(200.0, 4.0);
        let fill = Rect::from_size(50.0, 4.0);
        assert_eq!(
            ops.items(),
            &[
                DrawCmd::PushClip(RoundedRect::new(track, CornerRadii::all(2.0))),
                DrawCmd::Fill(FillCmd::new(track, Rgba8::new(150, 0, 0, 150))),
                DrawCmd::PopClip,
                DrawCmd::PushClip(RoundedRect::new(fill, CornerRadii::all(2.0))),
                DrawCmd::Fill(FillCmd::new(fill, RED)),
                DrawCmd::PopClip,
            ]
        );
        assert_eq!(ops.clip_depth(), 0);
    }

    #[test]
    fn dimensions_report_full_width_for_any_progress() {
        for p in [-50, 0, 5, 50, 100, 1000] {
            let (dims, _) = render(red_bar(p), 321, Interaction::Interactive);
            assert_eq!(dims.size.x, 321, "progress {}", p);
        }
    }

    #[test]
    fn zero_progress_still_draws_full_track() {
        let (_, ops) = render(red_bar(0), 120, Interaction::Interactive);
        let f = fills(&ops);
        assert_eq!(f[0].rect.size.x, 120.0);
        assert_eq!(f[1].rect.size.x, 0.0);
    }

    #[test]
    fn geometry_follows_metric() {
        let (dims, ops) = render_with(red_bar(50), 300, Metric::new(2.0), Interaction::Interactive);
        assert_eq!(dims, Dimensions::new(300, 8));

        let (fill, clip) = ops.fills().nth(1).unwrap();
        assert_eq!(fill.rect, Rect::from_size(150.0, 8.0));
        assert_eq!(clip.unwrap().radii, CornerRadii::all(4.0));
    }

    #[test]
    fn layers_are_left_aligned() {
        let (_, ops) = render(red_bar(33), 90, Interaction::Interactive);
        for (fill, _) in ops.fills() {
            assert_eq!(fill.rect.origin, Vec2::zero());
        }
    }

    #[test]
    fn render_is_idempotent() {
        let bar = red_bar(42);
        let (d1, ops1) = render(bar, 250, Interaction::Passive);
        let (d2, ops2) = render(bar, 250, Interaction::Passive);
        assert_eq!(d1, d2);
        assert_eq!(ops1, ops2);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let bar = red_bar(1000);
        let _ = render(bar, 50, Interaction::Interactive);
        assert_eq!(bar.progress, 1000);
        assert_eq!(bar.color, RED);
    }
}
