//! Vellum studio - headless widget preview.
//!
//! Lays out progress bars into a draw-op buffer and logs every recorded op.

mod preview;

use anyhow::{Context, Result, bail};
use clap::Parser;
use vellum_engine::logging::{LoggingConfig, init_logging};
use vellum_engine::paint::Rgba8;
use vellum_engine::scene::DrawCmd;
use vellum_engine::unit::Metric;
use vellum_ui::prelude::{Interaction, Theme};

use crate::preview::{PreviewConfig, render_preview};

#[derive(Parser, Debug)]
#[command(name = "vellum-studio")]
#[command(about = "Preview vellum progress bars as draw ops", long_about = None)]
struct Args {
    /// Progress percentage; repeat for several bars (default: 0 25 50 100)
    #[arg(long = "progress", allow_negative_numbers = true)]
    progress: Vec<i32>,

    /// Available width in device pixels
    #[arg(long, default_value_t = 320, allow_negative_numbers = true)]
    width: i32,

    /// Device pixels per dp
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Render as a passive (non-interactive) pass
    #[arg(long)]
    passive: bool,

    /// Accent color, #rrggbb or #rrggbbaa
    #[arg(long)]
    primary: Option<String>,

    /// Log filter, env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<PreviewConfig> {
        if self.width < 0 {
            bail!("--width must not be negative, got {}", self.width);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            bail!("--scale must be a positive number, got {}", self.scale);
        }

        let mut config = PreviewConfig {
            width: self.width,
            metric: Metric::new(self.scale),
            interaction: if self.passive { Interaction::Passive } else { Interaction::Interactive },
            ..PreviewConfig::default()
        };
        if !self.progress.is_empty() {
            config.progress = self.progress;
        }
        if let Some(hex) = self.primary {
            let color = Rgba8::from_hex(&hex).context("parsing --primary")?;
            config.theme = Theme::new().with_primary(color);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let mut args = Args::parse();

    let logging = match args.log.take() {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    };
    init_logging(logging);

    let config = args.into_config()?;
    log::info!(
        "previewing {} bar(s) at width {} (scale {}, {:?})",
        config.progress.len(),
        config.width,
        config.metric.px_per_dp,
        config.interaction
    );

    let preview = render_preview(&config);
    for (i, cmd) in preview.ops.items().iter().enumerate() {
        match cmd {
            DrawCmd::PushClip(rr) => log::info!(
                "{:>3} clip  {:?} r={}",
                i,
                rr.rect,
                rr.radii.top_left
            ),
            DrawCmd::Fill(fill) => log::info!("{:>3} fill  {:?} {}", i, fill.rect, fill.color),
            DrawCmd::PopClip => log::info!("{:>3} pop", i),
        }
    }
    for (progress, dims) in config.progress.iter().zip(&preview.rows) {
        log::info!("{:>4}% -> {}x{}", progress, dims.size.x, dims.size.y);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vellum-studio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_preview_defaults() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn repeated_progress_and_negative_values() {
        let config = parse(&["--progress", "-5", "--progress", "130"]).into_config().unwrap();
        assert_eq!(config.progress, vec![-5, 130]);
    }

    #[test]
    fn passive_and_primary() {
        let config = parse(&["--passive", "--primary", "#ff000080"]).into_config().unwrap();
        assert_eq!(config.interaction, Interaction::Passive);
        assert_eq!(config.theme.palette.primary, Rgba8::new(255, 0, 0, 0x80));
    }

    #[test]
    fn bad_primary_is_an_error() {
        let err = parse(&["--primary", "blue"]).into_config().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid color"));
    }

    #[test]
    fn huge_scale_is_accepted_and_renders() {
        let config = parse(&["--scale", "2e8"]).into_config().unwrap();
        assert_eq!(render_preview(&config).rows.len(), 4);
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        assert!(parse(&["--scale", "0"]).into_config().is_err());
        assert!(parse(&["--width", "-1"]).into_config().is_err());
    }
}
