use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel::CarouselConfig;
use carousel::constants::*;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod page;
mod slide;
mod texture_loader;

use crate::page::Page;

/// Landing page testimonial carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file with the testimonials to show (built-in set when omitted)
    #[arg(short, long)]
    testimonials: Option<PathBuf>,

    /// Auto-rotate period in milliseconds, overrides the file
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    period_ms: Option<u64>,

    /// Leave out the previous/next buttons
    #[arg(long)]
    no_controls: bool,

    /// Shuffle the testimonial order at startup
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut config = match &args.testimonials {
        Some(path) => CarouselConfig::from_path(path)
            .with_context(|| format!("loading testimonials from {}", path.display()))?,
        None => CarouselConfig::default(),
    };
    if let Some(ms) = args.period_ms {
        config.auto_rotate_ms = ms;
    }
    if args.shuffle {
        config.shuffle();
    }
    info!(count = config.testimonials.len(), period_ms = config.auto_rotate_ms, "testimonials ready");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Elevate Digital")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut page = Page::new(&mut rl, &thread, config, !args.no_controls)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        page.update(&rl, dt);

        let mut d = rl.begin_drawing(&thread);
        page.draw(&mut d);
    }

    Ok(())
}
