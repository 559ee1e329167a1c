// File: crates/demo/src/main.rs
// Summary: Demo loads the engagement CSV once and writes box, bar and line charts as SVG files plus an HTML page.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chart_core::{render_dashboard, theme, DashboardConfig, LoadOptions, MalformedRows};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "engagement-demo", about = "Render social-media engagement charts to SVG")]
struct Args {
    /// Delimited input with Platform, PostType, Date and Likes columns.
    #[arg(default_value = "data/socialMedia.csv")]
    input: PathBuf,

    /// Directory receiving index.html and one SVG per chart.
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset: light, dark or high-contrast.
    #[arg(long, default_value = "light")]
    theme: String,

    /// Drop rows with unparseable Likes/Date instead of failing.
    #[arg(long)]
    skip_malformed: bool,

    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let opts = LoadOptions {
        delimiter: u8::try_from(args.delimiter).context("delimiter must be a single-byte character")?,
        malformed: if args.skip_malformed { MalformedRows::Skip } else { MalformedRows::Fail },
    };

    let dataset = match chart_core::load_path(&args.input, &opts) {
        Ok(ds) => ds,
        Err(e) => {
            // One report, no charts.
            error!(input = %args.input.display(), "error loading dataset: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(records = dataset.len(), skipped = dataset.skipped(), "loaded {}", args.input.display());

    let theme = theme::find(&args.theme);
    if !theme.name.eq_ignore_ascii_case(&args.theme) {
        warn!(requested = %args.theme, using = theme.name, "unknown theme");
    }
    let scenes = render_dashboard(&dataset, &theme, &DashboardConfig::default()).context("rendering charts")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for scene in &scenes {
        let out = args.out_dir.join(format!("{}.svg", scene.mount));
        write(&out, &chart_render_svg::render_svg(scene))?;
    }
    let page = args.out_dir.join("index.html");
    write(&page, &chart_render_svg::render_page("Social Media Engagement", &scenes))?;

    Ok(ExitCode::SUCCESS)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
