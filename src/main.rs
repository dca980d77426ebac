use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use cutout_canvas::Config;
use cutout_canvas::draw::{ImageCache, RenderStyle, render_canvas};
use cutout_canvas::host::CanvasHost;
use cutout_canvas::input::SessionSettings;
use cutout_canvas::replay::{Replay, Script};
use cutout_canvas::ui;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CUTOUT_CANVAS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "cutout-canvas")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Replay pointer gestures against a layered cutout canvas"
)]
struct Cli {
    /// Gesture script (TOML) with the layer fixture and events to replay
    #[arg(value_name = "SCRIPT", required_unless_present = "init_config")]
    script: Option<PathBuf>,

    /// Render the final frame to a PNG file
    #[arg(long, short = 'r', value_name = "PNG")]
    render: Option<PathBuf>,

    /// Configuration file to use instead of ~/.config/cutout-canvas/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory layer images are resolved against (default: the script's directory)
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Write the example configuration file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["script", "render"])]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(script_path) = cli.script.as_deref() else {
        return Err(anyhow::anyhow!("No gesture script given"));
    };
    let script = Script::load(script_path)?;
    let replay = script.run(SessionSettings::from(&config));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for effect in replay.store.log() {
        let line = serde_json::to_string(effect).context("Failed to encode callback")?;
        writeln!(out, "{line}").context("Failed to write callback")?;
    }
    out.flush().context("Failed to flush output")?;

    log::info!(
        "Replay finished: {} callback(s), zoom {}, gesture {}",
        replay.store.log().len(),
        ui::zoom_label(replay.session.camera()),
        replay.session.interaction().label()
    );

    if let Some(png) = &cli.render {
        let assets = match &cli.assets {
            Some(dir) => dir.clone(),
            None => script_dir(script_path),
        };
        render_png(&replay, &config, &assets, png)?;
    }

    Ok(())
}

fn script_dir(script: &Path) -> PathBuf {
    script
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Draws the final canvas state, plus the zoom indicator when enabled.
fn render_png(replay: &Replay, config: &Config, assets: &Path, output: &Path) -> Result<()> {
    let width = replay.viewport.width as i32;
    let height = replay.viewport.height as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create render surface")?;
    let ctx = cairo::Context::new(&surface).context("Failed to create render context")?;

    let mut images = ImageCache::new(assets);
    let style = RenderStyle::from(config);
    render_canvas(
        &ctx,
        &replay.session,
        &replay.store.view(),
        &mut images,
        &style,
        width as f64,
        height as f64,
    );

    if config.ui.show_zoom_indicator {
        ui::render_zoom_indicator(
            &ctx,
            replay.session.camera(),
            config.ui.zoom_indicator_position,
            &config.ui.zoom_indicator_style,
            width as f64,
            height as f64,
        );
    }
    drop(ctx);

    let mut file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", output.display()))?;
    log::info!("Rendered {}x{} frame to {}", width, height, output.display());
    Ok(())
}
