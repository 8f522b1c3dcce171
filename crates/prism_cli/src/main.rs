//! Prism command line renderer.
//!
//! Without a scene file the built-in demo scene is rendered. Set `RUST_LOG`
//! to `debug` to see per-column progress.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_scene, SceneDescription};
use prism_renderer::{render_frame, Renderer};

const DEFAULT_OUTPUT: &str = "output.png";

/// Prism command line interface arguments.
#[derive(Parser, Debug, PartialEq)]
#[clap(
    name = "prism",
    version,
    about = "Render a scene with a single-bounce ray tracer."
)]
struct Args {
    /// Scene description (JSON). Renders the demo scene if omitted.
    scene: Option<PathBuf>,

    /// Where to write the rendered PNG.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, rendering the demo scene");
            SceneDescription::demo()
        }
    };

    let renderer = Renderer::from_scene(&scene).context("Failed to build renderer")?;
    let image = render_frame(&renderer, &scene.config);

    image
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
