//! # Skeleton Demo
//!
//! Demonstrates:
//! - Texture loading into the registry (file or generated checkerboard)
//! - Posing a skeleton per frame and drawing it with `SpineRenderer`
//! - Render options from the command line (double-faced, wireframe, layering)
//! - Reading the per-frame report
//!
//! Draws into the recording backend, so it runs headless.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin skeleton_demo -- --frames 3 --wireframe
//! ```

use std::path::PathBuf;

use clap::Parser;
use rigdraw::{RenderConfig, SpineRenderer};
use rigdraw_core::math::vec3;
use rigdraw_demos::{checker_atlas, pose, puppet};
use rigdraw_graphics::{DummyBackend, FilterMode, GraphicsError};

/// Draw a posed puppet for a number of frames.
#[derive(Parser, Debug)]
#[command(name = "skeleton_demo", about = "Headless skeleton drawing demo", version)]
struct Args {
    /// Number of frames to draw.
    #[arg(long, default_value = "5")]
    frames: u32,

    /// Atlas image to load instead of the generated checkerboard.
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Also draw the back face of regions.
    #[arg(long)]
    double_faced: bool,

    /// Outline mesh triangles.
    #[arg(long)]
    wireframe: bool,

    /// Depth step between consecutive slots.
    #[arg(long, default_value = "0")]
    layer_spacing: f32,

    /// Depth bias of the first slot, before the first step.
    #[arg(long, default_value = "0")]
    layer_base: f32,

    /// Use a backend without quad support.
    #[arg(long)]
    triangles_only: bool,

    /// Mirror the skeleton horizontally.
    #[arg(long)]
    mirror: bool,

    /// Sample textures with nearest-neighbor filtering.
    #[arg(long)]
    nearest: bool,

    /// Scratch buffer capacity in vertices.
    #[arg(long, default_value = "2048")]
    max_vertices: usize,
}

impl From<&Args> for RenderConfig {
    fn from(args: &Args) -> Self {
        RenderConfig::default()
            .with_double_faced(args.double_faced)
            .with_wireframe(args.wireframe)
            .with_layer_spacing(args.layer_base, args.layer_spacing)
            .with_max_vertices_per_attachment(args.max_vertices)
            .with_texture_filter(if args.nearest {
                FilterMode::Nearest
            } else {
                FilterMode::Linear
            })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("rigdraw skeleton demo v{}", rigdraw_demos::VERSION);
    if let Err(e) = run(&args) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GraphicsError> {
    let backend = if args.triangles_only {
        DummyBackend::triangles_only()
    } else {
        DummyBackend::new()
    };
    let mut renderer = SpineRenderer::new(backend, RenderConfig::from(args));

    let atlas = match &args.texture {
        Some(path) => renderer.load_texture(path)?,
        None => renderer.load_texture_image("checker", &checker_atlas(64, 8))?,
    };

    let mut skeleton = puppet(atlas);
    if args.mirror {
        skeleton.scale_x = -skeleton.scale_x;
    }

    for frame in 0..args.frames {
        pose(&mut skeleton, frame);
        renderer.backend_mut().clear();

        let report = renderer.draw_skeleton(&skeleton, vec3(400.0, 300.0, 0.0));

        let backend = renderer.backend();
        let vertices: usize = backend
            .batches()
            .iter()
            .map(|batch| batch.vertices.len())
            .sum();
        log::info!(
            "Frame {}: {} slots drawn, {} skipped, {} batches, {} vertices, {} outlines",
            frame,
            report.slots_drawn,
            report.slots_skipped,
            report.submissions,
            vertices,
            backend.outline_count()
        );
        for diagnostic in &report.diagnostics {
            log::debug!(
                "  slot {:?} at draw index {}: {}",
                diagnostic.slot_name,
                diagnostic.draw_index,
                diagnostic.error
            );
        }
    }

    renderer.release_textures();
    Ok(())
}
