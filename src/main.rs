use tracing::info;
use tracing_subscriber::EnvFilter;

use escape_field::{SceneConfig, generate, save_png, show_surface};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut scene_path = None;
    let mut view = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--view" => view = true,
            _ => scene_path = Some(arg),
        }
    }

    let scene = match &scene_path {
        Some(path) => SceneConfig::load(path)?,
        None => {
            let scene = SceneConfig::default();
            scene.validate()?;
            scene
        }
    };
    let levels = scene.contour_levels()?;

    info!(
        x = ?scene.x, y = ?scene.y,
        max_iterations = scene.escape.max_iterations,
        recurrence = ?scene.escape.recurrence,
        "generating escape field"
    );

    let surface = generate(scene.x, scene.y, &scene.escape)?;
    let (rows, cols) = surface.field.shape();
    let bounded = surface.field.bounded_count();
    info!(rows, cols, bounded, "escape field ready");

    save_png(&surface, &levels, &scene.output)?;

    println!("{}x{} field, {} bounded cells -> {}", rows, cols, bounded, scene.output);

    if view {
        show_surface(&surface, &levels)?;
    }

    Ok(())
}
