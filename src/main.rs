//! Balloon Blast entry point
//!
//! Runs one headless match with the autopilot holding the pointer and prints
//! the final summary as JSON.
//!
//! Usage: `balloon-blast [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use balloon_blast::autopilot::Autopilot;
    use balloon_blast::renderer::TextRenderer;
    use balloon_blast::{MatchDriver, Settings};

    env_logger::init();
    log::info!("Balloon Blast (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            Settings::load(&path).with_context(|| format!("loading settings from {path}"))?
        }
        None => Settings::default(),
    };
    let field = settings.field().context("building play-field")?;
    let seed = settings.resolve_seed();

    let mut driver =
        MatchDriver::new(field, seed, settings.frame_rate).context("building match driver")?;
    if settings.autopilot {
        driver = driver.with_autopilot(Autopilot::new(settings.autopilot_speed));
    } else {
        log::warn!("Autopilot disabled, the pointer will stay centered");
    }

    let mut renderer = TextRenderer::new(settings.snapshot_every);
    let summary = driver.run_to_completion(&mut renderer);
    log::info!(
        "Match over after {} frames (seed {})",
        renderer.frames_drawn(),
        seed
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serializing summary")?
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly
}
