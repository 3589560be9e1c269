//! Braitenberg vehicles entry point
//!
//! Seeds the simulation, opens the window and runs the frame loop.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use braitenberg::consts::WINDOW_TITLE;
use braitenberg::platform::DesktopFrontend;
use braitenberg::sim::SimState;
use braitenberg::{App, AppError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("braitenberg: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let sim = SimState::new(seed);

    log::info!("Braitenberg vehicles starting with seed: {}", seed);
    match serde_json::to_string(&sim.config) {
        Ok(json) => log::info!("World config: {}", json),
        Err(e) => log::warn!("Could not serialize world config: {}", e),
    }
    for v in &sim.vehicles {
        log::info!(
            "Spawned {} ({:?}) at ({:.1}, {:.1}) heading {:.2}",
            v.label,
            v.behavior,
            v.pos.x,
            v.pos.y,
            v.heading
        );
    }

    let frontend = DesktopFrontend::open(WINDOW_TITLE, &sim.config)?;
    let summary = App::new(sim, frontend).run()?;

    log::info!("Stopped after {} frames", summary.frames);
    Ok(())
}
