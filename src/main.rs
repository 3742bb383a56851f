//! Kaleidoscope entry point
//!
//! Headless runner: builds the controller from settings, animates for the
//! configured duration while building a frame per state change, then prints
//! the last frame as JSON. A GUI shell drives the same `Controller`.
//!
//! Usage: `kaleidoscope [settings.json]`

use std::process::ExitCode;
use std::time::{Duration, Instant};

use kaleidoscope::renderer::Frame;
use kaleidoscope::{Controller, Settings, SettingsError};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Kaleidoscope (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SettingsError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    // An unknown triangle orientation is fatal
    let orientation = settings.base_orientation()?;

    let mut controller = Controller::new(&settings, orientation);
    let changes = controller.subscribe();
    if let Err(e) = controller.run() {
        log::error!("{e}");
    }

    let start = Instant::now();
    let deadline = start.checked_add(settings.run_duration()).unwrap_or(start);
    let mut frames = 0u64;
    let mut last: Option<Frame> = None;
    while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
        // One frame per notification; notifications coalesce if we fall behind
        if changes.recv_timeout(remaining.min(Duration::from_millis(100))).is_ok() {
            let frame = controller.frame();
            log::trace!("Frame {} with {} commands", frame.tick, frame.commands.len());
            frames += 1;
            last = Some(frame);
        }
    }
    controller.stop();

    let frame = last.unwrap_or_else(|| controller.frame());
    log::info!(
        "Rendered {frames} frames, last at tick {} ({} vertices)",
        frame.tick,
        frame.tessellate().len()
    );
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
