//! Kaleidoscope - bouncing shapes with 8-fold mirrored rendering
//!
//! Core modules:
//! - `sim`: Figure motion, mirrored placements, the figure collection and its ticker
//! - `view`: Colors and palette selected by the user
//! - `renderer`: Draw lists, surfaces and GPU-ready tessellation
//! - `controller`: The seam a GUI shell drives (run/stop, resize, speed, colors)
//! - `settings`: JSON configuration

pub mod controller;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use controller::Controller;
pub use settings::{Settings, SettingsError};
pub use view::{Color, ColorTarget, Palette};

/// Animation configuration constants
pub mod consts {
    /// Interval between ticks in milliseconds (25 ticks per second)
    pub const TICK_INTERVAL_MS: u64 = 40;

    /// Default viewport
    pub const VIEWPORT_WIDTH: i32 = 600;
    pub const VIEWPORT_HEIGHT: i32 = 700;
    /// Largest accepted viewport side
    pub const MAX_VIEWPORT: i32 = 16384;

    /// Largest accepted tick interval
    pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;
    /// Longest headless run (one day)
    pub const MAX_RUN_SECONDS: f32 = 86_400.0;

    /// Figure sizes
    pub const BALL_SIZE: i32 = 20;
    pub const RECT_WIDTH: i32 = 40;
    pub const RECT_HEIGHT: i32 = 20;
    pub const TRI_WIDTH: i32 = 30;
    pub const TRI_HEIGHT: i32 = 26;

    /// Default number of figures in the collection
    pub const FIGURE_COUNT: usize = 15;

    /// Initial positions are drawn from [0, INITIAL_POSITION_RANGE)
    pub const INITIAL_POSITION_RANGE: i32 = 100;
    /// Initial velocities are drawn from [1, MAX_INITIAL_SPEED]
    pub const MAX_INITIAL_SPEED: i32 = 10;

    /// Speed slider range; the factor is slider / SPEED_DEFAULT
    pub const SPEED_MIN: u32 = 5;
    pub const SPEED_MAX: u32 = 125;
    pub const SPEED_DEFAULT: u32 = 25;
}

/// Convert a speed slider value to a velocity factor (slider clamped to its range)
#[inline]
pub fn speed_factor(slider: u32) -> f32 {
    use consts::{SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};
    slider.clamp(SPEED_MIN, SPEED_MAX) as f32 / SPEED_DEFAULT as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_factor() {
        assert_eq!(speed_factor(25), 1.0);
        assert_eq!(speed_factor(50), 2.0);
        assert_eq!(speed_factor(5), 0.2);
        // Out-of-range slider values are clamped
        assert_eq!(speed_factor(0), 0.2);
        assert_eq!(speed_factor(500), 5.0);
    }
}
