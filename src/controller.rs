//! Controller - the seam a GUI shell drives
//!
//! Owns the shared model, the animator and the palette. A shell forwards
//! button presses, resizes, slider moves and color selections here, and
//! asks for a [`Frame`] whenever the model signals a change.

use std::sync::PoisonError;

use crossbeam::channel::Receiver;
use glam::IVec2;

use crate::consts::{SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{Animator, Model, Orientation, SharedModel, SimError, StateChanged, shared};
use crate::speed_factor;
use crate::view::{Color, ColorTarget, Palette};

pub struct Controller {
    model: SharedModel,
    animator: Animator,
    palette: Palette,
    viewport: IVec2,
    base_orientation: Orientation,
    speed: u32,
}

impl Controller {
    /// Build the model from settings and fit it to the configured viewport
    pub fn new(settings: &Settings, base_orientation: Orientation) -> Self {
        let seed = settings.effective_seed();
        let mut model = Model::new(seed, settings.figure_count);
        let viewport = settings.viewport();
        model.set_limits(viewport.x, viewport.y);

        let model = shared(model);
        let animator = Animator::with_interval(SharedModel::clone(&model), settings.tick_interval());
        log::info!(
            "Controller ready: {} figures, seed {seed}, viewport {}x{}",
            settings.figure_count,
            viewport.x,
            viewport.y
        );

        let mut controller = Self {
            model,
            animator,
            palette: settings.palette,
            viewport,
            base_orientation,
            speed: SPEED_DEFAULT,
        };
        controller.set_speed(settings.speed);
        controller
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn viewport(&self) -> IVec2 {
        self.viewport
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Subscribe to state-changed notifications (poll once per frame)
    pub fn subscribe(&self) -> Receiver<StateChanged> {
        self.model
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribe()
    }

    /// Run button
    pub fn run(&mut self) -> Result<(), SimError> {
        self.animator.start()
    }

    /// Stop button
    pub fn stop(&mut self) {
        self.animator.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animator.is_running()
    }

    /// Run is enabled only while stopped
    pub fn can_run(&self) -> bool {
        !self.is_running()
    }

    /// Stop is enabled only while running
    pub fn can_stop(&self) -> bool {
        self.is_running()
    }

    /// Viewport resized
    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport = IVec2::new(width, height);
        self.model
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_limits(width, height);
    }

    /// Speed slider moved; the value is clamped to the slider range
    pub fn set_speed(&mut self, slider: u32) {
        let factor = speed_factor(slider);
        let result = self
            .model
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .change_speed_factor(factor);
        // Clamped slider values always give a positive factor
        if let Err(e) = result {
            log::error!("Speed change failed: {e}");
            return;
        }
        self.speed = slider.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Color selector changed
    pub fn set_color(&mut self, target: ColorTarget, color: Color) {
        log::debug!("{target:?} color set to {}", color.as_str());
        self.palette.set(target, color);
    }

    /// Color selector changed, by display name (unknown names are white)
    pub fn set_color_by_name(&mut self, target: ColorTarget, name: &str) -> Color {
        let color = Color::from_name(name);
        self.set_color(target, color);
        color
    }

    /// Build the draw list for the current state
    pub fn frame(&self) -> Frame {
        let model = self.model.read().unwrap_or_else(PoisonError::into_inner);
        Frame::build(&model, &self.palette, self.viewport, self.base_orientation)
    }
}
