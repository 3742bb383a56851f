//! The figure collection and its state-changed notifications
//!
//! The model owns a fixed-size, ordered collection of figures. It knows
//! nothing about drawing; observers learn about changes through a channel
//! they poll once per frame.

use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender, TrySendError, bounded};
use crossbeam::sync::ShardedLock;
use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::SimError;
use super::figure::{Figure, Shape, ShapeKind};
use crate::consts::*;

/// Model shared between the ticker thread (writer) and painting (readers)
pub type SharedModel = Arc<ShardedLock<Model>>;

/// Wrap a model for sharing with an animator
pub fn shared(model: Model) -> SharedModel {
    Arc::new(ShardedLock::new(model))
}

/// Notification sent after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    /// Tick counter after the change
    pub tick: u64,
}

/// The figure collection
#[derive(Debug, Serialize, Deserialize)]
pub struct Model {
    /// Seed the figures were generated from
    pub seed: u64,
    /// Number of ticks applied so far
    pub time_ticks: u64,
    /// Figures in drawing/stepping order (fixed length)
    figures: Vec<Figure>,
    /// Current speed factor (1.0 = initial velocities)
    speed_factor: f32,
    #[serde(skip)]
    observers: Vec<Sender<StateChanged>>,
}

impl Model {
    /// Create `count` figures with random positions and velocities.
    ///
    /// Shapes are assigned round-robin (ball, rectangle, triangle). The same
    /// seed always produces the same figures.
    pub fn new(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let figures = (0..count)
            .map(|i| {
                let kind = ShapeKind::ALL[i % ShapeKind::ALL.len()];
                let pos = IVec2::new(
                    rng.random_range(0..INITIAL_POSITION_RANGE),
                    rng.random_range(0..INITIAL_POSITION_RANGE),
                );
                let vel = IVec2::new(
                    rng.random_range(1..=MAX_INITIAL_SPEED),
                    rng.random_range(1..=MAX_INITIAL_SPEED),
                );
                Figure::new(Shape::of_kind(kind), pos, vel)
            })
            .collect();

        log::debug!("Created {count} figures from seed {seed}");

        Self {
            seed,
            ..Self::from_figures(figures)
        }
    }

    /// Create a model around an explicit set of figures
    pub fn from_figures(figures: Vec<Figure>) -> Self {
        Self {
            seed: 0,
            time_ticks: 0,
            figures,
            speed_factor: 1.0,
            observers: Vec::new(),
        }
    }

    /// Advance every figure one step, then notify observers
    pub fn tick(&mut self) {
        for figure in &mut self.figures {
            figure.step();
        }
        self.time_ticks += 1;
        log::trace!("Tick {}", self.time_ticks);
        self.notify();
    }

    /// Set the walls for every figure from the viewport size
    pub fn set_limits(&mut self, width: i32, height: i32) {
        log::debug!("Viewport resized to {width}x{height}");
        for figure in &mut self.figures {
            figure.set_bounds(width, height);
        }
    }

    /// Rescale every figure's speed relative to its initial velocity
    pub fn change_speed_factor(&mut self, factor: f32) -> Result<(), SimError> {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Rejected speed factor {factor}");
            return Err(SimError::InvalidSpeedFactor(factor));
        }
        for figure in &mut self.figures {
            figure.rescale_velocity(factor);
        }
        self.speed_factor = factor;
        log::debug!("Speed factor set to {factor}");
        Ok(())
    }

    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    pub fn figure(&self, index: usize) -> Option<&Figure> {
        self.figures.get(index)
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Register an observer. Notifications coalesce: the receiver holds at
    /// most one pending notification, and readers take the current figures
    /// from the model itself.
    pub fn subscribe(&mut self) -> Receiver<StateChanged> {
        let (tx, rx) = bounded(1);
        self.observers.push(tx);
        rx
    }

    /// Notify observers, dropping any whose receiver is gone
    fn notify(&mut self) {
        let event = StateChanged {
            tick: self.time_ticks,
        };
        self.observers.retain(|tx| match tx.try_send(event) {
            Ok(()) | Err(TrySendError::Full(_)) => true,
            Err(TrySendError::Disconnected(_)) => false,
        });
    }
}
