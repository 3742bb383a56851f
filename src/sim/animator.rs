//! Periodic ticker driving the model
//!
//! Runs `Model::tick` on a background thread at a fixed interval until
//! stopped. Stopping joins the thread, so once `stop` returns no further
//! tick can run and an in-flight tick has completed.

use std::sync::PoisonError;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Sender, select};

use super::SimError;
use super::model::SharedModel;
use crate::consts::TICK_INTERVAL_MS;

struct Running {
    /// Dropping this disconnects the ticker thread's stop channel
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

/// Cancellable repeating tick task
pub struct Animator {
    model: SharedModel,
    interval: Duration,
    running: Option<Running>,
}

impl Animator {
    /// Animator ticking every `TICK_INTERVAL_MS` (25 times a second)
    pub fn new(model: SharedModel) -> Self {
        Self::with_interval(model, Duration::from_millis(TICK_INTERVAL_MS))
    }

    pub fn with_interval(model: SharedModel, interval: Duration) -> Self {
        Self {
            model,
            interval,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Start ticking. The first tick happens immediately.
    ///
    /// Starting an animator that is already running is rejected and leaves
    /// the running task untouched.
    pub fn start(&mut self) -> Result<(), SimError> {
        if self.running.is_some() {
            log::warn!("Start requested while already running");
            return Err(SimError::AlreadyRunning);
        }

        let (stop, stop_rx) = channel::bounded::<()>(0);
        let model = SharedModel::clone(&self.model);
        let interval = self.interval;

        let handle = thread::spawn(move || {
            tick_model(&model);
            let ticker = channel::tick(interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => tick_model(&model),
                }
            }
            log::debug!("Ticker thread exiting");
        });

        self.running = Some(Running { stop, handle });
        log::info!("Animation started ({} ms interval)", interval.as_millis());
        Ok(())
    }

    /// Stop ticking and wait for the ticker thread to finish.
    ///
    /// Returns false if the animator was not running.
    pub fn stop(&mut self) -> bool {
        let Some(Running { stop, handle }) = self.running.take() else {
            return false;
        };
        drop(stop);
        if handle.join().is_err() {
            log::error!("Ticker thread panicked");
        }
        log::info!("Animation stopped");
        true
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick_model(model: &SharedModel) {
    model.write().unwrap_or_else(PoisonError::into_inner).tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
    use crate::sim::model::{Model, shared};

    fn ticks(model: &SharedModel) -> u64 {
        model.read().unwrap().time_ticks
    }

    fn test_model() -> SharedModel {
        let mut model = Model::new(42, 4);
        model.set_limits(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        shared(model)
    }

    #[test]
    fn test_start_ticks_and_stop_halts() {
        let model = test_model();
        let mut animator = Animator::with_interval(SharedModel::clone(&model), Duration::from_millis(5));

        animator.start().unwrap();
        assert!(animator.is_running());
        thread::sleep(Duration::from_millis(60));
        assert!(animator.stop());
        assert!(!animator.is_running());

        let after_stop = ticks(&model);
        assert!(after_stop > 0);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks(&model), after_stop);
    }

    #[test]
    fn test_first_tick_is_immediate() {
        let model = test_model();
        let rx = model.write().unwrap().subscribe();
        let mut animator = Animator::with_interval(SharedModel::clone(&model), Duration::from_secs(60));

        animator.start().unwrap();
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(event.tick, 1);
        animator.stop();
    }

    #[test]
    fn test_double_start_rejected() {
        let model = test_model();
        let mut animator = Animator::with_interval(model, Duration::from_millis(5));

        animator.start().unwrap();
        assert_eq!(animator.start(), Err(SimError::AlreadyRunning));
        assert!(animator.is_running());
        assert!(animator.stop());
        assert!(!animator.stop());
    }

    #[test]
    fn test_restart_after_stop() {
        let model = test_model();
        let mut animator = Animator::with_interval(SharedModel::clone(&model), Duration::from_millis(5));

        animator.start().unwrap();
        animator.stop();
        let first_run = ticks(&model);

        animator.start().unwrap();
        thread::sleep(Duration::from_millis(30));
        animator.stop();
        assert!(ticks(&model) > first_run);
    }

    #[test]
    fn test_drop_stops_thread() {
        let model = test_model();
        {
            let mut animator = Animator::with_interval(SharedModel::clone(&model), Duration::from_millis(5));
            animator.start().unwrap();
            thread::sleep(Duration::from_millis(20));
        }
        let after_drop = ticks(&model);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks(&model), after_drop);
    }
}
