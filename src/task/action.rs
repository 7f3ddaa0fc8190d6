// src/task/action.rs

use tracing::trace;

/// A unit of per-step work.
///
/// `update` is called once per host frame with the elapsed time for that
/// frame. The return value answers "should this action be invoked again on
/// the next step": `true` to continue, `false` once the action is done.
///
/// Hosts can implement this for their own effects (move, fade, play a
/// sound); the built-in variants cover the common cases.
pub trait Action {
    fn update(&mut self, delta: f64) -> bool;
}

/// An action that is already done. Useful as the payload of a task that only
/// exists to group children.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAction;

impl Action for NoopAction {
    fn update(&mut self, _delta: f64) -> bool {
        false
    }
}

/// Runs a callback exactly once, on the first update call, then reports done
/// forever. The callback receives that call's delta.
pub struct OneOffAction {
    callback: Option<Box<dyn FnOnce(f64)>>,
}

impl OneOffAction {
    pub fn new(callback: impl FnOnce(f64) + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }
}

impl Action for OneOffAction {
    fn update(&mut self, delta: f64) -> bool {
        if let Some(callback) = self.callback.take() {
            callback(delta);
        }
        false
    }
}

/// Waits for a fixed duration, accumulating deltas across calls.
///
/// Continues while the accumulated time is strictly below the target and
/// reports done on the call where it reaches or passes it.
#[derive(Debug, Clone, Copy)]
pub struct WaitAction {
    wait_for: f64,
    elapsed: f64,
}

impl WaitAction {
    pub fn new(wait_for: f64) -> Self {
        Self {
            wait_for,
            elapsed: 0.0,
        }
    }

    /// Time accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Action for WaitAction {
    fn update(&mut self, delta: f64) -> bool {
        self.elapsed += delta;
        trace!(
            elapsed = self.elapsed,
            wait_for = self.wait_for,
            "wait action advanced"
        );
        self.elapsed < self.wait_for
    }
}
