// src/engine/runtime.rs

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::task::Task;

/// Options that influence how the frame loop behaves.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Tick rate when deltas are measured from the wall clock.
    pub fps: u32,

    /// If set, pass this delta to every update instead of measured time.
    /// Useful for deterministic runs and dry tests.
    pub fixed_delta: Option<f64>,

    /// If set, stop after this many frames even if the root is not done.
    pub max_frames: Option<u64>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            fixed_delta: None,
            max_frames: None,
        }
    }
}

/// The frame loop: owns a root task and ticks it until completion.
///
/// This should be called from `lib.rs` after:
/// - the script is loaded & validated
/// - the root `Task` is built from it
pub struct Runtime {
    root: Task,
    options: RuntimeOptions,
}

impl Runtime {
    pub fn new(root: Task, options: RuntimeOptions) -> Self {
        Self { root, options }
    }

    /// Run until the root task reports done, `max_frames` is hit, or Ctrl-C.
    pub async fn run(self) -> Result<()> {
        info!(root = %self.root, fps = self.options.fps, "ticktask runtime started");

        // Ctrl-C → graceful shutdown signal into the loop.
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = shutdown_tx.send(()).await;
        });

        let period = Duration::from_secs_f64(1.0 / f64::from(self.options.fps.max(1)));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let mut last_tick = Instant::now();
        let mut frame: u64 = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let now = Instant::now();
                    let delta = match self.options.fixed_delta {
                        Some(fixed) => fixed,
                        None => now.duration_since(last_tick).as_secs_f64(),
                    };
                    last_tick = now;
                    frame += 1;

                    let continuing = self.root.update(delta);
                    trace!(frame, delta, continuing, "frame advanced");

                    if !continuing {
                        info!(frames = frame, "root task complete");
                        break;
                    }

                    if let Some(max) = self.options.max_frames {
                        if frame >= max {
                            debug!(frames = frame, "frame budget reached, stopping");
                            break;
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("shutdown requested, stopping runtime");
                    break;
                }
            }
        }

        info!("ticktask runtime exiting");
        Ok(())
    }
}
