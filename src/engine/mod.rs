// src/engine/mod.rs

//! Frame-loop driver for the demo binary.
//!
//! The core in [`crate::task`] is purely call-driven; this module supplies
//! the calls: a tokio interval ticks at a configurable rate, computes a
//! delta (wall-clock or fixed), and feeds it to a root task's `update`
//! until the task completes, a frame budget runs out, or Ctrl-C arrives.

pub mod runtime;

pub use runtime::{Runtime, RuntimeOptions};
