// src/task/mod.rs

//! The scheduling core.
//!
//! Two pieces:
//! - [`Action`]: a per-step unit of work (`action.rs`) — the leaf payload.
//! - [`Task`]: a tree node pairing one action with a sequential queue and a
//!   parallel set of child tasks (`task.rs`), advanced by `update(delta)`
//!   once per host frame.

pub mod action;
pub mod task;

pub use action::{Action, NoopAction, OneOffAction, WaitAction};
pub use task::Task;
