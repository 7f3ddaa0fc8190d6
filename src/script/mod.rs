// src/script/mod.rs

//! TOML timeline scripts for the demo driver.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a script file from disk (`loader.rs`).
//! - Validate semantic invariants like non-negative waits (`validate.rs`).
//! - Build a runnable [`crate::task::Task`] tree from a script (`build.rs`).

pub mod build;
pub mod loader;
pub mod model;
pub mod validate;

pub use build::build_root_task;
pub use loader::{load_and_validate, load_from_path};
pub use model::{ComposeMode, ScriptFile, ScriptSection, StepConfig, StepKind};
pub use validate::validate_script;
