// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod script;
pub mod task;

use std::path::PathBuf;

use tracing::debug;

use crate::cli::CliArgs;
use crate::engine::{Runtime, RuntimeOptions};
use crate::errors::Result;
use crate::script::build_root_task;
use crate::script::loader::load_and_validate;
use crate::script::model::{ScriptFile, StepKind};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - script loading + validation
/// - task tree construction
/// - the frame-loop runtime
/// - Ctrl-C handling (inside the runtime)
pub async fn run(args: CliArgs) -> Result<()> {
    let script_path = PathBuf::from(&args.script);
    let script = load_and_validate(&script_path)?;

    if args.dry_run {
        print_dry_run(&script);
        return Ok(());
    }

    let root = build_root_task(&script);

    let options = RuntimeOptions {
        fps: args.fps,
        fixed_delta: args.fixed_delta,
        max_frames: args.max_frames,
    };

    let runtime = Runtime::new(root, options);
    runtime.run().await
}

/// Simple dry-run output: print the timeline without running it.
fn print_dry_run(script: &ScriptFile) {
    println!("ticktask dry-run");
    println!("  script.name = {}", script.script.name);
    println!();

    println!("steps ({}):", script.step.len());
    for (index, step) in script.step.iter().enumerate() {
        let name = crate::script::validate::step_name(index, step);
        println!("  - {name}");
        println!("      kind: {:?}", step.kind);
        println!("      mode: {:?}", step.mode);
        match step.kind {
            StepKind::Wait => {
                if let Some(duration) = step.duration {
                    println!("      duration: {duration}s");
                }
            }
            StepKind::Print => {
                if let Some(ref message) = step.message {
                    println!("      message: {message}");
                }
            }
        }
    }

    debug!("dry-run complete (no execution)");
}
