// src/script/build.rs

use tracing::{debug, info};

use crate::script::model::{ComposeMode, ScriptFile, StepConfig, StepKind};
use crate::script::validate::step_name;
use crate::task::{NoopAction, OneOffAction, Task, WaitAction};

/// Build a runnable task tree from a validated script.
///
/// The root task carries a no-op action (it exists only to own the steps);
/// each `[[step]]` becomes a child task composed onto the root via its
/// `mode`, in file order. The returned root is driven by the runtime until
/// its `update` reports done.
pub fn build_root_task(script: &ScriptFile) -> Task {
    let root = Task::new(NoopAction).with_label(script.script.name.clone());

    for (index, step) in script.step.iter().enumerate() {
        let child = build_step_task(index, step);
        match step.mode {
            ComposeMode::Then => {
                root.then(&child);
            }
            ComposeMode::Next => {
                root.next(&child);
            }
            ComposeMode::Also => {
                root.also(&child);
            }
            ComposeMode::ThenAlso => {
                root.then_also(&child);
            }
        }
        debug!(step = %child, mode = ?step.mode, "composed step onto root");
    }

    root
}

fn build_step_task(index: usize, step: &StepConfig) -> Task {
    let label = step_name(index, step);

    match step.kind {
        StepKind::Wait => {
            // `duration` presence is guaranteed by validation.
            let duration = step.duration.unwrap_or(0.0);
            Task::new(WaitAction::new(duration)).with_label(label)
        }
        StepKind::Print => {
            let message = step.message.clone().unwrap_or_default();
            let step_label = label.clone();
            Task::new(OneOffAction::new(move |_delta| {
                info!(step = %step_label, "{message}");
            }))
            .with_label(label)
        }
    }
}
