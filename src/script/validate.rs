// src/script/validate.rs

use anyhow::{anyhow, Result};

use crate::script::model::{ScriptFile, StepConfig, StepKind};

/// Run semantic validation against a loaded script.
///
/// This checks:
/// - there is at least one `[[step]]`
/// - `wait` steps carry a non-negative `duration` and no `message`
/// - `print` steps carry a `message` and no `duration`
pub fn validate_script(script: &ScriptFile) -> Result<()> {
    ensure_has_steps(script)?;
    for (index, step) in script.step.iter().enumerate() {
        validate_step(index, step)?;
    }
    Ok(())
}

fn ensure_has_steps(script: &ScriptFile) -> Result<()> {
    if script.step.is_empty() {
        return Err(anyhow!("script must contain at least one [[step]] entry"));
    }
    Ok(())
}

fn validate_step(index: usize, step: &StepConfig) -> Result<()> {
    let name = step_name(index, step);

    match step.kind {
        StepKind::Wait => {
            let duration = step.duration.ok_or_else(|| {
                anyhow!("step '{}' has kind \"wait\" but no `duration`", name)
            })?;
            if duration < 0.0 {
                return Err(anyhow!(
                    "step '{}' has negative duration {} (must be >= 0)",
                    name,
                    duration
                ));
            }
            if step.message.is_some() {
                return Err(anyhow!(
                    "step '{}' has kind \"wait\" but sets `message`",
                    name
                ));
            }
        }
        StepKind::Print => {
            if step.message.is_none() {
                return Err(anyhow!(
                    "step '{}' has kind \"print\" but no `message`",
                    name
                ));
            }
            if step.duration.is_some() {
                return Err(anyhow!(
                    "step '{}' has kind \"print\" but sets `duration`",
                    name
                ));
            }
        }
    }

    Ok(())
}

/// Human-readable name for error messages: the label if set, else the index.
pub(crate) fn step_name(index: usize, step: &StepConfig) -> String {
    step.label
        .clone()
        .unwrap_or_else(|| format!("step-{index}"))
}
