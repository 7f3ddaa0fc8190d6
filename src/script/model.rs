// src/script/model.rs

use serde::Deserialize;

/// Top-level timeline script as read from a TOML file.
///
/// ```toml
/// [script]
/// name = "intro"
///
/// [[step]]
/// kind = "wait"
/// label = "pause"
/// duration = 1.5
///
/// [[step]]
/// kind = "print"
/// message = "hello"
/// mode = "also"
/// ```
///
/// Steps are composed onto a root task in file order, each via its `mode`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFile {
    /// Metadata from `[script]`.
    #[serde(default)]
    pub script: ScriptSection,

    /// All timeline entries from `[[step]]`, in file order.
    #[serde(default)]
    pub step: Vec<StepConfig>,
}

/// `[script]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptSection {
    /// Display name used in log output. Defaults to `"timeline"`.
    #[serde(default = "default_script_name")]
    pub name: String,
}

fn default_script_name() -> String {
    "timeline".to_string()
}

impl Default for ScriptSection {
    fn default() -> Self {
        Self {
            name: default_script_name(),
        }
    }
}

/// What a step does when its turn comes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Accumulate deltas until `duration` seconds have passed.
    Wait,
    /// Log `message` once, on the step's first update.
    Print,
}

/// How a step is attached to the root task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComposeMode {
    /// Append to the back of the queue (runs after everything queued).
    #[default]
    Then,
    /// Prepend to the front of the queue.
    Next,
    /// Add straight to the parallel set (starts on the next update).
    Also,
    /// Queue it, but promote to the parallel set when it reaches the front.
    ThenAlso,
}

/// A single `[[step]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub kind: StepKind,

    /// Optional label for log output; defaults to `step-<index>`.
    #[serde(default)]
    pub label: Option<String>,

    /// Seconds to wait. Required when `kind = "wait"`, rejected otherwise.
    #[serde(default)]
    pub duration: Option<f64>,

    /// Message to log. Required when `kind = "print"`, rejected otherwise.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub mode: ComposeMode,
}
