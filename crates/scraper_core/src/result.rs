use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome level of a single executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Data a step produced beyond its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Text extracted from a page element.
    Text(String),
    /// Path of a file written by the step.
    File(PathBuf),
}

/// Outcome of one executed command. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub status: ActionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<Payload>,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
            payload: None,
        }
    }

    pub fn success_with(message: impl Into<String>, payload: Payload) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
            payload: Some(payload),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
            payload: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == ActionStatus::Error
    }
}

/// One executed line paired with its outcome.
///
/// `instruction` is `None` for the synthetic navigation step recorded at
/// the start of a run; every parsed macro line carries its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instruction: Option<String>,
    pub result: ActionResult,
}

impl StepRecord {
    pub fn for_line(instruction: impl Into<String>, result: ActionResult) -> Self {
        Self {
            instruction: Some(instruction.into()),
            result,
        }
    }

    pub fn synthetic(result: ActionResult) -> Self {
        Self {
            instruction: None,
            result,
        }
    }

    pub fn is_error(&self) -> bool {
        self.result.is_error()
    }
}

/// Overall status of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// Aggregate outcome of one full job execution.
///
/// `steps` preserves the source order of the executed lines; nothing is
/// ever recorded past the first error step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub message: String,
    pub steps: Vec<StepRecord>,
}

impl RunResult {
    pub fn completed(message: impl Into<String>, steps: Vec<StepRecord>) -> Self {
        Self {
            status: RunStatus::Success,
            message: message.into(),
            steps,
        }
    }

    pub fn failed(message: impl Into<String>, steps: Vec<StepRecord>) -> Self {
        Self {
            status: RunStatus::Error,
            message: message.into(),
            steps,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

/// Lifecycle of one run, logged by the engine as it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    DriverStarting,
    Navigating,
    ExecutingInstructions,
    Finalizing,
    Completed,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::DriverStarting => "driver starting",
            Stage::Navigating => "navigating",
            Stage::ExecutingInstructions => "executing instructions",
            Stage::Finalizing => "finalizing",
            Stage::Completed => "completed",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}
