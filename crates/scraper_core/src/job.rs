use serde::{Deserialize, Serialize};

/// Read-only snapshot of a persisted job, taken at run start.
///
/// The surrounding dashboard owns job storage and mutation; the engine
/// only ever reads this. Job ids are opaque strings (UUIDs in the
/// reference store) and may be absent for ad-hoc runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: Option<String>,
    pub url: String,
    pub instructions: String,
}

impl JobSnapshot {
    pub fn new(
        id: Option<String>,
        url: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            instructions: instructions.into(),
        }
    }

    /// Id for log lines and run messages; ad-hoc runs show up as "ad-hoc".
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("ad-hoc")
    }
}
