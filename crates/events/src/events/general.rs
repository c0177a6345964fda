use serde::{Deserialize, Serialize};

/// Events that are not tied to one stage of a pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralEvent {
    /// Something the user should know about, and what it concerns
    Warning { message: String, context: String },
}

impl GeneralEvent {
    /// Create a warning event with context
    pub fn warning_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
            context: context.into(),
        }
    }
}
