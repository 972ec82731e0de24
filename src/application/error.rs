// Tool error taxonomy and the result envelope returned to the agent turn
use crate::domain::conversation::ArtifactEntry;
use crate::domain::signal::AvailableSignal;
use serde::Serialize;
use thiserror::Error;

/// Component-level failures of the tool pipeline. Every variant is caught
/// at the tool boundary and converted into a [`ToolResult::Failure`];
/// nothing escapes to the caller as a raw fault.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Either signal_id or both signal_name and case_name must be provided")]
    MissingSelector { available: Vec<AvailableSignal> },

    #[error("{message}")]
    NotFound {
        message: String,
        available: Vec<AvailableSignal>,
    },

    #[error("Error fetching timeseries data (status {status}): {body}")]
    Fetch { status: u16, body: String },

    #[error("Timeseries service unreachable: {0}")]
    Transport(String),

    #[error("Catalog store error: {0}")]
    Store(anyhow::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<anyhow::Error> for ToolError {
    fn from(err: anyhow::Error) -> Self {
        ToolError::Store(err)
    }
}

impl ToolError {
    /// Disambiguation list for selector failures, so the caller can
    /// re-issue a corrected tool call.
    pub fn available_signals(&self) -> Option<&[AvailableSignal]> {
        match self {
            ToolError::MissingSelector { available } | ToolError::NotFound { available, .. } => {
                Some(available)
            }
            _ => None,
        }
    }
}

/// Response to a single tool invocation, correlated by tool_call_id.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResult {
    /// Plain structured payload (catalog listings, html/png plot results).
    Success {
        tool_call_id: String,
        content: serde_json::Value,
    },
    /// Interactive plot results: the conversation-state delta that was
    /// appended, plus a short confirmation message.
    StateDelta {
        tool_call_id: String,
        content: String,
        entry: ArtifactEntry,
    },
    Failure {
        tool_call_id: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        available_signals: Option<Vec<AvailableSignal>>,
    },
}

impl ToolResult {
    pub fn failure(tool_call_id: String, err: &ToolError) -> Self {
        ToolResult::Failure {
            tool_call_id,
            message: err.to_string(),
            available_signals: err.available_signals().map(<[_]>::to_vec),
        }
    }
}
