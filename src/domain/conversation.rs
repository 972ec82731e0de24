// Conversation state domain models
use super::artifact::InteractivePlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    #[serde(alias = "user")]
    Human,
    #[serde(alias = "ai")]
    Assistant,
    Tool,
}

/// One entry of the ordered, immutable message log the agent runtime
/// passes into a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
}

/// One appended visualization, tied to the human message that asked for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactEntry {
    pub plot: InteractivePlot,
    pub associated_message_id: Option<String>,
}

/// Session-scoped, append-only record of interactive artifacts produced so
/// far. Mutated only by the conversation state merger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversationState {
    pub artifacts: Vec<ArtifactEntry>,
}

/// Reverse scan over the message log: the id of the most recent
/// human-authored message, or None when the log has none.
pub fn last_human_message_id(messages: &[ChatMessage]) -> Option<String> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::Human)
        .map(|m| m.id.clone())
}
