// Conversation state merger - the single writer of session state
use crate::domain::artifact::InteractivePlot;
use crate::domain::conversation::{
    last_human_message_id, ArtifactEntry, ChatMessage, ConversationState,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Out-of-band channel that notifies the rendering surface whenever the
/// conversation state changes.
#[async_trait]
pub trait StatePublisher: Send + Sync {
    async fn publish(&self, state: ConversationState);
}

/// Per-session conversation state plus its observer channel. Appends take
/// the lock across the whole read-modify-write and publish, so concurrent
/// tool invocations cannot lose updates and publish happens-after append.
pub struct Session {
    state: Mutex<ConversationState>,
    publisher: Arc<dyn StatePublisher>,
}

impl Session {
    pub fn new(publisher: Arc<dyn StatePublisher>) -> Self {
        Self {
            state: Mutex::new(ConversationState::default()),
            publisher,
        }
    }

    /// Append one interactive artifact, associating it with the most recent
    /// human message in the log (None is a valid, silent outcome). The
    /// updated state is published before this returns.
    pub async fn append_interactive_result(
        &self,
        plot: InteractivePlot,
        messages: &[ChatMessage],
    ) -> ArtifactEntry {
        let entry = ArtifactEntry {
            plot,
            associated_message_id: last_human_message_id(messages),
        };

        let mut state = self.state.lock().await;
        state.artifacts.push(entry.clone());
        self.publisher.publish(state.clone()).await;
        entry
    }

    pub async fn snapshot(&self) -> ConversationState {
        self.state.lock().await.clone()
    }
}
