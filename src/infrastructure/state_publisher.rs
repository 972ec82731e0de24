// Watch-channel publisher feeding the rendering surface
use crate::application::session::StatePublisher;
use crate::domain::conversation::ConversationState;
use async_trait::async_trait;
use tokio::sync::watch;

/// Publishes each new conversation state over a watch channel. Receivers
/// always observe the latest state; intermediate states may be skipped,
/// which is fine for a surface that just re-renders the whole list.
pub struct WatchPublisher {
    tx: watch::Sender<ConversationState>,
}

impl WatchPublisher {
    pub fn channel() -> (Self, watch::Receiver<ConversationState>) {
        let (tx, rx) = watch::channel(ConversationState::default());
        (Self { tx }, rx)
    }
}

#[async_trait]
impl StatePublisher for WatchPublisher {
    async fn publish(&self, state: ConversationState) {
        // A send only fails when every receiver is gone; the state itself
        // stays authoritative in the session, so that is not an error here.
        let _ = self.tx.send(state);
    }
}
