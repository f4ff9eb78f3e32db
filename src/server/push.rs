//! Best-effort real-time delivery of notification events.
//!
//! Events are fanned out over a single `tokio::sync::broadcast` channel; each SSE
//! subscriber filters the stream down to events addressed to its own recipient.
//! Publishing never fails: when nobody is listening the event is dropped and logged.

use tokio::sync::broadcast;

use crate::server::model::notification::Recipient;

/// Buffered events per subscriber before a slow receiver starts lagging.
const CHANNEL_CAPACITY: usize = 256;

/// SSE event names.
pub const EVENT_NEW_FEEDBACK: &str = "new-feedback";
pub const EVENT_NEW_PLAYER_RESPONSE: &str = "new-player-response";
pub const EVENT_NEW_EVALUATION: &str = "new-evaluation";

#[derive(Debug, Clone)]
pub struct PushEvent {
    pub recipient: Recipient,
    /// SSE event name
    pub event: &'static str,
    /// JSON body sent as the SSE data field
    pub payload: serde_json::Value,
}

/// Cloneable handle to the push channel, held in application state.
#[derive(Clone)]
pub struct PushHub {
    sender: broadcast::Sender<PushEvent>,
}

impl Default for PushHub {
    fn default() -> Self {
        Self::new()
    }
}

impl PushHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes an event to every connected subscriber.
    ///
    /// # Returns
    /// - `true` - At least one subscriber received the event
    /// - `false` - No subscriber was connected; the event was dropped
    pub fn publish(
        &self,
        recipient: Recipient,
        event: &'static str,
        payload: serde_json::Value,
    ) -> bool {
        match self.sender.send(PushEvent {
            recipient,
            event,
            payload,
        }) {
            Ok(_) => true,
            Err(_) => {
                tracing::warn!(
                    "No push subscribers connected; dropped {} for {} {}",
                    event,
                    recipient.role,
                    recipient.id
                );
                false
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PushEvent> {
        self.sender.subscribe()
    }
}
