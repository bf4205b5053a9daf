//! Pushes agent events to the connected UI sessions.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use strum::Display;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::config::core_config::MessagingConfig;

pub trait WebSocketSession: Send + Sync {
    fn id(&self) -> &str;

    fn is_open(&self) -> bool;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait MessageBroadcaster: Send + Sync {
    fn broadcast(&self, message: &MessageBody);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    ConnectionRequest,
    Partner,
    Proof,
    Credential,
    Notification,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub r#type: MessageType,
    pub info: Value,
}

pub struct InMemoryMessageService {
    broadcaster: Arc<dyn MessageBroadcaster>,
    connected: Mutex<HashMap<String, Arc<dyn WebSocketSession>>>,
}

impl InMemoryMessageService {
    pub fn new(broadcaster: Arc<dyn MessageBroadcaster>) -> Self {
        Self {
            broadcaster,
            connected: Mutex::new(HashMap::new()),
        }
    }

    pub async fn subscribe(&self, session: Arc<dyn WebSocketSession>) {
        let id = session.id().to_owned();
        self.connected.lock().await.insert(id, session);
    }

    pub async fn unsubscribe(&self, session_id: &str) {
        self.connected.lock().await.remove(session_id);
    }

    pub async fn has_connected_sessions(&self) -> bool {
        !self.connected.lock().await.is_empty()
    }

    pub fn send(&self, message: &MessageBody) {
        self.broadcaster.broadcast(message);
    }

    /// Forgets sessions that were closed without unsubscribing, returns how many were dropped
    pub async fn cleanup_stale_sessions(&self) -> usize {
        tracing::debug!("Cleaning up stale websocket sessions.");

        let mut connected = self.connected.lock().await;
        let total = connected.len();
        connected.retain(|_, session| session.is_open());
        let stale = total - connected.len();

        tracing::debug!("Found {total} session(s), {stale} of them are stale.");
        stale
    }

    /// Runs [`Self::cleanup_stale_sessions`] periodically, starting after the initial delay
    pub fn spawn_cleanup(self: Arc<Self>, config: &MessagingConfig) -> JoinHandle<()> {
        let mut interval = cleanup_interval(config);

        tokio::spawn(async move {
            loop {
                interval.tick().await;
                self.cleanup_stale_sessions().await;
            }
        })
    }
}

/// Ticks `cleanup_interval` after the previous run finished, not on a fixed rate
pub(crate) fn cleanup_interval(config: &MessagingConfig) -> Interval {
    let mut interval = interval_at(
        Instant::now() + config.initial_delay,
        config.cleanup_interval,
    );
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
