use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::bank_frame::{AuthenticationConfiguration, ChannelIdentifier};

use super::errors::BusError;
use super::types::{BusEvent, ConfigurationCallback, MessageBus, RequestId};

/// Process-local bus holding one pending callback per event and channel.
#[derive(Debug, Default)]
pub struct InMemoryMessageBus {
    pending: Mutex<HashMap<String, (RequestId, ConfigurationCallback)>>,
    next_id: AtomicU64,
}

impl InMemoryMessageBus {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory message bus");
        Self::default()
    }

    fn make_key(event: BusEvent, channel: &ChannelIdentifier) -> String {
        format!("{}:{}", event.as_str(), channel.as_str())
    }

    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl MessageBus for InMemoryMessageBus {
    fn emit(
        &self,
        event: BusEvent,
        channel: &ChannelIdentifier,
        callback: ConfigurationCallback,
    ) -> RequestId {
        let request_id = RequestId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let key = Self::make_key(event, channel);

        let replaced = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, (request_id, callback));

        if replaced.is_some() {
            tracing::warn!(%event, %channel, "Replacing an unanswered request on the same channel");
        }
        tracing::debug!(%event, %channel, ?request_id, "Emitted request");
        request_id
    }

    fn respond(
        &self,
        event: BusEvent,
        channel: &ChannelIdentifier,
        configuration: AuthenticationConfiguration,
    ) -> Result<(), BusError> {
        let key = Self::make_key(event, channel);

        // Take the callback out first so the lock is not held while it runs
        let entry = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&key);

        let Some((request_id, callback)) = entry else {
            tracing::debug!(%event, %channel, "Response without a pending request");
            return Err(BusError::NoPendingRequest {
                event: event.to_string(),
                channel: channel.to_string(),
            });
        };

        tracing::debug!(%event, %channel, ?request_id, "Delivering response");
        callback.invoke(configuration)?;
        Ok(())
    }

    fn cancel(&self, event: BusEvent, channel: &ChannelIdentifier, request_id: RequestId) -> bool {
        let key = Self::make_key(event, channel);
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match pending.get(&key) {
            Some((current, _)) if *current == request_id => {
                pending.remove(&key);
                tracing::debug!(%event, %channel, ?request_id, "Cancelled pending request");
                true
            }
            _ => false,
        }
    }
}
