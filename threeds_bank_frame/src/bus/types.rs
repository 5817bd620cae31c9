use std::fmt;
use std::sync::Mutex;

use crate::bank_frame::{AuthenticationConfiguration, BankFrameError, ChannelIdentifier};

use super::errors::BusError;

/// Events carried between a bank frame and its parent controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusEvent {
    ConfigurationRequest,
}

impl BusEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationRequest => "threedsecure:CONFIGURATION_REQUEST",
        }
    }
}

impl fmt::Display for BusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one emitted request so a stale frame cannot cancel the request
/// of a newer frame on the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub(super) u64);

type CallbackFn =
    Box<dyn FnOnce(AuthenticationConfiguration) -> Result<(), BankFrameError> + Send + 'static>;

/// Single-invocation handler for a configuration response.
///
/// The first [`invoke`](Self::invoke) runs the handler and returns its result;
/// every later call fails with [`BankFrameError::CallbackAlreadyInvoked`].
pub struct ConfigurationCallback {
    slot: Mutex<Option<CallbackFn>>,
}

impl ConfigurationCallback {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnOnce(AuthenticationConfiguration) -> Result<(), BankFrameError> + Send + 'static,
    {
        Self {
            slot: Mutex::new(Some(Box::new(handler))),
        }
    }

    pub fn invoke(&self, configuration: AuthenticationConfiguration) -> Result<(), BankFrameError> {
        let handler = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        match handler {
            Some(handler) => handler(configuration),
            None => Err(BankFrameError::CallbackAlreadyInvoked),
        }
    }

    pub fn is_spent(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }
}

impl fmt::Debug for ConfigurationCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationCallback")
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// Transport between bank frames and the parent controller.
///
/// Implementations deliver each emitted callback at most once.
pub trait MessageBus: Send + Sync {
    /// Register `callback` for the next response to `event` on `channel`.
    fn emit(
        &self,
        event: BusEvent,
        channel: &ChannelIdentifier,
        callback: ConfigurationCallback,
    ) -> RequestId;

    /// Deliver `configuration` to the pending callback and return its result.
    fn respond(
        &self,
        event: BusEvent,
        channel: &ChannelIdentifier,
        configuration: AuthenticationConfiguration,
    ) -> Result<(), BusError>;

    /// Drop the pending request if it is still the one identified by `request_id`.
    fn cancel(&self, event: BusEvent, channel: &ChannelIdentifier, request_id: RequestId) -> bool;
}
