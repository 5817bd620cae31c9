use std::collections::HashMap;

use crate::bank_frame::types::{ChannelIdentifier, HIDDEN_CLASS, LoaderElement};
use crate::bus::{BusEvent, ConfigurationCallback, MessageBus, RequestId};

const SHOW_LOADER_PARAM: &str = "showLoader";

/// An emitted configuration request awaiting its response.
///
/// Dropping the handle cancels the request, which is what happens when the
/// frame is unloaded before the parent answers.
pub struct PendingConfiguration<'a, B: MessageBus + ?Sized> {
    bus: &'a B,
    channel: ChannelIdentifier,
    request_id: RequestId,
}

impl<B: MessageBus + ?Sized> PendingConfiguration<'_, B> {
    pub fn channel(&self) -> &ChannelIdentifier {
        &self.channel
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }
}

impl<B: MessageBus + ?Sized> Drop for PendingConfiguration<'_, B> {
    fn drop(&mut self) {
        self.bus.cancel(
            BusEvent::ConfigurationRequest,
            &self.channel,
            self.request_id,
        );
    }
}

/// Emit the one configuration request for `channel`.
pub fn request_configuration<'a, B: MessageBus + ?Sized>(
    bus: &'a B,
    channel: &ChannelIdentifier,
    callback: ConfigurationCallback,
) -> PendingConfiguration<'a, B> {
    let request_id = bus.emit(BusEvent::ConfigurationRequest, channel, callback);
    PendingConfiguration {
        bus,
        channel: channel.clone(),
        request_id,
    }
}

/// Reveal the loader when the page was opened with `showLoader=true`.
pub fn apply_loader_flag(params: &HashMap<String, String>, loader: &mut LoaderElement) {
    if params.get(SHOW_LOADER_PARAM).map(String::as_str) == Some("true") {
        loader.remove_class(HIDDEN_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::{BusError, InMemoryMessageBus};
    use crate::test_utils::sample_configuration;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_show_loader_true_removes_hidden_class() {
        let mut loader = LoaderElement::default();
        apply_loader_flag(&params(&[("showLoader", "true")]), &mut loader);
        assert!(!loader.is_hidden());
        assert_eq!(loader.class_name(), "");
    }

    #[test]
    fn test_show_loader_other_values_keep_hidden_class() {
        for value in ["not true", "false", "TRUE", "1", ""] {
            let mut loader = LoaderElement::default();
            apply_loader_flag(&params(&[("showLoader", value)]), &mut loader);
            assert!(loader.is_hidden(), "showLoader={value:?} should keep hidden");
        }
    }

    #[test]
    fn test_missing_show_loader_keeps_hidden_class() {
        let mut loader = LoaderElement::default();
        apply_loader_flag(&params(&[("channel", "abc_123")]), &mut loader);
        assert_eq!(loader.class_name(), "hidden");
    }

    #[test]
    fn test_request_configuration_emits_once() {
        let bus = InMemoryMessageBus::new();
        let channel = ChannelIdentifier::new("abc_123");

        let pending = request_configuration(&bus, &channel, ConfigurationCallback::new(|_| Ok(())));
        assert_eq!(pending.channel(), &channel);
        assert_eq!(bus.pending_count(), 1);

        bus.respond(
            BusEvent::ConfigurationRequest,
            &channel,
            sample_configuration(),
        )
        .unwrap();
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_dropping_pending_configuration_cancels_request() {
        let bus = InMemoryMessageBus::new();
        let channel = ChannelIdentifier::new("abc_123");

        let pending = request_configuration(&bus, &channel, ConfigurationCallback::new(|_| Ok(())));
        drop(pending);

        assert_eq!(bus.pending_count(), 0);
        let result = bus.respond(
            BusEvent::ConfigurationRequest,
            &channel,
            sample_configuration(),
        );
        assert!(matches!(result, Err(BusError::NoPendingRequest { .. })));
    }

    #[test]
    fn test_dropping_stale_handle_keeps_newer_request() {
        let bus = InMemoryMessageBus::new();
        let channel = ChannelIdentifier::new("abc_123");

        let stale = request_configuration(&bus, &channel, ConfigurationCallback::new(|_| Ok(())));
        let fresh = request_configuration(&bus, &channel, ConfigurationCallback::new(|_| Ok(())));
        assert_ne!(stale.request_id(), fresh.request_id());

        drop(stale);
        assert_eq!(bus.pending_count(), 1);
        drop(fresh);
        assert_eq!(bus.pending_count(), 0);
    }
}
