//! threeds_bank_frame - 3-D Secure bank frame core
//!
//! This crate receives the authentication configuration for a 3-D Secure
//! step-up over a message bus, validates the attacker-influenceable URLs in it,
//! and builds the auto-submitting POST form that sends the cardholder to the
//! bank's Access Control Server.

mod bank_frame;
mod bus;
mod config;

#[cfg(test)]
mod test_utils;

// Re-export the route prefix
pub use config::THREEDS_ROUTE_PREFIX;

pub use bank_frame::{
    AuthenticationConfiguration, BLANK_URL, BankFrame, BankFrameError, ChannelIdentifier,
    ErrorDetails, ErrorType, FormSubmitter, FramePolicy, FrameRedirect, HiddenField,
    LoaderElement, OneshotSubmitter, PendingConfiguration, RedirectForm, SanitizedConfiguration,
    THREEDS_CONFIGURATION_TIMEOUT, apply_loader_flag, await_redirect_form, build_and_submit,
    initialize_bank_frame, read_channel_identifier, request_configuration, run_bank_frame,
    validate_and_sanitize,
};

pub use bus::{
    BusError, BusEvent, ConfigurationCallback, InMemoryMessageBus, MESSAGE_BUS, MessageBus,
    RequestId,
};

/// Initialize the bank frame configuration
///
/// Forces every environment-driven setting so that misconfiguration surfaces
/// at startup instead of on the first frame request.
pub fn init() -> Result<(), BankFrameError> {
    bank_frame::init()?;
    let _ = THREEDS_ROUTE_PREFIX.as_str();
    Ok(())
}
