use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::bank_frame::errors::BankFrameError;
use crate::bank_frame::types::{AuthenticationConfiguration, ChannelIdentifier, LoaderElement};
use crate::bus::{ConfigurationCallback, MessageBus};

use super::form::{FormSubmitter, OneshotSubmitter, RedirectForm, build_and_submit};
use super::requester::{PendingConfiguration, apply_loader_flag, request_configuration};
use super::validate::{FramePolicy, validate_and_sanitize};

/// A bank frame that has asked for its configuration.
pub struct BankFrame<'a, B: MessageBus + ?Sized> {
    loader: LoaderElement,
    pending: PendingConfiguration<'a, B>,
}

impl<B: MessageBus + ?Sized> BankFrame<'_, B> {
    pub fn channel(&self) -> &ChannelIdentifier {
        self.pending.channel()
    }

    pub fn loader(&self) -> &LoaderElement {
        &self.loader
    }
}

/// What the frame page needs once the configuration arrived and passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRedirect {
    pub loader: LoaderElement,
    pub form: RedirectForm,
}

/// Apply the loader flag and emit the configuration request.
///
/// The callback validates the configuration and submits the redirect form. A
/// rejected configuration aborts the submitter and the error is returned to
/// whoever delivered the configuration.
pub fn initialize_bank_frame<'a, B, S>(
    bus: &'a B,
    channel: ChannelIdentifier,
    params: &HashMap<String, String>,
    policy: FramePolicy,
    submitter: S,
) -> BankFrame<'a, B>
where
    B: MessageBus + ?Sized,
    S: FormSubmitter + Send + 'static,
{
    let mut loader = LoaderElement::default();
    apply_loader_flag(params, &mut loader);

    let callback = ConfigurationCallback::new(move |configuration| {
        handle_configuration(configuration, &policy, submitter)
    });
    let pending = request_configuration(bus, &channel, callback);

    tracing::debug!(%channel, loader_hidden = loader.is_hidden(), "Bank frame initialized");
    BankFrame { loader, pending }
}

fn handle_configuration<S: FormSubmitter>(
    configuration: AuthenticationConfiguration,
    policy: &FramePolicy,
    submitter: S,
) -> Result<(), BankFrameError> {
    match validate_and_sanitize(&configuration, policy) {
        Ok(sanitized) => {
            build_and_submit(&sanitized, submitter);
            Ok(())
        }
        Err(e) => {
            submitter.abort(e.clone());
            Err(e)
        }
    }
}

/// Wait for the frame outcome, optionally bounded by `timeout`.
pub async fn await_redirect_form(
    receiver: oneshot::Receiver<Result<RedirectForm, BankFrameError>>,
    timeout: Option<Duration>,
) -> Result<RedirectForm, BankFrameError> {
    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, receiver)
            .await
            .map_err(|_| BankFrameError::ConfigurationTimeout(limit))?,
        None => receiver.await,
    };

    outcome.map_err(|_| BankFrameError::ConfigurationUnavailable)?
}

/// Run one frame to completion: request the configuration, wait for it, and
/// return the redirect form to render.
///
/// The pending request lives exactly as long as this future; dropping the
/// future cancels it.
pub async fn run_bank_frame<B: MessageBus + ?Sized>(
    bus: &B,
    channel: ChannelIdentifier,
    params: &HashMap<String, String>,
    policy: FramePolicy,
    timeout: Option<Duration>,
) -> Result<FrameRedirect, BankFrameError> {
    let (submitter, receiver) = OneshotSubmitter::new();
    let frame = initialize_bank_frame(bus, channel, params, policy, submitter);

    let form = await_redirect_form(receiver, timeout).await?;
    Ok(FrameRedirect {
        loader: frame.loader().clone(),
        form,
    })
}
