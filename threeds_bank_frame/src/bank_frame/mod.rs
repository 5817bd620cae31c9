mod config;
mod errors;
mod main;
mod types;

pub use config::THREEDS_CONFIGURATION_TIMEOUT;
pub use errors::BankFrameError;
pub use main::{
    BLANK_URL, BankFrame, FormSubmitter, FramePolicy, FrameRedirect, HiddenField,
    OneshotSubmitter, PendingConfiguration, RedirectForm, apply_loader_flag, await_redirect_form,
    build_and_submit, initialize_bank_frame, read_channel_identifier, request_configuration,
    run_bank_frame, validate_and_sanitize,
};
pub use types::{
    AuthenticationConfiguration, ChannelIdentifier, ErrorDetails, ErrorType, LoaderElement,
    SanitizedConfiguration,
};

pub(crate) fn init() -> Result<(), BankFrameError> {
    config::init()
}
