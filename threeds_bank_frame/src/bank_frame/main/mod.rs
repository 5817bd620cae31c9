mod form;
mod frame;
mod identity;
mod requester;
mod validate;


pub use form::{FormSubmitter, HiddenField, OneshotSubmitter, RedirectForm, build_and_submit};
pub use frame::{
    BankFrame, FrameRedirect, await_redirect_form, initialize_bank_frame, run_bank_frame,
};
pub use identity::read_channel_identifier;
pub use requester::{PendingConfiguration, apply_loader_flag, request_configuration};
pub use validate::{BLANK_URL, FramePolicy, validate_and_sanitize};
