use tokio::sync::oneshot;

use crate::bank_frame::errors::BankFrameError;
use crate::bank_frame::types::SanitizedConfiguration;

pub(crate) const FORM_METHOD: &str = "POST";

/// Field names required by the ACS protocol, in submission order.
pub(crate) const FIELD_PAREQ: &str = "PaReq";
pub(crate) const FIELD_MD: &str = "MD";
pub(crate) const FIELD_TERM_URL: &str = "TermUrl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    name: &'static str,
    value: String,
}

impl HiddenField {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The POST form that navigates the frame to the ACS.
///
/// Values are kept as plain data; rendering must go through an escaping
/// template, never string concatenation into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectForm {
    action: String,
    fields: [HiddenField; 3],
}

impl RedirectForm {
    pub fn build(sanitized: &SanitizedConfiguration) -> Self {
        Self {
            action: sanitized.acs_url().to_string(),
            fields: [
                HiddenField {
                    name: FIELD_PAREQ,
                    value: sanitized.pareq().to_string(),
                },
                HiddenField {
                    name: FIELD_MD,
                    value: sanitized.md().to_string(),
                },
                HiddenField {
                    name: FIELD_TERM_URL,
                    value: sanitized.term_url().to_string(),
                },
            ],
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> &str {
        FORM_METHOD
    }

    pub fn fields(&self) -> &[HiddenField] {
        &self.fields
    }
}

/// Navigation side effect of the frame.
///
/// Both methods take `self`, so a submitter can submit or abort at most once.
pub trait FormSubmitter {
    fn submit(self, form: RedirectForm);

    /// The configuration was rejected and no form will be submitted.
    fn abort(self, error: BankFrameError);
}

/// Hands the frame outcome to the task rendering the frame page.
#[derive(Debug)]
pub struct OneshotSubmitter {
    sender: oneshot::Sender<Result<RedirectForm, BankFrameError>>,
}

impl OneshotSubmitter {
    pub fn new() -> (Self, oneshot::Receiver<Result<RedirectForm, BankFrameError>>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }
}

impl FormSubmitter for OneshotSubmitter {
    fn submit(self, form: RedirectForm) {
        if self.sender.send(Ok(form)).is_err() {
            tracing::debug!("Frame went away before the redirect form was delivered");
        }
    }

    fn abort(self, error: BankFrameError) {
        if self.sender.send(Err(error)).is_err() {
            tracing::debug!("Frame went away before the rejection was delivered");
        }
    }
}

pub fn build_and_submit<S: FormSubmitter>(sanitized: &SanitizedConfiguration, submitter: S) {
    let form = RedirectForm::build(sanitized);
    tracing::debug!(action = form.action(), "Submitting redirect form");
    submitter.submit(form);
}
