use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication parameters sent by the parent controller.
///
/// Every field is untrusted. `acs_url` and `term_url` are
/// attacker-influenceable and must go through [`validate_and_sanitize`]
/// before they reach the redirect form.
///
/// [`validate_and_sanitize`]: crate::validate_and_sanitize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConfiguration {
    pub acs_url: String,
    pub pareq: String,
    pub md: String,
    pub term_url: String,
}

/// Configuration that passed validation.
///
/// Only the validator can construct this, so holding one proves the term URL
/// is on an operator domain and the ACS URL is safe to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedConfiguration {
    pub(super) acs_url: String,
    pub(super) pareq: String,
    pub(super) md: String,
    pub(super) term_url: String,
}

impl SanitizedConfiguration {
    pub fn acs_url(&self) -> &str {
        &self.acs_url
    }

    pub fn pareq(&self) -> &str {
        &self.pareq
    }

    pub fn md(&self) -> &str {
        &self.md
    }

    pub fn term_url(&self) -> &str {
        &self.term_url
    }
}

/// Opaque token correlating a bank frame with its parent controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelIdentifier(String);

impl ChannelIdentifier {
    /// Wrap the identifier handed over by the hosting shell. No validation is
    /// performed.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Mint a fresh identifier for a parent controller opening a new frame.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(super) const HIDDEN_CLASS: &str = "hidden";

/// Class list of the frame's loading indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderElement {
    classes: Vec<String>,
}

impl Default for LoaderElement {
    fn default() -> Self {
        Self {
            classes: vec![HIDDEN_CLASS.to_string()],
        }
    }
}

impl LoaderElement {
    pub fn is_hidden(&self) -> bool {
        self.classes.iter().any(|c| c == HIDDEN_CLASS)
    }

    pub(super) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Value for the element's `class` attribute.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Error categories surfaced to the embedding SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Internal,
    Network,
}

/// Structured error body: `{type, code, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub code: &'static str,
    pub message: String,
}
