use std::time::Duration;
use thiserror::Error;

use super::types::{ErrorDetails, ErrorType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankFrameError {
    /// The term URL is not on an operator domain. Terminal: never fall back
    /// to a default and continue.
    #[error("Term Url must be on an operator domain.")]
    TermUrlRequiresOperatorDomain,

    #[error("Configuration callback was already invoked.")]
    CallbackAlreadyInvoked,

    #[error("Configuration request closed before a response arrived.")]
    ConfigurationUnavailable,

    #[error("No configuration received within {0:?}.")]
    ConfigurationTimeout(Duration),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BankFrameError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::ConfigurationUnavailable | Self::ConfigurationTimeout(_) => ErrorType::Network,
            _ => ErrorType::Internal,
        }
    }

    /// Fixed machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TermUrlRequiresOperatorDomain => "THREEDS_TERM_URL_REQUIRES_OPERATOR_DOMAIN",
            Self::CallbackAlreadyInvoked => "THREEDS_CONFIGURATION_CALLBACK_ALREADY_INVOKED",
            Self::ConfigurationUnavailable => "THREEDS_CONFIGURATION_UNAVAILABLE",
            Self::ConfigurationTimeout(_) => "THREEDS_CONFIGURATION_TIMEOUT",
            Self::Config(_) => "THREEDS_INVALID_FRAME_CONFIGURATION",
        }
    }

    pub fn details(&self) -> ErrorDetails {
        ErrorDetails {
            error_type: self.error_type(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}
