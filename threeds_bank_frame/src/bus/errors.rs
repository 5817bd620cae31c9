use thiserror::Error;

use crate::bank_frame::{BankFrameError, ErrorDetails, ErrorType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("No pending {event} for channel {channel}")]
    NoPendingRequest { event: String, channel: String },

    /// The callback ran and rejected the configuration
    #[error(transparent)]
    Callback(#[from] BankFrameError),
}

impl BusError {
    pub fn details(&self) -> ErrorDetails {
        match self {
            Self::NoPendingRequest { .. } => ErrorDetails {
                error_type: ErrorType::Internal,
                code: "THREEDS_NO_PENDING_CONFIGURATION_REQUEST",
                message: self.to_string(),
            },
            Self::Callback(e) => e.details(),
        }
    }
}
