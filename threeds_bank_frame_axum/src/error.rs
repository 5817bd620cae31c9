use axum::Json;
use http::{Result as HttpResponse, StatusCode};
use threeds_bank_frame::{BankFrameError, BusError, ErrorDetails};

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Helper trait for endpoints answering the parent controller with
/// `{type, code, message}` bodies
pub trait IntoJsonError<T> {
    fn into_json_error(self) -> Result<T, (StatusCode, Json<ErrorDetails>)>;
}

fn frame_error_status(e: &BankFrameError) -> StatusCode {
    match e {
        BankFrameError::TermUrlRequiresOperatorDomain => StatusCode::BAD_REQUEST,
        BankFrameError::CallbackAlreadyInvoked => StatusCode::CONFLICT,
        BankFrameError::ConfigurationUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        BankFrameError::ConfigurationTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        BankFrameError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn bus_error_status(e: &BusError) -> StatusCode {
    match e {
        BusError::NoPendingRequest { .. } => StatusCode::NOT_FOUND,
        BusError::Callback(inner) => frame_error_status(inner),
    }
}

impl<T> IntoResponseError<T> for Result<T, BankFrameError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = frame_error_status(&e);
            (status, format!("{}: {}", e.code(), e))
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}

impl<T> IntoJsonError<T> for Result<T, BusError> {
    fn into_json_error(self) -> Result<T, (StatusCode, Json<ErrorDetails>)> {
        self.map_err(|e| (bus_error_status(&e), Json(e.details())))
    }
}
