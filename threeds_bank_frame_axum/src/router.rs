//! Combined router for the bank frame endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create a router for the bank frame endpoints
///
/// Mount it under `THREEDS_ROUTE_PREFIX`. The endpoints will be available at:
/// - {THREEDS_ROUTE_PREFIX}/bank-frame?channel=...[&showLoader=true]
/// - {THREEDS_ROUTE_PREFIX}/bank-frame/{channel}/configuration
/// - {THREEDS_ROUTE_PREFIX}/bank-frame.css
pub fn threeds_bank_frame_router() -> Router {
    super::bank_frame::router().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `threeds_bank_frame_router()` without the HTTP tracing middleware.
pub fn threeds_bank_frame_router_no_trace() -> Router {
    super::bank_frame::router()
}
