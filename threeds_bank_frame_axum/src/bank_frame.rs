use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{StatusCode, header::CACHE_CONTROL, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::collections::HashMap;

use threeds_bank_frame::{
    AuthenticationConfiguration, BusEvent, ChannelIdentifier, ErrorDetails, FramePolicy,
    MESSAGE_BUS, MessageBus, RedirectForm, THREEDS_CONFIGURATION_TIMEOUT, THREEDS_ROUTE_PREFIX,
    read_channel_identifier, run_bank_frame,
};

use super::error::{IntoJsonError, IntoResponseError};

pub(super) fn router() -> Router {
    Router::new()
        .route("/bank-frame", get(bank_frame))
        .route("/bank-frame.css", get(serve_bank_frame_css))
        .route(
            "/bank-frame/{channel}/configuration",
            post(post_configuration),
        )
}

#[derive(Template)]
#[template(path = "bank_frame.j2")]
struct BankFrameTemplate<'a> {
    loader_class: String,
    form: &'a RedirectForm,
    threeds_route_prefix: &'a str,
}

impl BankFrameTemplate<'_> {
    fn render_html(&self) -> Result<String, (StatusCode, String)> {
        self.render()
            .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}

/// Frame page: asks the parent for its configuration, then renders the
/// auto-submitting redirect form.
async fn bank_frame(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let channel = read_channel_identifier(&params)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Missing channel".to_string()))?;

    let redirect = run_bank_frame(
        &*MESSAGE_BUS,
        channel,
        &params,
        FramePolicy::from_env(),
        *THREEDS_CONFIGURATION_TIMEOUT,
    )
    .await
    .into_response_error()?;

    let html = BankFrameTemplate {
        loader_class: redirect.loader.class_name(),
        form: &redirect.form,
        threeds_route_prefix: THREEDS_ROUTE_PREFIX.as_str(),
    }
    .render_html()?;

    // The page carries the pareq and md, keep it out of caches
    Ok(([(CACHE_CONTROL, "no-store")], Html(html)).into_response())
}

/// Parent controller response for the frame waiting on `channel`.
async fn post_configuration(
    Path(channel): Path<String>,
    Json(configuration): Json<AuthenticationConfiguration>,
) -> Result<StatusCode, (StatusCode, Json<ErrorDetails>)> {
    let channel = ChannelIdentifier::new(channel);
    MESSAGE_BUS
        .respond(BusEvent::ConfigurationRequest, &channel, configuration)
        .into_json_error()?;

    tracing::debug!(%channel, "Configuration delivered to bank frame");
    Ok(StatusCode::NO_CONTENT)
}

async fn serve_bank_frame_css() -> Result<Response, (StatusCode, String)> {
    let css_content = include_str!("../static/bank_frame.css");
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/css")
        .body(css_content.to_string().into())
        .into_response_error()
}
