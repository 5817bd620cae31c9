use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::LazyLock;

use threeds_bank_frame_axum::{ChannelIdentifier, bank_frame_url, configuration_url};

/// ACS the demo parent controller points the frame at
static DEMO_ACS_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("DEMO_ACS_URL").unwrap_or_else(|_| "https://bank.example.com/acs".to_string())
});

/// Must be on one of THREEDS_OPERATOR_DOMAINS, or the frame rejects it
static DEMO_TERM_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("DEMO_TERM_URL").unwrap_or_else(|_| "https://localhost/3ds/term".to_string())
});

#[derive(Template)]
#[template(path = "index.j2")]
struct IndexTemplate<'a> {
    channel: &'a str,
    frame_url: String,
    configuration_url: String,
    acs_url: &'a str,
    term_url: &'a str,
}

/// Parent controller page: opens a frame on a fresh channel and answers its
/// configuration request.
pub(crate) async fn index() -> Response {
    let channel = ChannelIdentifier::generate();
    let template = IndexTemplate {
        channel: channel.as_str(),
        frame_url: bank_frame_url(&channel, true),
        configuration_url: configuration_url(&channel),
        acs_url: DEMO_ACS_URL.as_str(),
        term_url: DEMO_TERM_URL.as_str(),
    };

    match template.render() {
        Ok(html) => (StatusCode::OK, Html(html)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
