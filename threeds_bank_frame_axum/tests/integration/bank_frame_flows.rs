use serde_json::{Value, json};
use threeds_bank_frame_axum::ChannelIdentifier;

use crate::common::{TestServer, deliver_configuration, open_frame};

fn configuration(acs_url: &str, term_url: &str) -> Value {
    json!({
        "acsUrl": acs_url,
        "pareq": "the pareq",
        "md": "the md",
        "termUrl": term_url
    })
}

/// A valid configuration renders the auto-submitting POST form
#[tokio::test]
async fn test_valid_configuration_renders_redirect_form() {
    let server = TestServer::start().await;
    let channel = ChannelIdentifier::generate();

    let frame = open_frame(&server, &channel, false);
    let delivered = deliver_configuration(
        &server,
        &channel,
        &configuration("http://example.com/acs", "https://operator.com/x"),
    )
    .await;
    assert_eq!(delivered.status(), reqwest::StatusCode::NO_CONTENT);

    let response = frame.await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CACHE_CONTROL)
            .unwrap(),
        "no-store"
    );

    let html = response.text().await.unwrap();
    assert!(html.contains(r#"action="http://example.com/acs""#));
    assert!(html.contains(r#"method="POST""#));
    assert_eq!(html.matches(r#"type="hidden""#).count(), 3);
    assert!(html.contains(r#"name="PaReq" value="the pareq""#));
    assert!(html.contains(r#"name="MD" value="the md""#));
    assert!(html.contains(r#"name="TermUrl" value="https://operator.com/x""#));
    assert!(html.contains(r#"id="loader" class="hidden""#));
}

/// A term URL off the operator domains is rejected on both sides
#[tokio::test]
async fn test_foreign_term_url_is_rejected() {
    let server = TestServer::start().await;
    let channel = ChannelIdentifier::generate();

    let frame = open_frame(&server, &channel, false);
    let delivered = deliver_configuration(
        &server,
        &channel,
        &configuration("http://example.com/acs", "https://malicious.domain.com"),
    )
    .await;

    assert_eq!(delivered.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = delivered.json().await.unwrap();
    assert_eq!(body["type"], "internal");
    assert_eq!(body["code"], "THREEDS_TERM_URL_REQUIRES_OPERATOR_DOMAIN");
    assert_eq!(body["message"], "Term Url must be on an operator domain.");

    let response = frame.await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let text = response.text().await.unwrap();
    assert!(text.contains("THREEDS_TERM_URL_REQUIRES_OPERATOR_DOMAIN"));
    assert!(!text.contains("<form"));
}

/// A script ACS URL is replaced with about:blank
#[tokio::test]
async fn test_script_acs_url_submits_to_blank() {
    let server = TestServer::start().await;
    let channel = ChannelIdentifier::generate();

    let frame = open_frame(&server, &channel, false);
    let delivered = deliver_configuration(
        &server,
        &channel,
        &configuration(
            "jaVa\nscript:alert(document.domain)",
            "https://operator.com/some/url",
        ),
    )
    .await;
    assert_eq!(delivered.status(), reqwest::StatusCode::NO_CONTENT);

    let html = frame.await.unwrap().text().await.unwrap();
    assert!(html.contains(r#"action="about:blank""#));
    assert!(!html.contains("alert(document.domain)"));
}

#[tokio::test]
async fn test_show_loader_reveals_loader() {
    let server = TestServer::start().await;
    let channel = ChannelIdentifier::generate();

    let frame = open_frame(&server, &channel, true);
    let _ = deliver_configuration(
        &server,
        &channel,
        &configuration("https://bank.example.com/acs", "https://pay.operator-gateway.net/x"),
    )
    .await;

    let html = frame.await.unwrap().text().await.unwrap();
    assert!(html.contains(r#"id="loader" class="""#));
}

/// The configuration is delivered at most once per frame
#[tokio::test]
async fn test_second_configuration_is_not_delivered() {
    let server = TestServer::start().await;
    let channel = ChannelIdentifier::generate();

    let frame = open_frame(&server, &channel, false);
    let body = configuration("http://example.com/acs", "https://operator.com/x");
    let _ = deliver_configuration(&server, &channel, &body).await;
    let _ = frame.await.unwrap();

    let url = format!(
        "{}{}",
        server.origin,
        threeds_bank_frame_axum::configuration_url(&channel)
    );
    let second = server.client.post(url).json(&body).send().await.unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = second.json().await.unwrap();
    assert_eq!(body["code"], "THREEDS_NO_PENDING_CONFIGURATION_REQUEST");
}

#[tokio::test]
async fn test_frame_without_channel_is_bad_request() {
    let server = TestServer::start().await;

    let url = format!(
        "{}{}?showLoader=true",
        server.origin,
        *threeds_bank_frame_axum::THREEDS_BANK_FRAME_PATH
    );
    let response = server.client.get(url).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_serves_loader_stylesheet() {
    let server = TestServer::start().await;

    let url = format!(
        "{}{}.css",
        server.origin,
        *threeds_bank_frame_axum::THREEDS_BANK_FRAME_PATH
    );
    let response = server.client.get(url).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap(),
        "text/css"
    );
    assert!(response.text().await.unwrap().contains("#loader.hidden"));
}
