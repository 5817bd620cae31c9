use axum::Router;
use serde_json::Value;
use std::sync::Once;
use std::time::Duration;
use tokio::task::JoinHandle;

use threeds_bank_frame_axum::{
    ChannelIdentifier, THREEDS_ROUTE_PREFIX, bank_frame_url, configuration_url, init,
    threeds_bank_frame_router_no_trace,
};

/// Load .env_test before any configuration static is touched
fn load_test_environment() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        if let Err(e) = dotenvy::from_filename(".env_test") {
            println!("Warning: Could not load .env_test file: {e}");
        }
        init().expect("bank frame configuration in .env_test is invalid");
    });
}

/// Bank frame router served on an ephemeral local port
pub struct TestServer {
    server_handle: JoinHandle<()>,
    pub origin: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        load_test_environment();

        let app = Router::new().nest(
            THREEDS_ROUTE_PREFIX.as_str(),
            threeds_bank_frame_router_no_trace(),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            server_handle,
            origin: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// Open a frame page in the background; resolves once the frame renders
pub fn open_frame(
    server: &TestServer,
    channel: &ChannelIdentifier,
    show_loader: bool,
) -> JoinHandle<reqwest::Response> {
    let url = format!("{}{}", server.origin, bank_frame_url(channel, show_loader));
    let client = server.client.clone();
    tokio::spawn(async move { client.get(url).send().await.expect("Frame request failed") })
}

/// Post a configuration, retrying while the frame has not registered yet
pub async fn deliver_configuration(
    server: &TestServer,
    channel: &ChannelIdentifier,
    configuration: &Value,
) -> reqwest::Response {
    let url = format!("{}{}", server.origin, configuration_url(channel));

    for _ in 0..200 {
        let response = server
            .client
            .post(&url)
            .json(configuration)
            .send()
            .await
            .expect("Configuration request failed");

        if response.status() != reqwest::StatusCode::NOT_FOUND {
            return response;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("Frame on channel {channel} never registered its configuration request");
}
