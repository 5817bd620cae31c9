use axum::{Router, routing::get};

use threeds_bank_frame_axum::{THREEDS_ROUTE_PREFIX, threeds_bank_frame_router};

mod handlers;
mod server;

use crate::{
    handlers::index,
    server::{init_tracing, spawn_http_server},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_bank_frame");

    // Fails fast on a missing operator allowlist or a bad frame origin
    threeds_bank_frame_axum::init()?;

    let app = Router::new()
        .route("/", get(index))
        .nest(THREEDS_ROUTE_PREFIX.as_str(), threeds_bank_frame_router());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    spawn_http_server(port, app).await?;
    Ok(())
}
