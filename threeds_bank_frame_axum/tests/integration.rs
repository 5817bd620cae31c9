/// Integration tests for threeds-bank-frame-axum
///
/// These tests run the bank frame router on a real listener and drive the
/// frame page and the parent-controller configuration endpoint over HTTP.
mod common;

mod integration {
    pub mod bank_frame_flows;
}
