//! Central configuration for the threeds_bank_frame crate

use std::sync::LazyLock;

const DEFAULT_ROUTE_PREFIX: &str = "/3ds";

/// Route prefix for all bank frame endpoints
///
/// This is the prefix under which the frame page and the configuration
/// endpoint will be mounted. Trailing slashes are dropped so the prefix can
/// be joined with `/bank-frame`.
/// Default: "/3ds"
pub static THREEDS_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    parse_route_prefix(std::env::var("THREEDS_ROUTE_PREFIX").ok().as_deref())
});

fn parse_route_prefix(raw: Option<&str>) -> String {
    let prefix = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if prefix.is_empty() {
        return DEFAULT_ROUTE_PREFIX.to_string();
    }

    if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    }
}
