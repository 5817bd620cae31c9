//! Central configuration for the threeds_bank_frame_axum crate

use std::sync::LazyLock;

use threeds_bank_frame::{ChannelIdentifier, THREEDS_ROUTE_PREFIX};

/// Path of the bank frame page
/// Default: "/3ds/bank-frame"
pub static THREEDS_BANK_FRAME_PATH: LazyLock<String> =
    LazyLock::new(|| format!("{}/bank-frame", *THREEDS_ROUTE_PREFIX));

/// URL a parent controller embeds to open a frame on `channel`.
pub fn bank_frame_url(channel: &ChannelIdentifier, show_loader: bool) -> String {
    frame_url(THREEDS_BANK_FRAME_PATH.as_str(), channel, show_loader)
}

/// URL the parent controller posts the configuration for `channel` to.
pub fn configuration_url(channel: &ChannelIdentifier) -> String {
    format!(
        "{}/{}/configuration",
        *THREEDS_BANK_FRAME_PATH,
        urlencoding::encode(channel.as_str())
    )
}

fn frame_url(path: &str, channel: &ChannelIdentifier, show_loader: bool) -> String {
    let mut url = format!("{}?channel={}", path, urlencoding::encode(channel.as_str()));
    if show_loader {
        url.push_str("&showLoader=true");
    }
    url
}
