use std::collections::HashMap;

use crate::bank_frame::types::ChannelIdentifier;

/// Query parameter the hosting shell uses to hand the frame its channel.
pub(crate) const CHANNEL_PARAM: &str = "channel";

/// Read the channel identifier handed to the frame, unmodified.
pub fn read_channel_identifier(params: &HashMap<String, String>) -> Option<ChannelIdentifier> {
    params.get(CHANNEL_PARAM).cloned().map(ChannelIdentifier::new)
}
